//! Registration service
//!
//! Applications to published events and their review by the event creator.
//! Capacity is enforced inside the store, under a per-event lock, both when
//! an application is created and when one is approved.

use chrono::Utc;
use eventboard_core::entities::{ApplicationStatus, Event, EventApplication};
use eventboard_core::guard::require_creator;
use eventboard_core::{DomainError, Page, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    ApplicationResponse, ApplicationWithApplicantResponse, RegistrationStatusResponse,
    UpdateApplicationStatusRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::event::with_applicants;

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    /// Create a new RegistrationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply to a published event
    ///
    /// Auto-approved when the event does not require approval.
    #[instrument(skip(self))]
    pub async fn apply(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<ApplicationResponse> {
        let event = self
            .find_live_event(event_id)
            .await?
            .filter(Event::accepts_applications)
            .ok_or(DomainError::EventNotFound(event_id))?;

        let application = EventApplication::submit(self.ctx.generate_id(), &event, user_id);
        self.ctx
            .application_repo()
            .apply_within_capacity(&application)
            .await?;

        info!(
            application_id = %application.id,
            status = %application.status,
            "Application submitted"
        );

        Ok(ApplicationResponse::from(&application))
    }

    /// Withdraw the caller's application before the event starts
    #[instrument(skip(self))]
    pub async fn cancel(&self, event_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let event = self
            .find_live_event(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        self.ctx
            .application_repo()
            .find_by_event_and_user(event_id, user_id)
            .await?
            .ok_or(DomainError::ApplicationNotFound)?;

        if event.has_started(Utc::now()) {
            return Err(DomainError::EventAlreadyStarted.into());
        }

        if !self
            .ctx
            .application_repo()
            .delete_by_event_and_user(event_id, user_id)
            .await?
        {
            return Err(DomainError::ApplicationNotFound.into());
        }

        info!("Application canceled");

        Ok(())
    }

    /// Whether the caller has applied, and with which status
    #[instrument(skip(self))]
    pub async fn check_registration(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<RegistrationStatusResponse> {
        self.find_live_event(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        let application = self
            .ctx
            .application_repo()
            .find_by_event_and_user(event_id, user_id)
            .await?;

        Ok(RegistrationStatusResponse {
            is_registered: application.is_some(),
            status: application.map(|a| a.status),
        })
    }

    /// Applications for an event, visible to its creator once published
    #[instrument(skip(self))]
    pub async fn list_applications(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
        page: Option<Page>,
    ) -> ServiceResult<Vec<ApplicationWithApplicantResponse>> {
        let event = self
            .find_live_event(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;
        Self::require_reviewer(&event, user_id)?;

        let applications = self
            .ctx
            .application_repo()
            .find_by_event(event_id, page)
            .await?;

        Ok(with_applicants(self.ctx, applications)
            .await?
            .into_iter()
            .map(ApplicationWithApplicantResponse::from)
            .collect())
    }

    /// Approve or reject a pending application
    #[instrument(skip(self, request), fields(status = %request.status))]
    pub async fn update_status(
        &self,
        application_id: Snowflake,
        reviewer_id: Snowflake,
        request: UpdateApplicationStatusRequest,
    ) -> ServiceResult<ApplicationResponse> {
        let status: ApplicationStatus = request.status.parse()?;

        let application = self
            .ctx
            .application_repo()
            .find_by_id(application_id)
            .await?
            .ok_or(DomainError::ApplicationNotFound)?;

        let event = self
            .find_live_event(application.event_id)
            .await?
            .ok_or(DomainError::EventNotFound(application.event_id))?;
        Self::require_reviewer(&event, reviewer_id)?;

        let review = application.review(status, reviewer_id)?;
        let reviewed = self
            .ctx
            .application_repo()
            .review(&application, review)
            .await?;

        info!(
            application_id = %application_id,
            status = %reviewed.status,
            "Application reviewed"
        );

        Ok(ApplicationResponse::from(&reviewed))
    }

    async fn find_live_event(&self, event_id: Snowflake) -> ServiceResult<Option<Event>> {
        Ok(self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .filter(|e| !e.is_deleted))
    }

    fn require_reviewer(event: &Event, user_id: Snowflake) -> Result<(), DomainError> {
        require_creator(event, user_id)?;
        if event.is_draft() {
            return Err(DomainError::EventIsDraft);
        }
        Ok(())
    }
}
