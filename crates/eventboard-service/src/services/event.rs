//! Event lifecycle service
//!
//! Creation, versioned updates, soft delete and restore, plus the read paths
//! for single events, listings and the creator's trash.

use std::collections::HashMap;

use chrono::Utc;
use eventboard_core::entities::{Event, EventApplication, User};
use eventboard_core::guard::require_creator;
use eventboard_core::{DomainError, EventFilter, Page, Snowflake};
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    ApplicationWithApplicant, CreateEventRequest, EventDetails, EventDetailsResponse,
    EventResponse, UpdateEventRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Event lifecycle service
pub struct EventLifecycleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventLifecycleService<'a> {
    /// Create a new EventLifecycleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an event in DRAFT status owned by `creator_id`
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        creator_id: Snowflake,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let event = Event::create(self.ctx.generate_id(), request.into(), creator_id)?;

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event.id, creator_id = %creator_id, "Event created");

        Ok(EventResponse::from(&event))
    }

    /// Apply a partial update guarded by the version the client last read
    #[instrument(skip(self, request), fields(expected_version = request.version))]
    pub async fn update(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let mut event = self.live_event(event_id).await?;
        require_creator(&event, user_id)?;

        let expected_version = request.version;
        if event.version != expected_version {
            debug!(
                stored = event.version,
                expected = expected_version,
                "Stale event version"
            );
            return Err(DomainError::VersionConflict.into());
        }

        let (changes, _) = request.into_changes()?;
        event.apply_changes(changes)?;

        if !self
            .ctx
            .event_repo()
            .update_versioned(&event, expected_version)
            .await?
        {
            warn!(event_id = %event_id, "Lost concurrent event update");
            return Err(DomainError::VersionConflict.into());
        }
        event.version = expected_version + 1;

        info!(event_id = %event_id, version = event.version, status = %event.status, "Event updated");

        Ok(EventResponse::from(&event))
    }

    /// Move an event to the creator's trash
    #[instrument(skip(self))]
    pub async fn soft_delete(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<EventResponse> {
        let mut event = self.live_event(event_id).await?;
        require_creator(&event, user_id)?;

        let now = Utc::now();
        if !self.ctx.event_repo().soft_delete(event_id, now).await? {
            return Err(DomainError::EventNotFound(event_id).into());
        }
        event.mark_deleted(now);
        event.version += 1;

        info!(event_id = %event_id, "Event moved to trash");

        Ok(EventResponse::from(&event))
    }

    /// Bring a soft-deleted event back
    ///
    /// Events that are missing, live, or owned by someone else all look the same
    /// to the caller.
    #[instrument(skip(self))]
    pub async fn restore(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<EventResponse> {
        let mut event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .filter(|e| e.is_deleted && e.is_owned_by(user_id))
            .ok_or(DomainError::EventNotFound(event_id))?;

        let now = Utc::now();
        if !self.ctx.event_repo().restore(event_id, now).await? {
            return Err(DomainError::EventNotFound(event_id).into());
        }
        event.mark_restored(now);
        event.version += 1;

        info!(event_id = %event_id, "Event restored");

        Ok(EventResponse::from(&event))
    }

    /// Event with creator and applications
    ///
    /// A soft-deleted event is only returned to its creator.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        event_id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<EventDetailsResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .filter(|e| e.is_visible_to(viewer))
            .ok_or(DomainError::EventNotFound(event_id))?;

        let creator = self.ctx.user_repo().find_by_id(event.creator_id).await?;
        let applications = self
            .ctx
            .application_repo()
            .find_by_event(event_id, None)
            .await?;
        let applications = with_applicants(self.ctx, applications).await?;

        Ok(EventDetails {
            event,
            creator,
            applications,
        }
        .into())
    }

    /// Live events matching `filter`, ordered by id
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: EventFilter,
        page: Option<Page>,
    ) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().list(filter, page).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// The caller's soft-deleted events, ordered by id
    #[instrument(skip(self))]
    pub async fn list_trash(
        &self,
        user_id: Snowflake,
        page: Option<Page>,
    ) -> ServiceResult<Vec<EventResponse>> {
        let events = self
            .ctx
            .event_repo()
            .list_deleted_by_creator(user_id, page)
            .await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    async fn live_event(&self, event_id: Snowflake) -> ServiceResult<Event> {
        Ok(self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .filter(|e| !e.is_deleted)
            .ok_or(DomainError::EventNotFound(event_id))?)
    }
}

/// Attach applicant profiles with a single user lookup
pub(crate) async fn with_applicants(
    ctx: &ServiceContext,
    applications: Vec<EventApplication>,
) -> ServiceResult<Vec<ApplicationWithApplicant>> {
    let ids: Vec<Snowflake> = applications.iter().map(|a| a.user_id).collect();
    let mut users: HashMap<Snowflake, User> = ctx
        .user_repo()
        .find_by_ids(&ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    Ok(applications
        .into_iter()
        .map(|application| ApplicationWithApplicant {
            applicant: users.remove(&application.user_id),
            application,
        })
        .collect())
}
