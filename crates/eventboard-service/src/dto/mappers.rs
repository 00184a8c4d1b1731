//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use eventboard_core::entities::{Event, EventApplication, User};

use super::responses::{
    ApplicationResponse, ApplicationWithApplicantResponse, EventDetailsResponse, EventResponse,
    PublicUserResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            provider: user.provider,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            virtual_link: event.virtual_link.clone(),
            is_virtual: event.is_virtual,
            start_date: event.start_date,
            end_date: event.end_date,
            capacity: event.capacity,
            requires_approval: event.requires_approval,
            status: event.status,
            creator_id: event.creator_id.to_string(),
            version: event.version,
            is_deleted: event.is_deleted,
            deleted_at: event.deleted_at,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

/// Event with creator and applications (helper for mapping)
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub event: Event,
    pub creator: Option<User>,
    pub applications: Vec<ApplicationWithApplicant>,
}

impl From<EventDetails> for EventDetailsResponse {
    fn from(details: EventDetails) -> Self {
        Self {
            event: EventResponse::from(&details.event),
            creator: details.creator.as_ref().map(PublicUserResponse::from),
            applications: details
                .applications
                .into_iter()
                .map(ApplicationWithApplicantResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// Application Mappers
// ============================================================================

impl From<&EventApplication> for ApplicationResponse {
    fn from(app: &EventApplication) -> Self {
        Self {
            id: app.id.to_string(),
            event_id: app.event_id.to_string(),
            user_id: app.user_id.to_string(),
            status: app.status,
            applied_at: app.applied_at,
            reviewed_at: app.reviewed_at,
            reviewed_by_id: app.reviewed_by_id.map(|id| id.to_string()),
        }
    }
}

impl From<EventApplication> for ApplicationResponse {
    fn from(app: EventApplication) -> Self {
        Self::from(&app)
    }
}

/// Application with its applicant (helper for mapping)
#[derive(Debug, Clone)]
pub struct ApplicationWithApplicant {
    pub application: EventApplication,
    pub applicant: Option<User>,
}

impl From<ApplicationWithApplicant> for ApplicationWithApplicantResponse {
    fn from(item: ApplicationWithApplicant) -> Self {
        Self {
            application: ApplicationResponse::from(&item.application),
            applicant: item.applicant.as_ref().map(PublicUserResponse::from),
        }
    }
}
