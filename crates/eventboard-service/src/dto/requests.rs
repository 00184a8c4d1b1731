//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Domain invariants (venue, dates, transitions) are checked again by the
//! entities; the checks here only reject malformed input early.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use eventboard_core::entities::{EventChanges, EventDraft};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 500, message = "Location must be at most 500 characters"))]
    pub location: Option<String>,

    #[validate(url(message = "Virtual link must be a valid URL"))]
    pub virtual_link: Option<String>,

    #[serde(default)]
    pub is_virtual: bool,

    pub start_date: DateTime<Utc>,

    pub end_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "Capacity must be a positive integer"))]
    pub capacity: i32,

    #[serde(default)]
    pub requires_approval: bool,
}

impl From<CreateEventRequest> for EventDraft {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            location: req.location,
            virtual_link: req.virtual_link,
            is_virtual: req.is_virtual,
            start_date: req.start_date,
            end_date: req.end_date,
            capacity: req.capacity,
            requires_approval: req.requires_approval,
        }
    }
}

/// Update event request
///
/// Every field except `version` is optional; `version` is the value the
/// client last read and must still match the stored one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 500, message = "Location must be at most 500 characters"))]
    pub location: Option<String>,

    #[validate(url(message = "Virtual link must be a valid URL"))]
    pub virtual_link: Option<String>,

    pub is_virtual: Option<bool>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "Capacity must be a positive integer"))]
    pub capacity: Option<i32>,

    pub requires_approval: Option<bool>,

    /// Target status: DRAFT, PUBLISHED or CANCELED
    pub status: Option<String>,

    #[validate(range(min = 0, message = "Version must not be negative"))]
    pub version: i32,
}

impl UpdateEventRequest {
    /// Split into the entity-level change set and the expected version.
    ///
    /// # Errors
    /// Returns the status parse error when `status` is not a known value
    pub fn into_changes(self) -> Result<(EventChanges, i32), eventboard_core::DomainError> {
        let status = self.status.as_deref().map(str::parse).transpose()?;
        Ok((
            EventChanges {
                name: self.name,
                description: self.description,
                location: self.location,
                virtual_link: self.virtual_link,
                is_virtual: self.is_virtual,
                start_date: self.start_date,
                end_date: self.end_date,
                capacity: self.capacity,
                requires_approval: self.requires_approval,
                status,
            },
            self.version,
        ))
    }
}

// ============================================================================
// Application Requests
// ============================================================================

/// Review decision on an application
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateApplicationStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}
