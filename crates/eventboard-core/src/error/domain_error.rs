//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Event not found: {0}")]
    EventNotFound(Snowflake),

    #[error("Application not found")]
    ApplicationNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the event creator can perform this action")]
    NotEventCreator,

    #[error("Event has reached maximum capacity")]
    CapacityReached,

    #[error("Cannot cancel: event already started")]
    EventAlreadyStarted,

    #[error("Applications are not available for draft events")]
    EventIsDraft,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Event was modified concurrently, reload and retry")]
    VersionConflict,

    #[error("User already registered for this event")]
    AlreadyRegistered,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Application was modified concurrently")]
    ApplicationModified,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::ApplicationNotFound => "UNKNOWN_APPLICATION",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::InvalidPagination(_) => "INVALID_PAGINATION",

            Self::NotEventCreator => "NOT_EVENT_CREATOR",
            Self::CapacityReached => "CAPACITY_REACHED",
            Self::EventAlreadyStarted => "EVENT_ALREADY_STARTED",
            Self::EventIsDraft => "EVENT_IS_DRAFT",

            Self::VersionConflict => "VERSION_CONFLICT",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ApplicationModified => "APPLICATION_MODIFIED",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::EventNotFound(_) | Self::ApplicationNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidTransition { .. } | Self::InvalidPagination(_)
        )
    }

    /// Check if this is an authorization (forbidden) error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotEventCreator
                | Self::CapacityReached
                | Self::EventAlreadyStarted
                | Self::EventIsDraft
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::VersionConflict
                | Self::AlreadyRegistered
                | Self::EmailAlreadyExists
                | Self::ApplicationModified
        )
    }
}
