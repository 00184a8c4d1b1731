//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use eventboard_core::entities::{ApplicationStatus, AuthProvider, EventStatus};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// The authenticated user's own profile
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub provider: AuthProvider,
    pub created_at: DateTime<Utc>,
}

/// Another user as shown next to events and applications
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Event Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub virtual_link: Option<String>,
    pub is_virtual: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub capacity: i32,
    pub requires_approval: bool,
    pub status: EventStatus,
    pub creator_id: String,
    pub version: i32,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event with its creator and applications
#[derive(Debug, Clone, Serialize)]
pub struct EventDetailsResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub creator: Option<PublicUserResponse>,
    pub applications: Vec<ApplicationWithApplicantResponse>,
}

// ============================================================================
// Application Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by_id: Option<String>,
}

/// Application with the applicant's public profile
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithApplicantResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub applicant: Option<PublicUserResponse>,
}

/// Whether the caller holds an application for an event
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationStatusResponse {
    pub is_registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    /// `database` is `None` when the in-memory store is in use
    pub fn ready(database: Option<bool>) -> Self {
        let (healthy, label) = match database {
            Some(true) => (true, "healthy"),
            Some(false) => (false, "unhealthy"),
            None => (true, "in_memory"),
        };
        Self {
            status: if healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
