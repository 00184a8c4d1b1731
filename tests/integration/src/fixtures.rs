//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Emails stay unique across runs against a persistent database
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let run = Utc::now().timestamp_millis();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{run}-{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub provider: String,
    pub created_at: String,
}

/// Create event request
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub is_virtual: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub capacity: i32,
    pub requires_approval: bool,
}

impl CreateEventRequest {
    /// An open event a week from now
    pub fn unique(capacity: i32) -> Self {
        let start = Utc::now() + Duration::days(7);
        Self {
            name: format!("Meetup #{}", unique_suffix()),
            description: Some("Monthly community meetup".to_string()),
            location: Some("Main hall".to_string()),
            is_virtual: false,
            start_date: start,
            end_date: Some(start + Duration::hours(3)),
            capacity,
            requires_approval: false,
        }
    }

    pub fn with_approval(mut self) -> Self {
        self.requires_approval = true;
        self
    }
}

/// Partial event update; unset fields are left out of the body
#[derive(Debug, Default, Serialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub version: i32,
}

impl UpdateEventRequest {
    pub fn status(status: &str, version: i32) -> Self {
        Self {
            status: Some(status.to_string()),
            version,
            ..Default::default()
        }
    }

    pub fn rename(name: &str, version: i32) -> Self {
        Self {
            name: Some(name.to_string()),
            version,
            ..Default::default()
        }
    }
}

/// Event response
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub capacity: i32,
    pub requires_approval: bool,
    pub status: String,
    pub creator_id: String,
    pub version: i32,
    pub is_deleted: bool,
    pub deleted_at: Option<String>,
}

/// Event with creator and applications
#[derive(Debug, Deserialize)]
pub struct EventDetailsResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub creator: Option<PublicUserResponse>,
    pub applications: Vec<ApplicationWithApplicantResponse>,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub name: String,
}

/// Application response
#[derive(Debug, Deserialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub status: String,
    pub reviewed_by_id: Option<String>,
}

/// Application with applicant
#[derive(Debug, Deserialize)]
pub struct ApplicationWithApplicantResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub applicant: Option<PublicUserResponse>,
}

/// Registration check response
#[derive(Debug, Deserialize)]
pub struct RegistrationStatusResponse {
    pub is_registered: bool,
    pub status: Option<String>,
}

/// Application review request
#[derive(Debug, Serialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: String,
}

impl UpdateApplicationStatusRequest {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}
