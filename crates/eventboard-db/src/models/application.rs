//! Event application database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for event_applications table
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationModel {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by_id: Option<i64>,
}

pub const APPLICATION_COLUMNS: &str =
    "id, event_id, user_id, status, applied_at, reviewed_at, reviewed_by_id";
