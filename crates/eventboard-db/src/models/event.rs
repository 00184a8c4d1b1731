//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub virtual_link: Option<String>,
    pub is_virtual: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub capacity: i32,
    pub requires_approval: bool,
    pub status: String,
    pub creator_id: i64,
    pub version: i32,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column list shared by every event query
pub const EVENT_COLUMNS: &str = "id, name, description, location, virtual_link, is_virtual, \
     start_date, end_date, capacity, requires_approval, status, creator_id, version, \
     is_deleted, deleted_at, created_at, updated_at";
