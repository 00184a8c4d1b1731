//! Event entity - a scheduled gathering with a capacity and a lifecycle

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Publication state of an event.
///
/// ```text
/// DRAFT ──▶ PUBLISHED ──▶ CANCELED
///   └──────────────────────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Draft,
    Published,
    Canceled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Re-stating the current status is always allowed.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Published | Self::Canceled) | (Self::Published, Self::Canceled)
        ) || self == next
    }

    pub fn transition_to(self, next: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Canceled
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "CANCELED" | "CANCELLED" => Ok(Self::Canceled),
            other => Err(DomainError::ValidationError(format!(
                "unknown event status: {other}"
            ))),
        }
    }
}

/// Input for creating an event
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub virtual_link: Option<String>,
    pub is_virtual: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub capacity: i32,
    pub requires_approval: bool,
}

/// Partial update for an event. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub virtual_link: Option<String>,
    pub is_virtual: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
    pub requires_approval: Option<bool>,
    pub status: Option<EventStatus>,
}

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Snowflake,
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
    pub creator_id: Snowflake,
    pub version: i32,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new draft event owned by `creator_id`
    pub fn create(id: Snowflake, draft: EventDraft, creator_id: Snowflake) -> Result<Self, DomainError> {
        let now = Utc::now();
        let mut event = Self {
            id,
            name: draft.name.trim().to_string(),
            description: non_empty(draft.description),
            location: non_empty(draft.location),
            virtual_link: non_empty(draft.virtual_link),
            is_virtual: draft.is_virtual,
            start_date: draft.start_date,
            end_date: draft.end_date,
            capacity: draft.capacity,
            requires_approval: draft.requires_approval,
            status: EventStatus::Draft,
            creator_id,
            version: 0,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        event.normalize_venue();
        event.validate()?;
        Ok(event)
    }

    /// Merge `changes` into the event.
    ///
    /// On error the event is left untouched. The version is not bumped here;
    /// the store does that as part of the conditional write.
    pub fn apply_changes(&mut self, changes: EventChanges) -> Result<(), DomainError> {
        let mut next = self.clone();

        if let Some(name) = changes.name {
            next.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            next.description = non_empty(Some(description));
        }
        if let Some(location) = changes.location {
            next.location = non_empty(Some(location));
        }
        if let Some(link) = changes.virtual_link {
            next.virtual_link = non_empty(Some(link));
        }
        if let Some(is_virtual) = changes.is_virtual {
            next.is_virtual = is_virtual;
        }
        if let Some(start_date) = changes.start_date {
            next.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            next.end_date = Some(end_date);
        }
        if let Some(capacity) = changes.capacity {
            next.capacity = capacity;
        }
        if let Some(requires_approval) = changes.requires_approval {
            next.requires_approval = requires_approval;
        }
        if let Some(status) = changes.status {
            next.status = self.status.transition_to(status)?;
        }

        next.normalize_venue();
        next.validate()?;
        next.updated_at = Utc::now();
        *self = next;
        Ok(())
    }

    /// Clear whichever venue field does not apply to the current mode.
    fn normalize_venue(&mut self) {
        if self.is_virtual {
            self.location = None;
        } else {
            self.virtual_link = None;
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::ValidationError("name is required".to_string()));
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }
        if self
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LENGTH)
        {
            return Err(DomainError::ValidationError(format!(
                "description must be at most {MAX_DESCRIPTION_LENGTH} characters"
            )));
        }
        if self.is_virtual && self.virtual_link.is_none() {
            return Err(DomainError::ValidationError(
                "virtual_link is required for virtual events".to_string(),
            ));
        }
        if !self.is_virtual && self.location.is_none() {
            return Err(DomainError::ValidationError(
                "location is required for in-person events".to_string(),
            ));
        }
        if self.end_date.is_some_and(|end| end <= self.start_date) {
            return Err(DomainError::ValidationError(
                "end_date must be after start_date".to_string(),
            ));
        }
        if self.capacity <= 0 {
            return Err(DomainError::ValidationError(
                "capacity must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.creator_id == user_id
    }

    #[inline]
    pub fn is_draft(&self) -> bool {
        self.status == EventStatus::Draft
    }

    /// Only live, published events take new applications.
    pub fn accepts_applications(&self) -> bool {
        !self.is_deleted && self.status == EventStatus::Published
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now
    }

    /// Soft-deleted events are only visible to their creator.
    pub fn is_visible_to(&self, viewer: Option<Snowflake>) -> bool {
        !self.is_deleted || viewer.is_some_and(|v| self.is_owned_by(v))
    }

    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.is_deleted = true;
        self.deleted_at = Some(at);
        self.updated_at = at;
    }

    pub fn mark_restored(&mut self, at: DateTime<Utc>) {
        self.is_deleted = false;
        self.deleted_at = None;
        self.updated_at = at;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
