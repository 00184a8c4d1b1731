//! Event application - a user's registration for an event

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Event;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Review state of an application. Only `Pending` can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn allowed_next(self) -> &'static [ApplicationStatus] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next().contains(&next)
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
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(DomainError::ValidationError(format!(
                "unknown application status: {other}"
            ))),
        }
    }
}

/// A reviewer's decision on a pending application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationReview {
    pub status: ApplicationStatus,
    pub reviewer_id: Snowflake,
    pub reviewed_at: DateTime<Utc>,
}

/// EventApplication entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventApplication {
    pub id: Snowflake,
    pub event_id: Snowflake,
    pub user_id: Snowflake,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    /// `None` when the system approved it automatically
    pub reviewed_by_id: Option<Snowflake>,
}

impl EventApplication {
    /// Build the application a user gets when applying to `event`.
    ///
    /// Events without approval auto-approve on submission.
    pub fn submit(id: Snowflake, event: &Event, user_id: Snowflake) -> Self {
        let now = Utc::now();
        let (status, reviewed_at) = if event.requires_approval {
            (ApplicationStatus::Pending, None)
        } else {
            (ApplicationStatus::Approved, Some(now))
        };
        Self {
            id,
            event_id: event.id,
            user_id,
            status,
            applied_at: now,
            reviewed_at,
            reviewed_by_id: None,
        }
    }

    /// Validate and record a review decision in memory.
    pub fn review(&self, status: ApplicationStatus, reviewer_id: Snowflake) -> Result<ApplicationReview, DomainError> {
        let status = self.status.transition_to(status)?;
        Ok(ApplicationReview {
            status,
            reviewer_id,
            reviewed_at: Utc::now(),
        })
    }

    pub fn apply_review(&mut self, review: ApplicationReview) {
        self.status = review.status;
        self.reviewed_at = Some(review.reviewed_at);
        self.reviewed_by_id = Some(review.reviewer_id);
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == ApplicationStatus::Approved
    }
}
