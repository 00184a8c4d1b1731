//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Writes that guard an invariant across rows
//! (versioned updates, capacity checks) are single operations here so the
//! implementation can make them atomic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ApplicationReview, Event, EventApplication, EventStatus, User};
use crate::error::DomainError;
use crate::value_objects::{Page, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Load several users at once; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user. OAuth users have no password hash.
    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Event Repository
// ============================================================================

/// Filters for listing live events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub creator_id: Option<Snowflake>,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID, soft-deleted ones included
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>>;

    /// List non-deleted events ordered by id
    async fn list(&self, filter: EventFilter, page: Option<Page>) -> RepoResult<Vec<Event>>;

    /// List a creator's soft-deleted events ordered by id
    async fn list_deleted_by_creator(
        &self,
        creator_id: Snowflake,
        page: Option<Page>,
    ) -> RepoResult<Vec<Event>>;

    /// Insert a new event
    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Persist `event` only if the stored row is live and still at
    /// `expected_version`; bumps the version on success.
    ///
    /// Returns `false` when the condition did not hold.
    async fn update_versioned(&self, event: &Event, expected_version: i32) -> RepoResult<bool>;

    /// Mark a live event deleted. Returns `false` if it was missing or already deleted.
    async fn soft_delete(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool>;

    /// Clear the deleted flag. Returns `false` if it was missing or not deleted.
    async fn restore(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool>;
}

// ============================================================================
// Application Repository
// ============================================================================

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find application by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<EventApplication>>;

    /// Find the (unique) application of a user for an event
    async fn find_by_event_and_user(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<EventApplication>>;

    /// List applications of an event ordered by id
    async fn find_by_event(
        &self,
        event_id: Snowflake,
        page: Option<Page>,
    ) -> RepoResult<Vec<EventApplication>>;

    /// Count APPROVED applications of an event
    async fn count_approved(&self, event_id: Snowflake) -> RepoResult<i64>;

    /// Insert `application` while holding the event lock.
    ///
    /// Fails with `EventNotFound` if the event is gone, deleted or not
    /// published, `AlreadyRegistered` on a duplicate, and `CapacityReached`
    /// when approved applications already fill the stored capacity.
    async fn apply_within_capacity(&self, application: &EventApplication) -> RepoResult<()>;

    /// Apply `review` to an application whose status is still `application.status`.
    ///
    /// Approvals are checked against the stored capacity under the same event lock as
    /// [`apply_within_capacity`](Self::apply_within_capacity). Fails with
    /// `ApplicationModified` if the stored status changed meanwhile.
    async fn review(
        &self,
        application: &EventApplication,
        review: ApplicationReview,
    ) -> RepoResult<EventApplication>;

    /// Delete a user's application for an event. Returns `false` if none existed.
    async fn delete_by_event_and_user(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<bool>;
}
