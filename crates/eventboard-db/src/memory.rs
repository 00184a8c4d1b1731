//! In-process implementation of every repository trait.
//!
//! Backs the service tests and lets the server run without PostgreSQL. One
//! mutex guards all tables, so each trait method is atomic the same way the
//! PostgreSQL transactions are.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use eventboard_core::entities::{
    ApplicationReview, ApplicationStatus, Event, EventApplication, EventStatus, User,
};
use eventboard_core::error::DomainError;
use eventboard_core::traits::{
    ApplicationRepository, EventFilter, EventRepository, RepoResult, UserRepository,
};
use eventboard_core::value_objects::{Page, Snowflake};

#[derive(Debug, Default)]
struct Tables {
    // BTreeMap keeps id order, which is the listing order everywhere
    users: BTreeMap<Snowflake, (User, Option<String>)>,
    events: BTreeMap<Snowflake, Event>,
    applications: BTreeMap<Snowflake, EventApplication>,
}

impl Tables {
    fn approved_count(&self, event_id: Snowflake) -> i64 {
        self.applications
            .values()
            .filter(|a| a.event_id == event_id && a.is_approved())
            .count() as i64
    }
}

/// Shared in-memory store. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn paged<T>(items: Vec<T>, page: Option<Page>) -> Vec<T> {
    match page {
        Some(page) => page.apply(items),
        None => items,
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.tables.lock().users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        let tables = self.tables.lock();
        let mut found: Vec<User> = ids
            .iter()
            .filter_map(|id| tables.users.get(id).map(|(u, _)| u.clone()))
            .collect();
        found.sort_by_key(|u| u.id);
        found.dedup_by_key(|u| u.id);
        Ok(found)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let needle = email.trim().to_lowercase();
        Ok(self
            .tables
            .lock()
            .users
            .values()
            .find(|(u, _)| u.email.to_lowercase() == needle)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let email = user.email.to_lowercase();
        if tables
            .users
            .values()
            .any(|(u, _)| u.email.to_lowercase() == email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }
        tables
            .users
            .insert(user.id, (user.clone(), password_hash.map(str::to_string)));
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self
            .tables
            .lock()
            .users
            .get(&id)
            .and_then(|(_, hash)| hash.clone()))
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>> {
        Ok(self.tables.lock().events.get(&id).cloned())
    }

    async fn list(&self, filter: EventFilter, page: Option<Page>) -> RepoResult<Vec<Event>> {
        let events: Vec<Event> = self
            .tables
            .lock()
            .events
            .values()
            .filter(|e| !e.is_deleted)
            .filter(|e| filter.status.is_none_or(|s| e.status == s))
            .filter(|e| filter.creator_id.is_none_or(|c| e.creator_id == c))
            .cloned()
            .collect();
        Ok(paged(events, page))
    }

    async fn list_deleted_by_creator(
        &self,
        creator_id: Snowflake,
        page: Option<Page>,
    ) -> RepoResult<Vec<Event>> {
        let events: Vec<Event> = self
            .tables
            .lock()
            .events
            .values()
            .filter(|e| e.is_deleted && e.creator_id == creator_id)
            .cloned()
            .collect();
        Ok(paged(events, page))
    }

    async fn create(&self, event: &Event) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.events.contains_key(&event.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate event id {}",
                event.id
            )));
        }
        tables.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update_versioned(&self, event: &Event, expected_version: i32) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        let Some(stored) = tables.events.get_mut(&event.id) else {
            return Ok(false);
        };
        if stored.is_deleted || stored.version != expected_version {
            return Ok(false);
        }
        let mut next = event.clone();
        next.version = stored.version + 1;
        next.is_deleted = stored.is_deleted;
        next.deleted_at = stored.deleted_at;
        next.created_at = stored.created_at;
        next.creator_id = stored.creator_id;
        *stored = next;
        Ok(true)
    }

    async fn soft_delete(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        match tables.events.get_mut(&id) {
            Some(event) if !event.is_deleted => {
                event.mark_deleted(at);
                event.version += 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn restore(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        match tables.events.get_mut(&id) {
            Some(event) if event.is_deleted => {
                event.mark_restored(at);
                event.version += 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<EventApplication>> {
        Ok(self.tables.lock().applications.get(&id).cloned())
    }

    async fn find_by_event_and_user(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<EventApplication>> {
        Ok(self
            .tables
            .lock()
            .applications
            .values()
            .find(|a| a.event_id == event_id && a.user_id == user_id)
            .cloned())
    }

    async fn find_by_event(
        &self,
        event_id: Snowflake,
        page: Option<Page>,
    ) -> RepoResult<Vec<EventApplication>> {
        let apps: Vec<EventApplication> = self
            .tables
            .lock()
            .applications
            .values()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect();
        Ok(paged(apps, page))
    }

    async fn count_approved(&self, event_id: Snowflake) -> RepoResult<i64> {
        Ok(self.tables.lock().approved_count(event_id))
    }

    async fn apply_within_capacity(&self, application: &EventApplication) -> RepoResult<()> {
        let mut tables = self.tables.lock();

        let capacity = tables
            .events
            .get(&application.event_id)
            .filter(|e| !e.is_deleted && e.status == EventStatus::Published)
            .map(|e| e.capacity)
            .ok_or(DomainError::EventNotFound(application.event_id))?;
        if tables
            .applications
            .values()
            .any(|a| a.event_id == application.event_id && a.user_id == application.user_id)
        {
            return Err(DomainError::AlreadyRegistered);
        }
        if tables.approved_count(application.event_id) >= i64::from(capacity) {
            return Err(DomainError::CapacityReached);
        }

        tables
            .applications
            .insert(application.id, application.clone());
        Ok(())
    }

    async fn review(
        &self,
        application: &EventApplication,
        review: ApplicationReview,
    ) -> RepoResult<EventApplication> {
        let mut tables = self.tables.lock();

        if review.status == ApplicationStatus::Approved {
            let capacity = tables
                .events
                .get(&application.event_id)
                .filter(|e| !e.is_deleted)
                .map(|e| e.capacity)
                .ok_or(DomainError::EventNotFound(application.event_id))?;
            if tables.approved_count(application.event_id) >= i64::from(capacity) {
                return Err(DomainError::CapacityReached);
            }
        }

        let stored = tables
            .applications
            .get_mut(&application.id)
            .filter(|a| a.status == application.status)
            .ok_or(DomainError::ApplicationModified)?;
        stored.apply_review(review);
        Ok(stored.clone())
    }

    async fn delete_by_event_and_user(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        let before = tables.applications.len();
        tables
            .applications
            .retain(|_, a| !(a.event_id == event_id && a.user_id == user_id));
        Ok(tables.applications.len() < before)
    }
}
