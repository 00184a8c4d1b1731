//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{Duration, Utc};
use eventboard_common::auth::JwtService;
use eventboard_core::entities::User;
use eventboard_core::{EventStatus, Snowflake, SnowflakeGenerator};
use eventboard_db::InMemoryStore;

use crate::dto::{CreateEventRequest, UpdateEventRequest};

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) fn test_context() -> ServiceContext {
    ServiceContextBuilder::new()
        .in_memory(&InMemoryStore::new())
        .jwt_service(Arc::new(JwtService::new(
            "service-test-secret-at-least-32-bytes",
            900,
            3600,
        )))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap()
}

/// Insert a user whose name is the local part of `email`
pub(crate) async fn seed_user(ctx: &ServiceContext, email: &str) -> User {
    let name = email.split('@').next().unwrap_or(email).to_string();
    let user = User::new(ctx.generate_id(), name, email.to_string());
    ctx.user_repo().create(&user, None).await.unwrap();
    user
}

pub(crate) fn create_request(capacity: i32, requires_approval: bool) -> CreateEventRequest {
    CreateEventRequest {
        name: "Rust meetup".to_string(),
        description: Some("Talks and pizza".to_string()),
        location: Some("Main hall".to_string()),
        virtual_link: None,
        is_virtual: false,
        start_date: Utc::now() + Duration::days(7),
        end_date: Some(Utc::now() + Duration::days(7) + Duration::hours(3)),
        capacity,
        requires_approval,
    }
}

/// An update that changes nothing but carries `version`
pub(crate) fn update_request(version: i32) -> UpdateEventRequest {
    UpdateEventRequest {
        name: None,
        description: None,
        location: None,
        virtual_link: None,
        is_virtual: None,
        start_date: None,
        end_date: None,
        capacity: None,
        requires_approval: None,
        status: None,
        version,
    }
}

pub(crate) async fn draft_event(ctx: &ServiceContext, creator: Snowflake, capacity: i32) -> Snowflake {
    let event = crate::services::EventLifecycleService::new(ctx)
        .create(creator, create_request(capacity, false))
        .await
        .unwrap();
    event.id.parse().unwrap()
}

pub(crate) async fn published_event(
    ctx: &ServiceContext,
    creator: Snowflake,
    capacity: i32,
    requires_approval: bool,
) -> Snowflake {
    let service = crate::services::EventLifecycleService::new(ctx);
    let event = service
        .create(creator, create_request(capacity, requires_approval))
        .await
        .unwrap();
    let id: Snowflake = event.id.parse().unwrap();

    let mut publish = update_request(event.version);
    publish.status = Some(EventStatus::Published.to_string());
    service.update(id, creator, publish).await.unwrap();
    id
}

/// Rewrite the stored start date so the event has already begun
pub(crate) async fn move_start_to_past(ctx: &ServiceContext, event_id: Snowflake) {
    let mut event = ctx.event_repo().find_by_id(event_id).await.unwrap().unwrap();
    event.start_date = Utc::now() - Duration::hours(1);
    event.end_date = None;
    let version = event.version;
    assert!(ctx.event_repo().update_versioned(&event, version).await.unwrap());
}
