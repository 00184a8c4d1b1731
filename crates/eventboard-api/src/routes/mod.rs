//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, events, health, registrations, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(event_routes())
        .merge(registration_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}

/// Event lifecycle routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(events::create_event).get(events::list_events))
        .route("/events/trash", get(events::list_trash))
        .route(
            "/events/:event_id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/events/:event_id/restore", post(events::restore_event))
}

/// Application and review routes
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events/:event_id/apply",
            post(registrations::apply).delete(registrations::cancel),
        )
        .route(
            "/events/:event_id/registration",
            get(registrations::check_registration),
        )
        .route(
            "/events/:event_id/applications",
            get(registrations::list_applications),
        )
        .route(
            "/events/applications/:application_id",
            put(registrations::update_application_status),
        )
}
