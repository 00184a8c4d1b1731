//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port, backed by the
//! in-memory store. `test_postgres_smoke` additionally runs against
//! `DATABASE_URL` when it is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_error, assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn register(server: &TestServer) -> AuthResponse {
    let response = server
        .post("/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_event(server: &TestServer, token: &str, request: &CreateEventRequest) -> EventResponse {
    let response = server.post_auth("/events", token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn publish(server: &TestServer, token: &str, event: &EventResponse) -> EventResponse {
    let response = server
        .put_auth(
            &format!("/events/{}", event.id),
            token,
            &UpdateEventRequest::status("PUBLISHED", event.version),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn published_event(server: &TestServer, token: &str, request: CreateEventRequest) -> EventResponse {
    let draft = create_event(server, token, &request).await;
    publish(server, token, &draft).await
}

async fn apply(server: &TestServer, token: &str, event_id: &str) -> reqwest::Response {
    server
        .post_empty_auth(&format!("/events/{event_id}/apply"), token)
        .await
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "in_memory");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.provider, "credentials");
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/auth/register", &request).await.unwrap();

    let response = server.post("/auth/register", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/auth/register", &request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.access_token,
    };
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.name, auth.user.name);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/users/@me", "garbage").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Event Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_create_event_starts_as_draft() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let event = create_event(&server, &auth.access_token, &CreateEventRequest::unique(10)).await;

    assert_eq!(event.status, "DRAFT");
    assert_eq!(event.version, 0);
    assert_eq!(event.creator_id, auth.user.id);
    assert!(!event.is_deleted);
}

#[tokio::test]
async fn test_create_event_rejects_zero_capacity() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth("/events", &auth.access_token, &CreateEventRequest::unique(0))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_publish_then_cancel() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;

    let event = published_event(&server, token, CreateEventRequest::unique(10)).await;
    assert_eq!(event.status, "PUBLISHED");
    assert_eq!(event.version, 1);

    // a published event cannot go back to draft
    let response = server
        .put_auth(
            &format!("/events/{}", event.id),
            token,
            &UpdateEventRequest::status("DRAFT", event.version),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_TRANSITION");

    let response = server
        .put_auth(
            &format!("/events/{}", event.id),
            token,
            &UpdateEventRequest::status("CANCELED", event.version),
        )
        .await
        .unwrap();
    let canceled: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(canceled.status, "CANCELED");
    assert_eq!(canceled.version, 2);
}

#[tokio::test]
async fn test_stale_version_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, &CreateEventRequest::unique(10)).await;
    let path = format!("/events/{}", event.id);

    let response = server
        .put_auth(&path, token, &UpdateEventRequest::rename("Renamed", 0))
        .await
        .unwrap();
    let renamed: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.version, 1);

    // second writer still holds version 0
    let response = server
        .put_auth(&path, token, &UpdateEventRequest::rename("Lost update", 0))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "VERSION_CONFLICT");
}

#[tokio::test]
async fn test_only_creator_can_update() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let other = register(&server).await;
    let event = create_event(&server, &creator.access_token, &CreateEventRequest::unique(10)).await;

    let response = server
        .put_auth(
            &format!("/events/{}", event.id),
            &other.access_token,
            &UpdateEventRequest::rename("Hijacked", event.version),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_EVENT_CREATOR");
}

#[tokio::test]
async fn test_list_events_filters_by_status() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;

    create_event(&server, token, &CreateEventRequest::unique(5)).await;
    let published = published_event(&server, token, CreateEventRequest::unique(5)).await;

    let response = server
        .get(&format!(
            "/events?status=PUBLISHED&creator_id={}",
            auth.user.id
        ))
        .await
        .unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, published.id);

    let response = server
        .get(&format!("/events?creator_id={}", auth.user.id))
        .await
        .unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(events.len(), 2);
}

#[tokio::test]
async fn test_list_events_pagination() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    for _ in 0..3 {
        create_event(&server, &auth.access_token, &CreateEventRequest::unique(5)).await;
    }

    let response = server
        .get(&format!(
            "/events?creator_id={}&page=2&limit=2",
            auth.user.id
        ))
        .await
        .unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(events.len(), 1);

    let response = server.get("/events?page=1").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PAGINATION");

    let response = server.get("/events?page=0&limit=10").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_malformed_event_id() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/events/abc").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");

    let response = server.get("/events/999999").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_EVENT");
}

// ============================================================================
// Soft Delete Tests
// ============================================================================

#[tokio::test]
async fn test_soft_delete_and_restore() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, &CreateEventRequest::unique(10)).await;
    let path = format!("/events/{}", event.id);

    let response = server.delete_auth(&path, token).await.unwrap();
    let deleted: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted.is_deleted);
    assert!(deleted.deleted_at.is_some());
    assert_eq!(deleted.version, event.version + 1);

    // hidden from anonymous readers and public lists
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = server
        .get(&format!("/events?creator_id={}", auth.user.id))
        .await
        .unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.is_empty());

    // still visible to the creator
    let response = server.get_auth(&path, token).await.unwrap();
    let details: EventDetailsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(details.event.is_deleted);

    let response = server.get_auth("/events/trash", token).await.unwrap();
    let trash: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(trash.len(), 1);
    assert_eq!(trash[0].id, event.id);

    let response = server
        .post_empty_auth(&format!("{path}/restore"), token)
        .await
        .unwrap();
    let restored: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!restored.is_deleted);
    assert!(restored.deleted_at.is_none());
    assert_eq!(restored.version, event.version + 2);

    let response = server.get_auth("/events/trash", token).await.unwrap();
    let trash: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(trash.is_empty());
}

#[tokio::test]
async fn test_restore_live_event_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let event = create_event(&server, &auth.access_token, &CreateEventRequest::unique(10)).await;

    let response = server
        .post_empty_auth(&format!("/events/{}/restore", event.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_other_user_cannot_delete() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let other = register(&server).await;
    let event = create_event(&server, &creator.access_token, &CreateEventRequest::unique(10)).await;

    let response = server
        .delete_auth(&format!("/events/{}", event.id), &other.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_apply_to_open_event_is_approved() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let attendee = register(&server).await;
    let event = published_event(&server, &creator.access_token, CreateEventRequest::unique(10)).await;

    let response = apply(&server, &attendee.access_token, &event.id).await;
    let application: ApplicationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(application.status, "APPROVED");
    assert_eq!(application.event_id, event.id);
    assert_eq!(application.user_id, attendee.user.id);

    let response = server
        .get_auth(
            &format!("/events/{}/registration", event.id),
            &attendee.access_token,
        )
        .await
        .unwrap();
    let registration: RegistrationStatusResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(registration.is_registered);
    assert_eq!(registration.status.as_deref(), Some("APPROVED"));

    let response = apply(&server, &attendee.access_token, &event.id).await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ALREADY_REGISTERED");
}

#[tokio::test]
async fn test_apply_to_draft_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let attendee = register(&server).await;
    let event = create_event(&server, &creator.access_token, &CreateEventRequest::unique(10)).await;

    let response = apply(&server, &attendee.access_token, &event.id).await;
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_capacity_is_enforced() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let event = published_event(&server, &creator.access_token, CreateEventRequest::unique(2)).await;

    for _ in 0..2 {
        let attendee = register(&server).await;
        let response = apply(&server, &attendee.access_token, &event.id).await;
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let late = register(&server).await;
    let response = apply(&server, &late.access_token, &event.id).await;
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "CAPACITY_REACHED");
}

#[tokio::test]
async fn test_concurrent_applications_respect_capacity() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let event = published_event(&server, &creator.access_token, CreateEventRequest::unique(3)).await;

    let mut tokens = Vec::new();
    for _ in 0..8 {
        tokens.push(register(&server).await.access_token);
    }

    let responses = apply_concurrently(&server, &tokens, &event.id).await;
    let created = responses
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    let full = responses
        .iter()
        .filter(|s| **s == StatusCode::FORBIDDEN)
        .count();
    assert_eq!(created, 3);
    assert_eq!(full, 5);
}

async fn apply_concurrently(server: &TestServer, tokens: &[String], event_id: &str) -> Vec<StatusCode> {
    let url = format!("{}/events/{event_id}/apply", server.base_url());
    let handles: Vec<_> = tokens
        .iter()
        .map(|token| {
            let request = server.client.post(&url).bearer_auth(token);
            tokio::spawn(async move { request.send().await.map(|r| r.status()) })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap().unwrap());
    }
    statuses
}

#[tokio::test]
async fn test_cancel_application() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let attendee = register(&server).await;
    let event = published_event(&server, &creator.access_token, CreateEventRequest::unique(10)).await;
    let path = format!("/events/{}/apply", event.id);

    apply(&server, &attendee.access_token, &event.id).await;

    let response = server.delete_auth(&path, &attendee.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &attendee.access_token).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_APPLICATION");

    let response = server
        .get_auth(
            &format!("/events/{}/registration", event.id),
            &attendee.access_token,
        )
        .await
        .unwrap();
    let registration: RegistrationStatusResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!registration.is_registered);
    assert!(registration.status.is_none());
}

#[tokio::test]
async fn test_cancel_after_start_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let attendee = register(&server).await;
    let event = published_event(&server, &creator.access_token, CreateEventRequest::unique(10)).await;

    apply(&server, &attendee.access_token, &event.id).await;

    // move the start into the past
    let started = chrono::Utc::now() - chrono::Duration::hours(1);
    let response = server
        .put_auth(
            &format!("/events/{}", event.id),
            &creator.access_token,
            &serde_json::json!({ "start_date": started, "version": event.version }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/events/{}/apply", event.id), &attendee.access_token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "EVENT_ALREADY_STARTED");
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_review_flow() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let first = register(&server).await;
    let second = register(&server).await;
    let event = published_event(
        &server,
        &creator.access_token,
        CreateEventRequest::unique(1).with_approval(),
    )
    .await;

    let response = apply(&server, &first.access_token, &event.id).await;
    let first_app: ApplicationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first_app.status, "PENDING");

    let response = apply(&server, &second.access_token, &event.id).await;
    let second_app: ApplicationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second_app.status, "PENDING");

    // applicants cannot review
    let response = server
        .put_auth(
            &format!("/events/applications/{}", first_app.id),
            &first.access_token,
            &UpdateApplicationStatusRequest::new("APPROVED"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth(
            &format!("/events/{}/applications", event.id),
            &creator.access_token,
        )
        .await
        .unwrap();
    let listed: Vec<ApplicationWithApplicantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|a| a.applicant.is_some()));

    let response = server
        .put_auth(
            &format!("/events/applications/{}", first_app.id),
            &creator.access_token,
            &UpdateApplicationStatusRequest::new("APPROVED"),
        )
        .await
        .unwrap();
    let approved: ApplicationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(approved.status, "APPROVED");
    assert_eq!(approved.reviewed_by_id.as_deref(), Some(creator.user.id.as_str()));

    // capacity 1 is now taken
    let response = server
        .put_auth(
            &format!("/events/applications/{}", second_app.id),
            &creator.access_token,
            &UpdateApplicationStatusRequest::new("APPROVED"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "CAPACITY_REACHED");

    let response = server
        .put_auth(
            &format!("/events/applications/{}", second_app.id),
            &creator.access_token,
            &UpdateApplicationStatusRequest::new("REJECTED"),
        )
        .await
        .unwrap();
    let rejected: ApplicationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rejected.status, "REJECTED");

    // decisions are final
    let response = server
        .put_auth(
            &format!("/events/applications/{}", first_app.id),
            &creator.access_token,
            &UpdateApplicationStatusRequest::new("REJECTED"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_TRANSITION");

    // approving twice and approving after a rejection are both transitions
    for app_id in [&first_app.id, &second_app.id] {
        let response = server
            .put_auth(
                &format!("/events/applications/{}", app_id),
                &creator.access_token,
                &UpdateApplicationStatusRequest::new("APPROVED"),
            )
            .await
            .unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "INVALID_TRANSITION");
    }

    let response = server.get(&format!("/events/{}", event.id)).await.unwrap();
    let details: EventDetailsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(details.applications.len(), 2);
    assert_eq!(
        details.creator.map(|c| c.id),
        Some(creator.user.id.clone())
    );
}

#[tokio::test]
async fn test_draft_applications_cannot_be_listed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creator = register(&server).await;
    let event = create_event(&server, &creator.access_token, &CreateEventRequest::unique(5)).await;

    let response = server
        .get_auth(
            &format!("/events/{}/applications", event.id),
            &creator.access_token,
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "EVENT_IS_DRAFT");
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn test_postgres_smoke() {
    let Some(server) = TestServer::start_postgres()
        .await
        .expect("Failed to start server")
    else {
        return;
    };

    let creator = register(&server).await;
    let attendee = register(&server).await;
    let event = published_event(&server, &creator.access_token, CreateEventRequest::unique(1)).await;

    let response = apply(&server, &attendee.access_token, &event.id).await;
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let late = register(&server).await;
    let response = apply(&server, &late.access_token, &event.id).await;
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "CAPACITY_REACHED");

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}
