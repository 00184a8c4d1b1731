//! Event handlers
//!
//! Endpoints for the event lifecycle: create, read, versioned update,
//! soft delete and restore.

use axum::{extract::State, Json};
use eventboard_service::{
    CreateEventRequest, EventDetailsResponse, EventLifecycleService, EventResponse,
    UpdateEventRequest,
};

use crate::extractors::{
    AuthUser, EventIdPath, EventQuery, OptionalAuthUser, Pagination, ValidatedJson,
};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a new event in DRAFT status
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventLifecycleService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List live events
///
/// GET /events?status=&creator_id=&page=&limit=
pub async fn list_events(
    State(state): State<AppState>,
    _viewer: OptionalAuthUser,
    EventQuery(filter): EventQuery,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventLifecycleService::new(state.service_context());
    let response = service.list(filter, page).await?;
    Ok(Json(response))
}

/// List the caller's soft-deleted events
///
/// GET /events/trash
pub async fn list_trash(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventLifecycleService::new(state.service_context());
    let response = service.list_trash(auth.user_id, page).await?;
    Ok(Json(response))
}

/// Get an event with its creator and applications
///
/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<Json<EventDetailsResponse>> {
    let service = EventLifecycleService::new(state.service_context());
    let response = service.get(event_id, viewer.user_id()).await?;
    Ok(Json(response))
}

/// Update an event; the body carries the version last read
///
/// PUT /events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    EventIdPath(event_id): EventIdPath,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventLifecycleService::new(state.service_context());
    let response = service.update(event_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Soft-delete an event
///
/// DELETE /events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<Json<EventResponse>> {
    let service = EventLifecycleService::new(state.service_context());
    let response = service.soft_delete(event_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Restore a soft-deleted event
///
/// POST /events/{event_id}/restore
pub async fn restore_event(
    State(state): State<AppState>,
    auth: AuthUser,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<Json<EventResponse>> {
    let service = EventLifecycleService::new(state.service_context());
    let response = service.restore(event_id, auth.user_id).await?;
    Ok(Json(response))
}
