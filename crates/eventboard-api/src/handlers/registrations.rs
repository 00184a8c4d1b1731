//! Registration handlers
//!
//! Endpoints for applying to events and reviewing applications.

use axum::{extract::State, Json};
use eventboard_service::{
    ApplicationResponse, ApplicationWithApplicantResponse, RegistrationService,
    RegistrationStatusResponse, UpdateApplicationStatusRequest,
};

use crate::extractors::{ApplicationIdPath, AuthUser, EventIdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Apply to a published event
///
/// POST /events/{event_id}/apply
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<Created<Json<ApplicationResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.apply(event_id, auth.user_id).await?;
    Ok(Created(Json(response)))
}

/// Withdraw the caller's application
///
/// DELETE /events/{event_id}/apply
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<NoContent> {
    let service = RegistrationService::new(state.service_context());
    service.cancel(event_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Whether the caller is registered
///
/// GET /events/{event_id}/registration
pub async fn check_registration(
    State(state): State<AppState>,
    auth: AuthUser,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<Json<RegistrationStatusResponse>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.check_registration(event_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Applications for an event (creator only)
///
/// GET /events/{event_id}/applications?page=&limit=
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    EventIdPath(event_id): EventIdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<ApplicationWithApplicantResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let response = service
        .list_applications(event_id, auth.user_id, page)
        .await?;
    Ok(Json(response))
}

/// Approve or reject an application
///
/// PUT /events/applications/{application_id}
pub async fn update_application_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ApplicationIdPath(application_id): ApplicationIdPath,
    ValidatedJson(request): ValidatedJson<UpdateApplicationStatusRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let service = RegistrationService::new(state.service_context());
    let response = service
        .update_status(application_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}
