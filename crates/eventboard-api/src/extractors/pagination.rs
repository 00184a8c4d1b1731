//! Pagination and listing query extractors
//!
//! `page` and `limit` travel together; either both or neither must be given.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use eventboard_core::{EventFilter, EventStatus, Page, Snowflake};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Validated pagination window; `None` returns every row
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination(pub Option<Page>);

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        Ok(Self(Page::from_parts(params.page, params.limit)?))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Pagination::try_from(params)
    }
}

/// Raw event listing filters
#[derive(Debug, Default, Deserialize)]
pub struct EventFilterParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub creator_id: Option<String>,
}

/// Validated filter for `GET /events`
#[derive(Debug, Clone, Copy, Default)]
pub struct EventQuery(pub EventFilter);

impl TryFrom<EventFilterParams> for EventQuery {
    type Error = ApiError;

    fn try_from(params: EventFilterParams) -> Result<Self, Self::Error> {
        let status = params
            .status
            .as_deref()
            .map(str::parse::<EventStatus>)
            .transpose()?;
        let creator_id = params
            .creator_id
            .as_deref()
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid creator_id format"))
            })
            .transpose()?;

        Ok(Self(EventFilter { status, creator_id }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for EventQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<EventFilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        EventQuery::try_from(params)
    }
}
