//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters. A malformed or
//! non-positive id is a 400, never a lookup.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use eventboard_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct EventIdParams {
    event_id: String,
}

#[derive(Debug, Deserialize)]
struct ApplicationIdParams {
    application_id: String,
}

/// `:event_id` parsed as a Snowflake
#[derive(Debug, Clone, Copy)]
pub struct EventIdPath(pub Snowflake);

/// `:application_id` parsed as a Snowflake
#[derive(Debug, Clone, Copy)]
pub struct ApplicationIdPath(pub Snowflake);

fn parse_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    Snowflake::parse(raw).map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

#[async_trait]
impl<S> FromRequestParts<S> for EventIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<EventIdParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(Self(parse_id(&params.event_id, "event_id")?))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApplicationIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<ApplicationIdParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(Self(parse_id(&params.application_id, "application_id")?))
    }
}
