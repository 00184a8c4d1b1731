//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::{EventFilterParams, EventQuery, Pagination, PaginationParams};
pub use path::{ApplicationIdPath, EventIdPath};
pub use validated::ValidatedJson;
