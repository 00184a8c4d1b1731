//! # eventboard-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! authorization guard. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod guard;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ApplicationReview, ApplicationStatus, AuthProvider, Event, EventApplication, EventChanges,
    EventDraft, EventStatus, User,
};
pub use error::DomainError;
pub use traits::{
    ApplicationRepository, EventFilter, EventRepository, RepoResult, UserRepository,
};
pub use value_objects::{Page, Snowflake, SnowflakeGenerator, SnowflakeParseError};
