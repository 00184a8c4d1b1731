//! Database models - SQLx-compatible structs for PostgreSQL tables

mod application;
mod event;
mod user;

pub use application::{ApplicationModel, APPLICATION_COLUMNS};
pub use event::{EventModel, EVENT_COLUMNS};
pub use user::UserModel;
