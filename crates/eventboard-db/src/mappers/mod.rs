//! Entity to model mappers
//!
//! `From`/`TryFrom<Model> for Entity` turn database rows into domain objects.
//! Status columns are stored as text and parsed on the way in.

mod application;
mod event;
mod user;

pub use application::applications_from_models;
pub use event::events_from_models;
