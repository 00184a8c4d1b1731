//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in eventboard-core.

mod application;
mod error;
mod event;
mod user;

pub use application::PgApplicationRepository;
pub use event::PgEventRepository;
pub use user::PgUserRepository;

pub(crate) use error::corrupt_value;
