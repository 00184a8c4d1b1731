//! Domain entities - core business objects

mod application;
mod event;
mod user;

pub use application::{ApplicationReview, ApplicationStatus, EventApplication};
pub use event::{Event, EventChanges, EventDraft, EventStatus};
pub use user::{AuthProvider, User};
