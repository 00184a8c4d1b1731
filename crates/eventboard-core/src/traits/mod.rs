//! Repository ports

mod repositories;

pub use repositories::{
    ApplicationRepository, EventFilter, EventRepository, RepoResult, UserRepository,
};
