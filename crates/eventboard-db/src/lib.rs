//! # eventboard-db
//!
//! Database layer implementing the repository traits of `eventboard-core`.
//!
//! - PostgreSQL via SQLx: pool, runtime migrations, `FromRow` models, mappers
//!   and `Pg*Repository` types
//! - [`memory::InMemoryStore`]: a single-process store with the same
//!   atomicity guarantees, used by tests and database-less runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventboard_db::{create_pool, PgEventRepository};
//!
//! let pool = create_pool(&config.database).await?;
//! let events = PgEventRepository::new(pool.clone());
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, ping, run_migrations, PgPool, PoolError};
pub use repositories::{PgApplicationRepository, PgEventRepository, PgUserRepository};
