//! PostgreSQL connection pool and schema migrations

use std::path::Path;
use std::time::Duration;

use eventboard_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Errors raised while preparing the database
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("DATABASE_URL is not configured")]
    MissingUrl,

    #[error("failed to connect: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] MigrateError),
}

/// Create a new PostgreSQL connection pool
#[instrument(skip(config), fields(max = config.max_connections))]
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let url = config.url.as_deref().ok_or(PoolError::MissingUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(url)
        .await?;

    info!("database pool ready");
    Ok(pool)
}

/// Apply pending migrations from `dir`.
///
/// Migrations are read at runtime so the workspace builds without a live
/// database.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool, dir: &str) -> Result<(), PoolError> {
    let migrator = Migrator::new(Path::new(dir)).await?;
    migrator.run(pool).await?;
    info!(count = migrator.iter().count(), "migrations applied");
    Ok(())
}

/// Cheap liveness probe used by the readiness endpoint
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
