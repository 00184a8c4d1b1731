//! Service context - dependency container for services
//!
//! Persistence handles are injected once here and borrowed by every
//! request-scoped service.

use std::sync::Arc;

use eventboard_common::auth::JwtService;
use eventboard_core::traits::{ApplicationRepository, EventRepository, UserRepository};
use eventboard_core::{Snowflake, SnowflakeGenerator};
use eventboard_db::{InMemoryStore, PgApplicationRepository, PgEventRepository, PgPool, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    event_repo: Arc<dyn EventRepository>,
    application_repo: Arc<dyn ApplicationRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        event_repo: Arc<dyn EventRepository>,
        application_repo: Arc<dyn ApplicationRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            event_repo,
            application_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn application_repo(&self) -> &dyn ApplicationRepository {
        self.application_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    application_repo: Option<Arc<dyn ApplicationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories sharing `pool`
    pub fn postgres(self, pool: &PgPool) -> Self {
        self.user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
            .application_repo(Arc::new(PgApplicationRepository::new(pool.clone())))
    }

    /// Use one in-memory store for every repository
    pub fn in_memory(self, store: &InMemoryStore) -> Self {
        self.user_repo(Arc::new(store.clone()))
            .event_repo(Arc::new(store.clone()))
            .application_repo(Arc::new(store.clone()))
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn application_repo(mut self, repo: Arc<dyn ApplicationRepository>) -> Self {
        self.application_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::validation(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.event_repo.ok_or_else(|| missing("event_repo"))?,
            self.application_repo.ok_or_else(|| missing("application_repo"))?,
            self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
            self.snowflake_generator
                .unwrap_or_else(|| Arc::new(SnowflakeGenerator::default())),
        ))
    }
}
