//! Authentication service
//!
//! Handles credential registration, login, and token refresh.

use eventboard_common::auth::{hash_password, validate_password_strength, verify_password};
use eventboard_common::AppError;
use eventboard_core::entities::User;
use eventboard_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = User::new(
            self.ctx.generate_id(),
            request.name.trim().to_string(),
            request.email,
        );

        // a concurrent registration can still win the unique index
        self.ctx
            .user_repo()
            .create(&user, Some(&password_hash))
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_for(&user)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // accounts created through an external provider have no password
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_for(&user)
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let (user_id, tokens) = self.ctx.jwt_service().refresh(&request.refresh_token)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Refresh for unknown user");
                ServiceError::App(AppError::InvalidToken)
            })?;

        Ok(AuthResponse::new(
            tokens.access_token,
            tokens.refresh_token,
            tokens.expires_in,
            UserResponse::from(&user),
        ))
    }

    fn issue_for(&self, user: &User) -> ServiceResult<AuthResponse> {
        let tokens = self.ctx.jwt_service().issue(user.id)?;

        Ok(AuthResponse::new(
            tokens.access_token,
            tokens.refresh_token,
            tokens.expires_in,
            UserResponse::from(user),
        ))
    }
}
