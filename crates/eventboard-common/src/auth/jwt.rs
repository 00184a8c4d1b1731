//! JWT access/refresh tokens (HS256 via `jsonwebtoken`).
//!
//! Both tokens of a pair share a session id so a refresh keeps the session.

use chrono::{Duration, Utc};
use eventboard_core::Snowflake;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: TokenType,
    /// Session the token pair belongs to
    pub sid: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        Snowflake::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }
}

/// Access/refresh pair returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Issues and validates tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: i64,
    refresh_ttl: i64,
}

impl JwtService {
    #[must_use]
    pub fn new(secret: &str, access_ttl: i64, refresh_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Start a new session for `user_id`
    pub fn issue(&self, user_id: Snowflake) -> Result<TokenPair, AppError> {
        self.issue_for_session(user_id, &Uuid::new_v4().to_string())
    }

    fn issue_for_session(&self, user_id: Snowflake, sid: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.sign(user_id, TokenType::Access, sid)?,
            refresh_token: self.sign(user_id, TokenType::Refresh, sid)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl,
        })
    }

    fn sign(&self, user_id: Snowflake, token_type: TokenType, sid: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl)).timestamp(),
            token_type,
            sid: sid.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("failed to sign JWT: {e}")))
    }

    fn decode_as(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            },
        )?;

        if data.claims.token_type != expected {
            return Err(AppError::InvalidToken);
        }
        Ok(data.claims)
    }

    /// Validate a bearer token and return its user id
    pub fn authenticate(&self, access_token: &str) -> Result<Snowflake, AppError> {
        self.decode_as(access_token, TokenType::Access)?.user_id()
    }

    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_as(token, TokenType::Access)
    }

    /// Exchange a refresh token for a new pair in the same session
    pub fn refresh(&self, refresh_token: &str) -> Result<(Snowflake, TokenPair), AppError> {
        let claims = self.decode_as(refresh_token, TokenType::Refresh)?;
        let user_id = claims.user_id()?;
        let pair = self.issue_for_session(user_id, &claims.sid)?;
        Ok((user_id, pair))
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
