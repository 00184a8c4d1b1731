//! User entity - an account that creates events and applies to them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// How the account was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Credentials,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credentials => "credentials",
            Self::Google => "google",
        }
    }

    /// Unknown values fall back to `Credentials`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "google" => Self::Google,
            _ => Self::Credentials,
        }
    }
}

/// User account. The email is fixed once the account exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub provider: AuthProvider,
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a credentials-backed user
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email: email.trim().to_lowercase(),
            provider: AuthProvider::Credentials,
            google_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_google_id(mut self, google_id: String) -> Self {
        self.provider = AuthProvider::Google;
        self.google_id = Some(google_id);
        self
    }
}
