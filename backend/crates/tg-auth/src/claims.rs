use crate::{AuthError, Result as AuthErrorResult, TokenClass};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Token payload.
///
/// `username`, `exp` and `refresh` have no serde defaults: a token missing any
/// of them fails to deserialize and is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// `true` for refresh tokens, `false` for access tokens
    pub refresh: bool,
    /// Unique token id so that tokens minted within the same second differ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    pub fn new(username: impl Into<String>, class: TokenClass, expires_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            exp: expires_at.timestamp(),
            refresh: class.is_refresh(),
            jti: Some(uuid::Uuid::new_v4().to_string()),
        }
    }

    pub fn class(&self) -> TokenClass {
        TokenClass::from_refresh_flag(self.refresh)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Expiry is strict: a token is dead at its `exp` second.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.username.is_empty() {
            return Err(AuthError::Malformed {
                message: "username claim cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
