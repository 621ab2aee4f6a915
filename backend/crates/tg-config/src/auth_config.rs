use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_EXPIRATION, DEFAULT_REFRESH_EXPIRATION,
};

use std::fmt;
use std::time::Duration;

use log::warn;
use serde::Deserialize;

/// Token secrets and lifetimes.
///
/// Secrets have no default: a missing secret is fatal at startup.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// `JWT_ACCESS_SECRET`
    pub access_secret: Option<String>,
    /// `JWT_REFRESH_SECRET`
    pub refresh_secret: Option<String>,
    /// `JWT_ACCESS_EXPIRATION`, humantime duration
    pub access_expiration: String,
    /// `JWT_REFRESH_EXPIRATION`, humantime duration
    pub refresh_expiration: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: None,
            refresh_secret: None,
            access_expiration: String::from(DEFAULT_ACCESS_EXPIRATION),
            refresh_expiration: String::from(DEFAULT_REFRESH_EXPIRATION),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::require_secret("JWT_ACCESS_SECRET", &self.access_secret)?;
        Self::require_secret("JWT_REFRESH_SECRET", &self.refresh_secret)?;

        self.access_ttl()?;
        self.refresh_ttl()?;

        if self.access_secret == self.refresh_secret {
            warn!(
                "JWT_ACCESS_SECRET and JWT_REFRESH_SECRET are identical; token classes are told apart by claims only"
            );
        }

        Ok(())
    }

    pub fn access_ttl(&self) -> ConfigErrorResult<Duration> {
        Self::parse_ttl("JWT_ACCESS_EXPIRATION", &self.access_expiration)
    }

    pub fn refresh_ttl(&self) -> ConfigErrorResult<Duration> {
        Self::parse_ttl("JWT_REFRESH_EXPIRATION", &self.refresh_expiration)
    }

    fn require_secret(key: &str, secret: &Option<String>) -> ConfigErrorResult<()> {
        match secret {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(ConfigError::auth(format!("{} not set", key))),
        }
    }

    fn parse_ttl(key: &str, value: &str) -> ConfigErrorResult<Duration> {
        let ttl = humantime::parse_duration(value.trim()).map_err(|e| {
            ConfigError::auth(format!("invalid {} format '{}': {}", key, value, e))
        })?;

        if ttl < Duration::from_secs(1) {
            return Err(ConfigError::auth(format!(
                "{} must be at least 1s, got '{}'",
                key, value
            )));
        }

        Ok(ttl)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |s: &Option<String>| s.as_ref().map(|_| "<redacted>");
        f.debug_struct("AuthConfig")
            .field("access_secret", &redact(&self.access_secret))
            .field("refresh_secret", &redact(&self.refresh_secret))
            .field("access_expiration", &self.access_expiration)
            .field("refresh_expiration", &self.refresh_expiration)
            .finish()
    }
}
