use crate::{AuthError, Result as AuthErrorResult, TokenClass};

use std::fmt;
use std::time::Duration;

pub const DEFAULT_ACCESS_EXPIRATION: &str = "15m";
pub const DEFAULT_REFRESH_EXPIRATION: &str = "24h";

/// Shortest lifetime a token may be minted with (`exp` has second resolution).
pub const MIN_TOKEN_TTL: Duration = Duration::from_secs(1);

const ACCESS_SECRET_KEY: &str = "JWT_ACCESS_SECRET";
const REFRESH_SECRET_KEY: &str = "JWT_REFRESH_SECRET";
const ACCESS_EXPIRATION_KEY: &str = "JWT_ACCESS_EXPIRATION";
const REFRESH_EXPIRATION_KEY: &str = "JWT_REFRESH_EXPIRATION";

/// Secrets and lifetimes for both token classes.
///
/// Built once at startup and shared by reference with the issuer and validator.
#[derive(Clone)]
pub struct TokenSettings {
    access_secret: Vec<u8>,
    refresh_secret: Vec<u8>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenSettings {
    #[track_caller]
    pub fn new(
        access_secret: impl Into<Vec<u8>>,
        refresh_secret: impl Into<Vec<u8>>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> AuthErrorResult<Self> {
        let access_secret = access_secret.into();
        let refresh_secret = refresh_secret.into();

        if access_secret.is_empty() {
            return Err(AuthError::config(format!("{} not set", ACCESS_SECRET_KEY)));
        }
        if refresh_secret.is_empty() {
            return Err(AuthError::config(format!("{} not set", REFRESH_SECRET_KEY)));
        }
        Self::check_ttl(ACCESS_EXPIRATION_KEY, access_ttl)?;
        Self::check_ttl(REFRESH_EXPIRATION_KEY, refresh_ttl)?;

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl,
            refresh_ttl,
        })
    }

    /// Build from environment-style values.
    ///
    /// Empty strings count as unset. Expirations default to
    /// [`DEFAULT_ACCESS_EXPIRATION`] / [`DEFAULT_REFRESH_EXPIRATION`] and are
    /// parsed as humantime durations (`1s`, `15m`, `24h`, `1h 30m`).
    #[track_caller]
    pub fn from_raw(
        access_secret: Option<&str>,
        refresh_secret: Option<&str>,
        access_expiration: Option<&str>,
        refresh_expiration: Option<&str>,
    ) -> AuthErrorResult<Self> {
        let access_secret = non_empty(access_secret)
            .ok_or_else(|| AuthError::config(format!("{} not set", ACCESS_SECRET_KEY)))?;
        let refresh_secret = non_empty(refresh_secret)
            .ok_or_else(|| AuthError::config(format!("{} not set", REFRESH_SECRET_KEY)))?;

        let access_ttl = Self::parse_ttl(
            ACCESS_EXPIRATION_KEY,
            non_empty(access_expiration).unwrap_or(DEFAULT_ACCESS_EXPIRATION),
        )?;
        let refresh_ttl = Self::parse_ttl(
            REFRESH_EXPIRATION_KEY,
            non_empty(refresh_expiration).unwrap_or(DEFAULT_REFRESH_EXPIRATION),
        )?;

        Self::new(access_secret, refresh_secret, access_ttl, refresh_ttl)
    }

    #[track_caller]
    fn parse_ttl(key: &str, value: &str) -> AuthErrorResult<Duration> {
        humantime::parse_duration(value.trim())
            .map_err(|_| AuthError::config(format!("invalid {} format", key)))
    }

    #[track_caller]
    fn check_ttl(key: &str, ttl: Duration) -> AuthErrorResult<()> {
        if ttl < MIN_TOKEN_TTL {
            return Err(AuthError::config(format!("{} must be at least 1s", key)));
        }
        if chrono::TimeDelta::from_std(ttl).is_err() {
            return Err(AuthError::config(format!("{} is out of range", key)));
        }
        Ok(())
    }

    pub fn secret(&self, class: TokenClass) -> &[u8] {
        match class {
            TokenClass::Access => &self.access_secret,
            TokenClass::Refresh => &self.refresh_secret,
        }
    }

    pub fn ttl(&self, class: TokenClass) -> Duration {
        match class {
            TokenClass::Access => self.access_ttl,
            TokenClass::Refresh => self.refresh_ttl,
        }
    }

    /// Both classes share a secret, so signatures alone cannot tell them apart.
    pub fn secrets_coincide(&self) -> bool {
        self.access_secret == self.refresh_secret
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
