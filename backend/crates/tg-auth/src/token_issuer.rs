use crate::{
    AuthError, Claims, Result as AuthErrorResult, TokenClass, TokenCodec, TokenPair,
    TokenSettings,
};

use chrono::{DateTime, TimeDelta, Utc};

/// Mints access/refresh tokens for a username.
pub struct TokenIssuer {
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
    access_ttl: TimeDelta,
    refresh_ttl: TimeDelta,
}

impl TokenIssuer {
    #[track_caller]
    pub fn new(settings: &TokenSettings) -> AuthErrorResult<Self> {
        Ok(Self {
            access_codec: TokenCodec::with_hs256(settings.secret(TokenClass::Access))?,
            refresh_codec: TokenCodec::with_hs256(settings.secret(TokenClass::Refresh))?,
            access_ttl: to_time_delta(settings, TokenClass::Access)?,
            refresh_ttl: to_time_delta(settings, TokenClass::Refresh)?,
        })
    }

    pub fn issue_access_token(&self, username: &str) -> AuthErrorResult<String> {
        self.issue_at(username, TokenClass::Access, Utc::now())
    }

    pub fn issue_refresh_token(&self, username: &str) -> AuthErrorResult<String> {
        self.issue_at(username, TokenClass::Refresh, Utc::now())
    }

    /// Mint both tokens. Either both are returned or neither is.
    pub fn issue_pair(&self, username: &str) -> AuthErrorResult<TokenPair> {
        let now = Utc::now();
        let access = self.issue_at(username, TokenClass::Access, now)?;
        let refresh = self.issue_at(username, TokenClass::Refresh, now)?;

        Ok(TokenPair { access, refresh })
    }

    /// Mint a token of `class` whose lifetime starts at `now`.
    #[track_caller]
    pub fn issue_at(
        &self,
        username: &str,
        class: TokenClass,
        now: DateTime<Utc>,
    ) -> AuthErrorResult<String> {
        let (codec, ttl) = match class {
            TokenClass::Access => (&self.access_codec, self.access_ttl),
            TokenClass::Refresh => (&self.refresh_codec, self.refresh_ttl),
        };

        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::config(format!("{} token expiry out of range", class)))?;

        codec.encode(&Claims::new(username, class, expires_at))
    }
}

#[track_caller]
fn to_time_delta(settings: &TokenSettings, class: TokenClass) -> AuthErrorResult<TimeDelta> {
    TimeDelta::from_std(settings.ttl(class))
        .map_err(|_| AuthError::config(format!("{} token lifetime out of range", class)))
}
