use crate::{AuthError, Claims, Result as AuthErrorResult, TokenClass, TokenCodec, TokenSettings};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Checks a token against the class the caller expects.
///
/// Steps run in order and stop at the first failure: signature/shape, class,
/// expiry, username. Success yields the username only; resolving it to a user
/// is the caller's job.
pub struct TokenValidator {
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
}

impl TokenValidator {
    #[track_caller]
    pub fn new(settings: &TokenSettings) -> AuthErrorResult<Self> {
        Ok(Self {
            access_codec: TokenCodec::with_hs256(settings.secret(TokenClass::Access))?,
            refresh_codec: TokenCodec::with_hs256(settings.secret(TokenClass::Refresh))?,
        })
    }

    pub fn validate_access(&self, token: &str) -> AuthErrorResult<String> {
        self.validate(token, TokenClass::Access)
    }

    pub fn validate_refresh(&self, token: &str) -> AuthErrorResult<String> {
        self.validate(token, TokenClass::Refresh)
    }

    pub fn validate(&self, token: &str, expected: TokenClass) -> AuthErrorResult<String> {
        self.validate_at(token, expected, Utc::now())
    }

    #[track_caller]
    pub fn validate_at(
        &self,
        token: &str,
        expected: TokenClass,
        now: DateTime<Utc>,
    ) -> AuthErrorResult<String> {
        let claims = self.decode_for(token, expected)?;

        if claims.class() != expected {
            return Err(AuthError::WrongTokenClass {
                expected,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.validate()?;

        Ok(claims.username)
    }

    fn codec(&self, class: TokenClass) -> &TokenCodec {
        match class {
            TokenClass::Access => &self.access_codec,
            TokenClass::Refresh => &self.refresh_codec,
        }
    }

    /// Decode under the expected class's secret.
    ///
    /// With distinct secrets a token of the other class fails signature
    /// verification. If it verifies under the other secret and claims the
    /// other class, report the confusion instead of a bare signature failure.
    #[track_caller]
    fn decode_for(&self, token: &str, expected: TokenClass) -> AuthErrorResult<Claims> {
        match self.codec(expected).decode(token) {
            Err(AuthError::Signature { message, location }) => {
                match self.codec(expected.other()).decode(token) {
                    Ok(claims) if claims.class() == expected.other() => {
                        Err(AuthError::WrongTokenClass {
                            expected,
                            location: ErrorLocation::from(Location::caller()),
                        })
                    }
                    _ => Err(AuthError::Signature { message, location }),
                }
            }
            result => result,
        }
    }
}
