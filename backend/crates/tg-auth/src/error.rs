use crate::TokenClass;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Auth configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed token: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature rejected: {message} {location}")]
    Signature {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Wrong token class: expected {expected} token {location}")]
    WrongTokenClass {
        expected: TokenClass,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn signature<S: Into<String>>(message: S) -> Self {
        Self::Signature {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing reason. Unlike `Display`, carries no source location.
    pub fn reason(&self) -> String {
        match self {
            Self::Config { message, .. }
            | Self::Malformed { message, .. }
            | Self::Signature { message, .. } => message.clone(),
            Self::TokenExpired { .. } => "token expired".to_string(),
            Self::WrongTokenClass { expected, .. } => format!(
                "{} token used as {} token",
                expected.other(),
                expected
            ),
            Self::JwtEncode { .. } => "token encoding failed".to_string(),
        }
    }

    /// Machine-readable code for API error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "AUTH_CONFIG_ERROR",
            Self::Malformed { .. } => "MALFORMED_TOKEN",
            Self::Signature { .. } => "INVALID_SIGNATURE",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::WrongTokenClass { .. } => "WRONG_TOKEN_CLASS",
            Self::JwtEncode { .. } => "TOKEN_ENCODE_FAILED",
        }
    }

    /// True for failures caused by the presented token rather than by the server.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            Self::Malformed { .. }
                | Self::Signature { .. }
                | Self::TokenExpired { .. }
                | Self::WrongTokenClass { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
