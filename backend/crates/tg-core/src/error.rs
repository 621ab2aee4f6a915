use error_location::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

/// Outcome of a failed user lookup.
///
/// The split matters to callers: a miss is an authentication failure,
/// anything else is a backend failure whose detail must stay server-side.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("User not found: {username} {location}")]
    NotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("User store error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl LookupError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(username: S) -> Self {
        Self::NotFound {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = StdResult<T, LookupError>;
