use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors surfaced by `tg` commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: tg_config::ConfigError,
    },

    #[error("Token error: {source}")]
    Auth {
        #[from]
        source: tg_auth::AuthError,
    },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: tg_db::DbError,
    },

    #[error("Invalid --{field}: {message} {location}")]
    InvalidArgument {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn required(field: &'static str) -> Self {
        CliError::InvalidArgument {
            field,
            message: "This field is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
