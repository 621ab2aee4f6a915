use crate::{CliError, CliResult};

use tg_auth::{TokenClass, TokenIssuer, TokenPair, TokenSettings, TokenValidator};
use tg_config::Config;
use tg_core::User;
use tg_db::UserRepository;

use serde::Serialize;

/// Token settings from loaded configuration. Secrets and lifetimes are
/// checked here as well, so an unvalidated `Config` still fails cleanly.
pub fn token_settings(config: &Config) -> CliResult<TokenSettings> {
    Ok(TokenSettings::from_raw(
        config.auth.access_secret.as_deref(),
        config.auth.refresh_secret.as_deref(),
        Some(config.auth.access_expiration.as_str()),
        Some(config.auth.refresh_expiration.as_str()),
    )?)
}

pub fn issue_tokens(settings: &TokenSettings, username: &str) -> CliResult<TokenPair> {
    if username.is_empty() {
        return Err(CliError::required("username"));
    }
    Ok(TokenIssuer::new(settings)?.issue_pair(username)?)
}

/// Outcome of `tg inspect`
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub valid: bool,
    pub class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub fn inspect_token(
    settings: &TokenSettings,
    token: &str,
    class: TokenClass,
) -> CliResult<InspectReport> {
    let validator = TokenValidator::new(settings)?;

    let report = match validator.validate(token, class) {
        Ok(username) => InspectReport {
            valid: true,
            class: class.as_str(),
            username: Some(username),
            code: None,
            reason: None,
        },
        Err(e) if e.is_token_rejection() => InspectReport {
            valid: false,
            class: class.as_str(),
            username: None,
            code: Some(e.error_code()),
            reason: Some(e.reason()),
        },
        Err(e) => return Err(e.into()),
    };

    Ok(report)
}

pub async fn add_user(
    repo: &UserRepository,
    username: &str,
    password: &str,
    email: &str,
) -> CliResult<User> {
    for (field, value) in [("username", username), ("password", password), ("email", email)] {
        if value.trim().is_empty() {
            return Err(CliError::required(field));
        }
    }

    let user = User::new(username, password, email);
    repo.create(&user).await?;
    Ok(user)
}
