
use crate::{Claims, TokenClass, TokenSettings};

use std::time::Duration;

use chrono::Utc;

pub(crate) const ACCESS_SECRET: &str = "test-access-secret-at-least-32-bytes";
pub(crate) const REFRESH_SECRET: &str = "test-refresh-secret-at-least-32-byte";

pub(crate) fn test_settings() -> TokenSettings {
    TokenSettings::new(
        ACCESS_SECRET,
        REFRESH_SECRET,
        Duration::from_secs(15 * 60),
        Duration::from_secs(24 * 60 * 60),
    )
    .unwrap()
}

pub(crate) fn claims_expiring_in(username: &str, class: TokenClass, secs: i64) -> Claims {
    Claims::new(username, class, Utc::now() + chrono::TimeDelta::seconds(secs))
}
