use crate::UserIdentity;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Persisted user record.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub username: String,
    /// Stored credential. Storage policy belongs to the store, not to this record.
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            created_at: now,
            last_login: now,
        }
    }
}

impl UserIdentity for User {
    fn username(&self) -> &str {
        &self.username
    }

    fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
