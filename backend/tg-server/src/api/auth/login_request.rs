use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// Body of `POST /login`.
///
/// Missing fields deserialize as empty so that `validate` can name them.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.username.is_empty() {
            return Err(ApiError::required_field("username"));
        }
        if self.password.is_empty() {
            return Err(ApiError::required_field("password"));
        }
        Ok(())
    }
}
