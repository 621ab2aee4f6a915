use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// Body of `POST /refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh: String,
}

impl RefreshRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.refresh.is_empty() {
            return Err(ApiError::required_field("refresh"));
        }
        Ok(())
    }
}
