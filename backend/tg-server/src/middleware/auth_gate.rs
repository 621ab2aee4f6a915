//! Authentication gate for protected routes.
//!
//! Installed with `axum::middleware::from_fn_with_state`. Each request is
//! resolved on its own: header, access-token validation, then one store lookup.

use crate::{ApiError, ApiResult, AppState};

use tg_core::UserStore;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::{HeaderMap, header::AUTHORIZATION};
use log::debug;

const BEARER_PREFIX: &str = "Bearer ";

pub const MISSING_HEADER_MESSAGE: &str = "Authorization header required";
pub const INVALID_HEADER_MESSAGE: &str = "Invalid Authorization header format";

/// Identity resolved by the gate, available to handlers as `Extension<CurrentUser<U>>`.
#[derive(Debug, Clone)]
pub struct CurrentUser<U>(pub U);

pub async fn require_auth<S: UserStore>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let username = {
        let token = bearer_token(request.headers())?;
        state.validator.validate_access(token)?
    };

    let user = state.store.find_by_username(&username).await?;
    debug!("Authenticated request for {}", username);

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

/// Token following the case-sensitive `Bearer ` prefix.
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> ApiResult<&str> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::unauthorized("MISSING_AUTHORIZATION", MISSING_HEADER_MESSAGE)),
    };

    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| ApiError::unauthorized("INVALID_AUTHORIZATION", INVALID_HEADER_MESSAGE))
}
