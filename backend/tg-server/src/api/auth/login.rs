use crate::{ApiError, ApiResult, AppState, LoginRequest};

use tg_auth::TokenPair;
use tg_core::{UserIdentity, UserStore};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /login
///
/// Exchange username and password for a fresh access/refresh pair.
/// An unknown username and a wrong password are indistinguishable to the client.
pub async fn login<S: UserStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPair>> {
    let Json(request) = payload?;
    request.validate()?;

    let user = match state.store.find_by_username(&request.username).await {
        Ok(user) => user,
        Err(e) if e.is_not_found() => return Err(ApiError::invalid_credentials()),
        Err(e) => return Err(e.into()),
    };

    if !user.check_password(&request.password) {
        return Err(ApiError::invalid_credentials());
    }

    let pair = state.issuer.issue_pair(user.username())?;
    info!("Issued token pair for {}", user.username());

    Ok(Json(pair))
}
