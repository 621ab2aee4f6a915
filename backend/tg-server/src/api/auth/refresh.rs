use crate::{ApiResult, AppState, RefreshRequest};

use tg_auth::TokenPair;
use tg_core::{UserIdentity, UserStore};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /refresh
///
/// Rotate a refresh token into a new pair. The presented token stays valid
/// until it expires.
pub async fn refresh<S: UserStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPair>> {
    let Json(request) = payload?;
    request.validate()?;

    let username = state.validator.validate_refresh(&request.refresh)?;
    let user = state.store.find_by_username(&username).await?;

    let pair = state.issuer.issue_pair(user.username())?;
    info!("Refreshed token pair for {}", user.username());

    Ok(Json(pair))
}
