use crate::CurrentUser;

use tg_core::UserIdentity;

use axum::{Extension, Json};
use serde::Serialize;

/// GET /users/current
///
/// Serialized identity attached by the auth gate.
pub async fn current_user<U: UserIdentity + Serialize>(
    Extension(CurrentUser(user)): Extension<CurrentUser<U>>,
) -> Json<U> {
    Json(user)
}
