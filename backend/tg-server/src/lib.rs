pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        login::login, login_request::LoginRequest, refresh::refresh,
        refresh_request::RefreshRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    users::current_user::current_user,
};
pub use app_state::AppState;
pub use middleware::auth_gate::{CurrentUser, require_auth};

pub use crate::routes::build_router;
