use crate::{AppState, current_user, health, login, refresh, require_auth};

use tg_core::UserStore;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: UserStore,
    S::User: Serialize,
{
    // Everything in here sits behind the auth gate
    let protected = Router::new()
        .route("/users/current", get(current_user::<S::User>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<S>,
        ));

    Router::new()
        // Token endpoints
        .route("/login", post(login::<S>))
        .route("/refresh", post(refresh::<S>))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .merge(protected)
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
