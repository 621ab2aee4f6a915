#![allow(dead_code)]

//! Test infrastructure for tg-server router tests

use tg_auth::{Claims, TokenClass, TokenCodec, TokenIssuer, TokenSettings};
use tg_core::{LookupError, Result as LookupResult, User, UserStore};
use tg_db::UserRepository;
use tg_server::AppState;

use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{TimeDelta, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const ACCESS_SECRET: &str = "server-test-access-secret-32-bytes!";
pub const REFRESH_SECRET: &str = "server-test-refresh-secret-32-bytes";

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "wonderland";
pub const EMAIL: &str = "alice@example.com";

pub fn test_settings() -> TokenSettings {
    TokenSettings::new(
        ACCESS_SECRET,
        REFRESH_SECRET,
        Duration::from_secs(15 * 60),
        Duration::from_secs(24 * 60 * 60),
    )
    .unwrap()
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    tg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState over a database holding one user (`alice` / `wonderland`)
pub async fn create_test_app_state() -> AppState<UserRepository> {
    let repo = UserRepository::new(create_test_pool().await);
    repo.create(&User::new(USERNAME, PASSWORD, EMAIL))
        .await
        .expect("Failed to create test user");

    AppState::new(&test_settings(), repo).unwrap()
}

/// Store whose backend is always down
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    type User = User;

    async fn find_by_username(&self, _username: &str) -> LookupResult<User> {
        Err(LookupError::storage("connection refused by 10.0.0.7:5432"))
    }
}

pub fn failing_app_state() -> AppState<FailingStore> {
    AppState::new(&test_settings(), FailingStore).unwrap()
}

pub fn issuer() -> TokenIssuer {
    TokenIssuer::new(&test_settings()).unwrap()
}

/// Correctly signed token whose `exp` lies in the past
pub fn expired_token(username: &str, class: TokenClass) -> String {
    let secret = match class {
        TokenClass::Access => ACCESS_SECRET,
        TokenClass::Refresh => REFRESH_SECRET,
    };
    let claims = Claims::new(username, class, Utc::now() - TimeDelta::seconds(60));
    TokenCodec::with_hs256(secret.as_bytes())
        .unwrap()
        .encode(&claims)
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get_with_authorization(
    app: Router,
    uri: &str,
    authorization: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub fn error_message(json: &serde_json::Value) -> &str {
    json["error"]["message"].as_str().unwrap_or_default()
}
