//! Router tests for the authentication gate in front of /users/current
mod common;

use crate::common::{
    EMAIL, USERNAME, create_test_app_state, error_message, expired_token, failing_app_state,
    get_with_authorization, issuer,
};

use tg_auth::{TokenClass, TokenIssuer, TokenSettings};
use tg_server::build_router;

use std::time::Duration;

use axum::http::StatusCode;
use googletest::prelude::*;

const CURRENT_USER: &str = "/users/current";

#[tokio::test]
async fn given_valid_access_token_when_requesting_current_user_then_identity_returned() {
    // Given
    let app = build_router(create_test_app_state().await);
    let token = issuer().issue_access_token(USERNAME).unwrap();

    // When
    let (status, json) =
        get_with_authorization(app, CURRENT_USER, Some(&format!("Bearer {}", token))).await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["username"], USERNAME);
    assert_eq!(json["email"], EMAIL);
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn given_no_authorization_header_when_requesting_then_401_header_required() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let (status, json) = get_with_authorization(app, CURRENT_USER, None).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_that!(error_message(&json), eq("Authorization header required"));
}

#[tokio::test]
async fn given_token_scheme_header_when_requesting_then_401_invalid_format() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let (status, json) = get_with_authorization(app, CURRENT_USER, Some("Token abc")).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_that!(
        error_message(&json),
        eq("Invalid Authorization header format")
    );
}

#[tokio::test]
async fn given_refresh_token_at_gate_when_requesting_then_401_class_mismatch() {
    // Given
    let app = build_router(create_test_app_state().await);
    let token = issuer().issue_refresh_token(USERNAME).unwrap();

    // When
    let (status, json) =
        get_with_authorization(app, CURRENT_USER, Some(&format!("Bearer {}", token))).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "WRONG_TOKEN_CLASS");
    assert_that!(
        error_message(&json),
        eq("refresh token used as access token")
    );
}

#[tokio::test]
async fn given_expired_access_token_when_requesting_then_401_token_expired() {
    // Given
    let app = build_router(create_test_app_state().await);
    let token = expired_token(USERNAME, TokenClass::Access);

    // When
    let (status, json) =
        get_with_authorization(app, CURRENT_USER, Some(&format!("Bearer {}", token))).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_that!(error_message(&json), eq("token expired"));
}

#[tokio::test]
async fn given_token_signed_with_foreign_secret_when_requesting_then_401_signature() {
    // Given
    let app = build_router(create_test_app_state().await);
    let foreign = TokenSettings::new(
        "some-other-access-secret",
        "some-other-refresh-secret",
        Duration::from_secs(60),
        Duration::from_secs(120),
    )
    .unwrap();
    let token = TokenIssuer::new(&foreign)
        .unwrap()
        .issue_access_token(USERNAME)
        .unwrap();

    // When
    let (status, json) =
        get_with_authorization(app, CURRENT_USER, Some(&format!("Bearer {}", token))).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_SIGNATURE");
}

#[tokio::test]
async fn given_garbage_bearer_token_when_requesting_then_401_malformed() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let (status, json) =
        get_with_authorization(app, CURRENT_USER, Some("Bearer not-a-token")).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MALFORMED_TOKEN");
}

#[tokio::test]
async fn given_valid_token_for_unknown_user_when_requesting_then_401_user_not_found() {
    // Given
    let app = build_router(create_test_app_state().await);
    let token = issuer().issue_access_token("mallory").unwrap();

    // When
    let (status, json) =
        get_with_authorization(app, CURRENT_USER, Some(&format!("Bearer {}", token))).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_that!(error_message(&json), eq("User not found"));
}

#[tokio::test]
async fn given_store_failure_when_requesting_then_500_database_error() {
    // Given
    let app = build_router(failing_app_state());
    let token = issuer().issue_access_token(USERNAME).unwrap();

    // When
    let (status, json) =
        get_with_authorization(app, CURRENT_USER, Some(&format!("Bearer {}", token))).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_that!(error_message(&json), eq("Database error"));
    assert_that!(json.to_string(), not(contains_substring("10.0.0.7")));
}

#[tokio::test]
async fn given_invalid_header_when_store_is_down_then_store_is_never_consulted() {
    // Given
    let app = build_router(failing_app_state());

    // When
    let (status, json) = get_with_authorization(app, CURRENT_USER, Some("Basic abc")).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_that!(
        error_message(&json),
        eq("Invalid Authorization header format")
    );
}
