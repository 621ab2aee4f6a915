use crate::ApiError;

use tg_auth::{AuthError, TokenClass};
use tg_core::LookupError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::required_field("username")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "This field is required");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let error = ApiError::BadRequest {
        message: "Failed to parse the request body as JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_expired_token_maps_to_401_with_reason() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
    assert_eq!(json["error"]["message"], "token expired");
}

#[tokio::test]
async fn test_wrong_class_maps_to_401_with_class_reason() {
    let error = ApiError::from(AuthError::WrongTokenClass {
        expected: TokenClass::Access,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["message"], "refresh token used as access token");
}

#[tokio::test]
async fn test_auth_config_error_maps_to_500() {
    let error = ApiError::from(AuthError::config("JWT_ACCESS_SECRET not set"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_lookup_not_found_maps_to_401_user_not_found() {
    let (status, json) = body_json(LookupError::not_found("alice").into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_storage_error_is_masked_as_database_error() {
    let error = ApiError::from(LookupError::storage("disk I/O error at /var/db/users.db"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database error");
    let body = json.to_string();
    assert_that!(body, not(contains_substring("/var/db")));
}
