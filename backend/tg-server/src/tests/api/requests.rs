use crate::{ApiError, LoginRequest, RefreshRequest};

use googletest::prelude::*;

fn field_of(result: crate::ApiResult<()>) -> Option<String> {
    match result {
        Err(ApiError::Validation { field, .. }) => field,
        _ => None,
    }
}

#[test]
fn given_complete_login_body_when_validated_then_ok() {
    let request: LoginRequest =
        serde_json::from_str(r#"{"username":"alice","password":"wonderland"}"#).unwrap();

    assert_that!(request.validate(), ok(anything()));
}

#[test]
fn given_login_body_without_username_when_validated_then_username_required() {
    let request: LoginRequest = serde_json::from_str(r#"{"password":"wonderland"}"#).unwrap();

    assert_that!(field_of(request.validate()), some(eq("username")));
}

#[test]
fn given_login_body_with_empty_password_when_validated_then_password_required() {
    let request: LoginRequest =
        serde_json::from_str(r#"{"username":"alice","password":""}"#).unwrap();

    assert_that!(field_of(request.validate()), some(eq("password")));
}

#[test]
fn given_empty_refresh_body_when_validated_then_refresh_required() {
    let request: RefreshRequest = serde_json::from_str("{}").unwrap();

    assert_that!(field_of(request.validate()), some(eq("refresh")));
}
