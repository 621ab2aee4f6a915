use crate::ApiError;
use crate::middleware::auth_gate::bearer_token;

use googletest::prelude::*;
use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

fn headers(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
    headers
}

fn message_of(result: crate::ApiResult<&str>) -> String {
    match result {
        Err(ApiError::Unauthorized { message, .. }) => message,
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[test]
fn given_bearer_header_when_parsed_then_token_returned() {
    let headers = headers("Bearer abc.def.ghi");

    assert_that!(bearer_token(&headers).unwrap(), eq("abc.def.ghi"));
}

#[test]
fn given_no_header_when_parsed_then_header_required() {
    let message = message_of(bearer_token(&HeaderMap::new()));

    assert_that!(message, eq("Authorization header required"));
}

#[test]
fn given_empty_header_when_parsed_then_header_required() {
    let message = message_of(bearer_token(&headers("")));

    assert_that!(message, eq("Authorization header required"));
}

#[test]
fn given_other_scheme_when_parsed_then_invalid_format() {
    let message = message_of(bearer_token(&headers("Token abc")));

    assert_that!(message, eq("Invalid Authorization header format"));
}

#[test]
fn given_lowercase_scheme_when_parsed_then_invalid_format() {
    let message = message_of(bearer_token(&headers("bearer abc")));

    assert_that!(message, eq("Invalid Authorization header format"));
}

#[test]
fn given_scheme_without_space_when_parsed_then_invalid_format() {
    let message = message_of(bearer_token(&headers("Bearer")));

    assert_that!(message, eq("Invalid Authorization header format"));
}
