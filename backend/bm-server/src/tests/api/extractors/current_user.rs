use crate::CurrentUser;
use crate::tests::{TEST_SECRET, create_test_state, create_token};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;

#[tokio::test]
async fn test_extractor_without_validator_uses_dev_user() {
    let state = create_test_state(None).await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_that!(user.id, eq("dev-user"));
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = create_test_state(Some(TEST_SECRET)).await;
    let token = create_token("user-42", TEST_SECRET);
    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_that!(user.id, eq("user-42"));
    assert_that!(user.email, eq("user-42@example.com"));
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state(Some(TEST_SECRET)).await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert_that!(result.err().map(|e| e.status().as_u16()), some(eq(401)));
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let state = create_test_state(Some(TEST_SECRET)).await;
    let token = create_token("user-42", b"a-completely-different-secret-of-32-bytes");
    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert_that!(result.err().map(|e| e.status().as_u16()), some(eq(401)));
}
