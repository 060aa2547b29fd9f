#![allow(dead_code)]

//! Test infrastructure for bm-server API tests

use bm_auth::{Claims, JwtValidator};
use bm_core::User;
use bm_db::{BookmarkRepository, Database};
use bm_feed::{
    AppState, BookmarkService, BookmarkValidator, BroadcastConfig, ConnectionConfig,
    ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator, UserBroadcaster,
};
use bm_server::build_router;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"api-test-secret-key-that-is-at-least-32-bytes";

pub const DEV_USER_ID: &str = "local-user";

/// AppState over an in-memory database, auth disabled
pub async fn create_test_app_state() -> AppState {
    build_state(None).await
}

/// AppState that validates HS256 tokens signed with `TEST_JWT_SECRET`
pub async fn create_authenticated_app_state() -> AppState {
    build_state(Some(TEST_JWT_SECRET)).await
}

async fn build_state(jwt_secret: Option<&[u8]>) -> AppState {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let metrics = Metrics::new();

    AppState {
        service: BookmarkService::new(
            BookmarkRepository::new(pool),
            UserBroadcaster::new(BroadcastConfig::default()),
            BookmarkValidator::default(),
            metrics.clone(),
        ),
        jwt_validator: jwt_secret.map(|secret| Arc::new(JwtValidator::with_hs256(secret))),
        dev_user: User::new(DEV_USER_ID, "local@localhost"),
        registry: ConnectionRegistry::new(ConnectionLimits::default()),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
    }
}

pub fn create_test_token(user_id: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: format!("{}@example.com", user_id),
        exp: now + 3600,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to encode JWT")
}

/// Send one request through a fresh router; returns status and JSON body
/// (`Value::Null` for non-JSON bodies).
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app: Router = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
