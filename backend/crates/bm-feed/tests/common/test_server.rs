#![allow(dead_code)]

use bm_auth::JwtValidator;
use bm_core::User;
use bm_db::{BookmarkRepository, Database};
use bm_feed::{
    AppState, BookmarkService, BookmarkValidator, BroadcastConfig, ConnectionConfig,
    ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator, UserBroadcaster,
};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::time::{Duration, sleep};

/// HS256 requires at least 32 bytes
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

pub const TEST_DEV_USER_ID: &str = "local-user";

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub jwt_secret: Option<Vec<u8>>,
    pub dev_user_id: String,
    pub max_per_user: usize,
    pub max_total: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Some(TEST_JWT_SECRET.to_vec()),
            dev_user_id: TEST_DEV_USER_ID.to_string(),
            max_per_user: 10,
            max_total: 100,
        }
    }
}

impl TestServerConfig {
    /// No JWT validation; every connection is the dev user
    pub fn with_auth_disabled() -> Self {
        Self {
            jwt_secret: None,
            ..Default::default()
        }
    }

    pub fn with_strict_limits() -> Self {
        Self {
            max_per_user: 2,
            max_total: 3,
            ..Default::default()
        }
    }
}

pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

pub async fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default()).await
}

pub async fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config).await;
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

async fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to open test database");

    let metrics = Metrics::default();
    let service = BookmarkService::new(
        BookmarkRepository::new(pool),
        UserBroadcaster::new(BroadcastConfig::default()),
        BookmarkValidator::default(),
        metrics.clone(),
    );

    let app_state = AppState {
        service,
        jwt_validator: config
            .jwt_secret
            .map(|secret| Arc::new(JwtValidator::with_hs256(&secret))),
        dev_user: User::new(config.dev_user_id, "local@localhost"),
        registry: ConnectionRegistry::new(ConnectionLimits {
            max_per_user: config.max_per_user,
            max_total: config.max_total,
        }),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
    };

    let router = Router::new()
        .route("/ws", get(bm_feed::handler))
        .with_state(app_state.clone());

    (router, app_state)
}

/// The socket subscribes after the handshake completes; wait for it so a
/// write issued right after connecting is not missed.
pub async fn wait_for_subscribers(state: &AppState, user_id: &str, expected: usize) {
    for _ in 0..200 {
        if state.broadcaster().subscriber_count(user_id).await >= expected {
            return;
        }
        sleep(Duration::from_millis(5)).await;
    }
    panic!("timed out waiting for {expected} subscribers of {user_id}");
}
