mod api;

use bm_auth::JwtValidator;
use bm_core::User;
use bm_db::{BookmarkRepository, Database};
use bm_feed::{
    AppState, BookmarkService, BookmarkValidator, BroadcastConfig, ConnectionConfig,
    ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator, UserBroadcaster,
};

use std::sync::Arc;

pub const TEST_SECRET: &[u8] = b"unit-test-secret-that-is-at-least-32-bytes";

pub async fn create_test_state(jwt_secret: Option<&[u8]>) -> AppState {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to open test database");
    let metrics = Metrics::new();

    AppState {
        service: BookmarkService::new(
            BookmarkRepository::new(pool),
            UserBroadcaster::new(BroadcastConfig::default()),
            BookmarkValidator::default(),
            metrics.clone(),
        ),
        jwt_validator: jwt_secret.map(|s| Arc::new(JwtValidator::with_hs256(s))),
        dev_user: User::new("dev-user", "dev@localhost"),
        registry: ConnectionRegistry::new(ConnectionLimits::default()),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
    }
}

pub fn create_token(sub: &str, secret: &[u8]) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = bm_auth::Claims {
        sub: sub.to_string(),
        email: format!("{sub}@example.com"),
        exp: now + 3600,
        iat: now,
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret),
    )
    .expect("Failed to encode JWT")
}
