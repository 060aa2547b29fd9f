use crate::{create_bookmark, delete_bookmark, get_session, health, list_bookmarks, update_bookmark};

use bm_feed::AppState;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// REST under `/api/v1`, the change feed on `/ws`, probes at the root
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // REST API
        .route("/api/v1/session", get(get_session))
        .route(
            "/api/v1/bookmarks",
            get(list_bookmarks).post(create_bookmark),
        )
        .route(
            "/api/v1/bookmarks/{id}",
            put(update_bookmark).delete(delete_bookmark),
        )
        // Change feed
        .route("/ws", get(bm_feed::handler))
        // Probes
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
