pub mod app_state;
pub mod bookmark_service;
pub mod bookmark_validator;
pub mod broadcast_config;
pub mod connection_config;
pub mod connection_id;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod user_broadcaster;
pub mod web_socket_connection;

pub use app_state::{AppState, FeedParams, handler};
pub use bookmark_service::BookmarkService;
pub use bookmark_validator::{BookmarkValidator, MAX_CLIENT_ID_LENGTH, sanitize_string};
pub use broadcast_config::BroadcastConfig;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::{ConnectionInfo, ConnectionRegistry};
pub use error::{FeedError, Result};
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use user_broadcaster::UserBroadcaster;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Tracing span for one change-feed connection.
/// All log entries emitted while serving it carry these fields.
pub fn create_connection_span(connection_id: &str, user_id: &str) -> tracing::Span {
    info_span!(
        "feed_connection",
        connection_id = %connection_id,
        user_id = %user_id,
    )
}
