use crate::{
    BookmarkService, ConnectionConfig, ConnectionId, ConnectionRegistry, FeedError, Metrics,
    Result as FeedErrorResult, ShutdownCoordinator, UserBroadcaster, WebSocketConnection,
    create_connection_span,
};

use bm_auth::{AuthError, JwtValidator, extract_bearer};
use bm_core::User;

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::Response,
};
use log::{debug, error, info, warn};
use serde::Deserialize;
use tracing::Instrument;

/// Shared state for the change feed and the REST handlers
#[derive(Clone)]
pub struct AppState {
    pub service: BookmarkService,
    /// `None` runs every request as `dev_user`
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub dev_user: User,
    pub registry: ConnectionRegistry,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    pub fn broadcaster(&self) -> &UserBroadcaster {
        self.service.broadcaster()
    }

    /// Resolve the caller from an `Authorization` header value
    pub fn authenticate(&self, authorization: Option<&str>) -> FeedErrorResult<User> {
        let Some(validator) = &self.jwt_validator else {
            return Ok(self.dev_user.clone());
        };

        let token = extract_bearer(authorization).map_err(|e| {
            warn!("Rejected request: {}", e);
            FeedError::unauthorized(public_auth_message(&e))
        })?;

        validator.current_user(token).map_err(|e| {
            warn!("JWT validation failed: {}", e);
            FeedError::unauthorized(public_auth_message(&e))
        })
    }
}

fn public_auth_message(e: &AuthError) -> &'static str {
    match e {
        AuthError::MissingHeader { .. } => "Missing bearer token",
        AuthError::InvalidScheme { .. } => "Expected a bearer token",
        AuthError::TokenExpired { .. } => "Session expired",
        _ => "Invalid session token",
    }
}

/// Browsers cannot set headers on a WebSocket handshake, so the token may
/// also travel as `?access_token=`.
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub access_token: Option<String>,
}

/// Change-feed upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if state.shutdown.is_shutdown() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .or_else(|| params.access_token.map(|t| format!("Bearer {}", t)));

    let user = state
        .authenticate(authorization.as_deref())
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    debug!("Change feed upgrade request from user {}", user.id);

    let connection_id = state
        .registry
        .register(user.id.clone())
        .await
        .map_err(|e| {
            error!("Failed to register connection: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    info!("Registered connection {}", connection_id);

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, connection_id, user, state)))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId, user: User, state: AppState) {
    let shutdown_guard = state.shutdown.subscribe_guard();
    let span = create_connection_span(&connection_id.to_string(), &user.id);

    let connection = WebSocketConnection::new(
        connection_id,
        user.id,
        state.config.clone(),
        state.metrics.clone(),
        state.broadcaster().clone(),
    );

    let result = connection
        .handle(socket, shutdown_guard)
        .instrument(span)
        .await;

    state.registry.unregister(connection_id).await;

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}
