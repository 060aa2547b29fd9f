use bm_server::{build_router, error::ServerError, logger};

use bm_auth::JwtValidator;
use bm_config::Config;
use bm_core::User;
use bm_db::{BookmarkRepository, Database};
use bm_feed::{
    AppState, BookmarkService, BookmarkValidator, BroadcastConfig, ConnectionConfig,
    ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator, UserBroadcaster,
};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting bm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = Database::open(&database_path, config.database.max_connections).await?;

    let jwt_validator = build_jwt_validator(&config)?;

    let dev_user = User::new(
        config.auth.dev_user_id.clone(),
        config.auth.dev_user_email.clone(),
    );

    let metrics = Metrics::new();
    let broadcaster = UserBroadcaster::new(BroadcastConfig::from(&config.feed));
    let service = BookmarkService::new(
        BookmarkRepository::new(pool),
        broadcaster,
        BookmarkValidator::from(&config.validation),
        metrics.clone(),
    );

    let shutdown = ShutdownCoordinator::new();

    let app_state = AppState {
        service,
        jwt_validator,
        dev_user,
        registry: ConnectionRegistry::new(ConnectionLimits::from(&config.server)),
        metrics,
        shutdown: shutdown.clone(),
        config: ConnectionConfig::from(&config.websocket),
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Shutdown signal received, draining connections");
        })
        .await?;

    info!("Server stopped");

    Ok(())
}

/// HS256 when a shared secret is configured, otherwise RS256 from the PEM
/// file; `None` when auth is disabled.
fn build_jwt_validator(config: &Config) -> Result<Option<Arc<JwtValidator>>, ServerError> {
    if !config.auth.enabled {
        warn!(
            "Authentication DISABLED - every request runs as {}",
            config.auth.dev_user_id
        );
        return Ok(None);
    }

    if let Some(secret) = &config.auth.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        return Ok(Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes()))));
    }

    let config_dir = Config::config_dir()?;
    let Some(key_path) = config.auth.resolved_public_key_path(&config_dir)? else {
        return Err(bm_config::ConfigError::auth(
            "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
        )
        .into());
    };

    let public_key =
        std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
            path: key_path.display().to_string(),
            source: e,
        })?;
    info!("JWT: RS256 authentication enabled");

    Ok(Some(Arc::new(JwtValidator::with_rs256(&public_key)?)))
}
