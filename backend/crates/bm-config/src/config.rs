use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, FeedConfig, LoggingConfig, ServerConfig, ValidationConfig,
    WebSocketConfig, env_override,
};

use std::io::ErrorKind;
use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub feed: FeedConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Read `config.toml` from [`config_dir`](Self::config_dir), creating
    /// the directory on first run, then apply `BM_*` environment overrides.
    /// A missing file means defaults. Nothing is validated here; call
    /// [`validate`](Self::validate) next.
    pub fn load() -> ConfigErrorResult<Self> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir).map_err(|source| ConfigError::Io {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(CONFIG_FILENAME);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)
                .map_err(|source| ConfigError::Toml { path, source })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Priority: BM_CONFIG_DIR env var > ./.bm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections; call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.logging.validate()?;
        self.websocket.validate()?;
        self.feed.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} feed connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        if self.auth.enabled {
            info!("  auth: enabled ({})", auth_type);
        } else {
            info!("  auth: disabled (dev user {})", self.auth.dev_user_id);
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  websocket: buffer={}, heartbeat={}s/{}s",
            self.websocket.send_buffer_size,
            self.websocket.heartbeat_interval_secs,
            self.websocket.heartbeat_timeout_secs
        );

        info!("  feed: capacity={}", self.feed.channel_capacity);

        info!(
            "  validation: title={}, url={}",
            self.validation.max_title_length, self.validation.max_url_length
        );
    }

    fn apply_env_overrides(&mut self) {
        let Self {
            server,
            database,
            auth,
            logging,
            websocket,
            feed,
            validation,
        } = self;

        env_override::apply("BM_SERVER_HOST", &mut server.host);
        env_override::apply("BM_SERVER_PORT", &mut server.port);
        env_override::apply("BM_SERVER_MAX_CONNECTIONS", &mut server.max_connections);

        env_override::apply("BM_DATABASE_PATH", &mut database.path);
        env_override::apply("BM_DATABASE_MAX_CONNECTIONS", &mut database.max_connections);

        env_override::apply("BM_AUTH_ENABLED", &mut auth.enabled);
        env_override::apply("BM_AUTH_JWT_SECRET", &mut auth.jwt_secret);
        env_override::apply("BM_AUTH_JWT_PUBLIC_KEY_PATH", &mut auth.jwt_public_key_path);
        env_override::apply("BM_AUTH_DEV_USER_ID", &mut auth.dev_user_id);
        env_override::apply("BM_AUTH_DEV_USER_EMAIL", &mut auth.dev_user_email);

        env_override::apply("BM_LOG_LEVEL", &mut logging.level);
        env_override::apply("BM_LOG_COLORED", &mut logging.colored);
        env_override::apply("BM_LOG_FILE", &mut logging.file);

        env_override::apply("BM_WS_SEND_BUFFER_SIZE", &mut websocket.send_buffer_size);
        env_override::apply(
            "BM_WS_HEARTBEAT_INTERVAL_SECS",
            &mut websocket.heartbeat_interval_secs,
        );
        env_override::apply(
            "BM_WS_HEARTBEAT_TIMEOUT_SECS",
            &mut websocket.heartbeat_timeout_secs,
        );

        env_override::apply("BM_FEED_CHANNEL_CAPACITY", &mut feed.channel_capacity);

        env_override::apply(
            "BM_VALIDATION_MAX_TITLE_LENGTH",
            &mut validation.max_title_length,
        );
        env_override::apply(
            "BM_VALIDATION_MAX_URL_LENGTH",
            &mut validation.max_url_length,
        );
    }
}
