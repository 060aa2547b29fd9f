use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_EMAIL,
    DEFAULT_DEV_USER_ID, MIN_JWT_SECRET_LENGTH, bounds,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Token validation settings.
///
/// With `enabled = false` every request runs as the dev user, which is
/// how the server is used locally without an identity provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key PEM, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub dev_user_id: String,
    pub dev_user_email: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_user_id: String::from(DEFAULT_DEV_USER_ID),
            dev_user_email: String::from(DEFAULT_DEV_USER_EMAIL),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            if self.dev_user_id.trim().is_empty() {
                return Err(ConfigError::auth(
                    "auth.dev_user_id cannot be empty when auth is disabled",
                ));
            }
            return Ok(());
        }

        if let Some(secret) = &self.jwt_secret {
            if secret.len() < MIN_JWT_SECRET_LENGTH {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            return Ok(());
        }

        if let Some(path) = &self.jwt_public_key_path {
            self.public_key_path(config_dir, path)?;
            return Ok(());
        }

        Err(ConfigError::auth(
            "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
        ))
    }

    /// Resolve the configured public key, if any, inside `config_dir`.
    pub fn resolved_public_key_path(
        &self,
        config_dir: &Path,
    ) -> ConfigErrorResult<Option<PathBuf>> {
        self.jwt_public_key_path
            .as_deref()
            .map(|path| self.public_key_path(config_dir, path))
            .transpose()
    }

    fn public_key_path(&self, config_dir: &Path, path: &str) -> ConfigErrorResult<PathBuf> {
        bounds::contained("auth.jwt_public_key_path", path)?;

        let full = config_dir.join(path);
        if !full.exists() {
            return Err(ConfigError::auth(format!(
                "auth.jwt_public_key_path does not exist: {}",
                full.display()
            )));
        }

        Ok(full)
    }
}
