use bm_config::ServerConfig;

/// Caps on concurrent change-feed connections
#[derive(Debug, Clone)]
pub struct ConnectionLimits {
    /// Maximum connections (open tabs, devices) per user
    pub max_per_user: usize,
    /// Maximum total connections across all users
    pub max_total: usize,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self {
            max_per_user: 100,
            max_total: 10000,
        }
    }
}

impl From<&ServerConfig> for ConnectionLimits {
    fn from(config: &ServerConfig) -> Self {
        let defaults = Self::default();
        Self {
            max_per_user: defaults.max_per_user.min(config.max_connections),
            max_total: config.max_connections,
        }
    }
}
