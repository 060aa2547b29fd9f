use bm_config::FeedConfig;

/// Configuration for per-user change-feed channels
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// Events buffered per user (bounded to prevent memory exhaustion)
    pub channel_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1000,
        }
    }
}

impl From<&FeedConfig> for BroadcastConfig {
    fn from(config: &FeedConfig) -> Self {
        Self {
            channel_capacity: config.channel_capacity,
        }
    }
}
