use crate::{ConfigError, ConfigErrorResult, bounds};

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

const SEND_BUFFER_RANGE: RangeInclusive<usize> = 1..=10_000;
const HEARTBEAT_INTERVAL_RANGE: RangeInclusive<u64> = 5..=300;
const HEARTBEAT_TIMEOUT_RANGE: RangeInclusive<u64> = 10..=600;

/// Change-feed socket settings. Times are in whole seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Outgoing frames buffered per connection
    pub send_buffer_size: usize,
    pub heartbeat_interval_secs: u64,
    /// Close the connection after this long without a pong
    pub heartbeat_timeout_secs: u64,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: 100,
            heartbeat_interval_secs: 30,
            heartbeat_timeout_secs: 60,
        }
    }
}

impl WebSocketConfig {
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }

    pub fn heartbeat_timeout(&self) -> Duration {
        Duration::from_secs(self.heartbeat_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        bounds::within(
            "websocket.send_buffer_size",
            self.send_buffer_size,
            SEND_BUFFER_RANGE,
        )?;
        bounds::within(
            "websocket.heartbeat_interval_secs",
            self.heartbeat_interval_secs,
            HEARTBEAT_INTERVAL_RANGE,
        )?;
        bounds::within(
            "websocket.heartbeat_timeout_secs",
            self.heartbeat_timeout_secs,
            HEARTBEAT_TIMEOUT_RANGE,
        )?;

        // A pong can only arrive after a ping went out
        if self.heartbeat_timeout() <= self.heartbeat_interval() {
            return Err(ConfigError::config(format!(
                "websocket.heartbeat_timeout_secs ({}) must be greater than heartbeat_interval_secs ({})",
                self.heartbeat_timeout_secs, self.heartbeat_interval_secs
            )));
        }

        Ok(())
    }
}
