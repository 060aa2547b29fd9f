use crate::{ConfigErrorResult, bounds};

use serde::Deserialize;

/// Change-feed broadcast settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Events buffered per user before slow subscribers start lagging
    pub channel_capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1000,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        bounds::within("feed.channel_capacity", self.channel_capacity, 1..=100_000)
    }
}
