use crate::{ConfigErrorResult, bounds};

use serde::Deserialize;

/// Field limits applied to bookmarks before they are persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Counted in chars, after trimming
    pub max_title_length: usize,
    pub max_url_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            max_url_length: 2048,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        bounds::within("validation.max_title_length", self.max_title_length, 1..=500)?;
        // Shortest useful limit still fits "https://a.b/xyz"
        bounds::within("validation.max_url_length", self.max_url_length, 16..=8192)
    }
}
