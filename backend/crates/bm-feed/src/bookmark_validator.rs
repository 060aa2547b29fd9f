use crate::{FeedError, Result as FeedErrorResult};

use bm_config::ValidationConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use http::Uri;

pub const MAX_CLIENT_ID_LENGTH: usize = 64;

/// Trim and drop control characters
pub fn sanitize_string(s: &str) -> String {
    s.trim().chars().filter(|c| !c.is_control()).collect()
}

/// Field checks applied before a bookmark reaches the database
#[derive(Debug, Clone)]
pub struct BookmarkValidator {
    max_title_length: usize,
    max_url_length: usize,
}

impl Default for BookmarkValidator {
    fn default() -> Self {
        Self::from(&ValidationConfig::default())
    }
}

impl From<&ValidationConfig> for BookmarkValidator {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            max_title_length: config.max_title_length,
            max_url_length: config.max_url_length,
        }
    }
}

impl BookmarkValidator {
    /// Validate a string field by character count
    #[track_caller]
    pub fn validate_string(
        value: &str,
        field_name: &str,
        min_length: usize,
        max_length: usize,
    ) -> FeedErrorResult<()> {
        let length = value.chars().count();

        if length < min_length {
            return Err(FeedError::Validation {
                message: if min_length == 1 {
                    format!("{} cannot be empty", field_name)
                } else {
                    format!("{} must be at least {} characters", field_name, min_length)
                },
                field: Some(field_name.to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if length > max_length {
            return Err(FeedError::Validation {
                message: format!("{} must not exceed {} characters", field_name, max_length),
                field: Some(field_name.to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Sanitized title, or why it was rejected
    #[track_caller]
    pub fn title(&self, raw: &str) -> FeedErrorResult<String> {
        let title = sanitize_string(raw);
        Self::validate_string(&title, "title", 1, self.max_title_length)?;
        Ok(title)
    }

    /// Sanitized URL; must be absolute http(s) with a host
    #[track_caller]
    pub fn url(&self, raw: &str) -> FeedErrorResult<String> {
        let url = sanitize_string(raw);
        Self::validate_string(&url, "url", 1, self.max_url_length)?;

        let uri: Uri = url.parse().map_err(|e| FeedError::Validation {
            message: format!("url is not a valid URL: {}", e),
            field: Some("url".to_string()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            _ => {
                return Err(FeedError::Validation {
                    message: "url must use http or https".to_string(),
                    field: Some("url".to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        if uri.host().is_none_or(str::is_empty) {
            return Err(FeedError::Validation {
                message: "url must include a host".to_string(),
                field: Some("url".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(url)
    }

    /// Ids supplied by clients end up as primary keys; keep them boring
    #[track_caller]
    pub fn client_id(&self, raw: &str) -> FeedErrorResult<String> {
        let id = raw.trim();
        Self::validate_string(id, "id", 1, MAX_CLIENT_ID_LENGTH)?;

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(FeedError::Validation {
                message: "id may only contain letters, digits, '-' and '_'".to_string(),
                field: Some("id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(id.to_string())
    }
}
