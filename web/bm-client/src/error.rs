use bm_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("No signed-in user {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Bookmark list is not mounted {location}")]
    NotMounted { location: ErrorLocation },

    #[error("Authentication failed: {source} {location}")]
    Auth {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Store request failed: {source} {location}")]
    Store {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn required(field: &'static str) -> Self {
        Self::Validation {
            message: format!("{field} is required"),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth(source: CoreError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store(source: CoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What the user gets to see in an alert
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::NotSignedIn { .. } => "Please sign in".to_string(),
            Self::NotMounted { .. } => "Bookmarks are not loaded yet".to_string(),
            Self::Auth { source, .. } | Self::Store { source, .. } => source.user_message(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
