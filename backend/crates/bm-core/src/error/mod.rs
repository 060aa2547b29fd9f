use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid change kind: {value} {location}")]
    InvalidChangeKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    #[error("Change feed subscription closed {location}")]
    SubscriptionClosed { location: ErrorLocation },
}

impl CoreError {
    /// Message suitable for showing to the user (no source location).
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Store { message, .. } => message.clone(),
            Self::InvalidChangeKind { value, .. } => format!("Invalid change kind: {value}"),
            Self::SubscriptionClosed { .. } => "Change feed subscription closed".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
