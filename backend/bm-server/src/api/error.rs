//! Every REST failure leaves as `{"error": {"code", "message", "field?"}}`
//! with the matching status.

use bm_core::CoreError;
use bm_feed::FeedError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Stable code clients branch on, see [`ApiError::code`]
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 409, a client-supplied id that is already taken
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            Self::Validation { message, field, .. } => (message, field),
            Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code,
                message,
                field,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<FeedError> for ApiError {
    #[track_caller]
    fn from(e: FeedError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            FeedError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            FeedError::Unauthorized { message, .. } => ApiError::Unauthorized { message, location },
            FeedError::NotFound { message, .. } => ApiError::NotFound { message, location },
            FeedError::Conflict { message, .. } => ApiError::Conflict { message, location },
            other => {
                // Details stay in the log
                log::error!("Store error: {}", other);
                ApiError::Internal {
                    message: "Store operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidChangeKind { value, .. } => ApiError::Validation {
                message: format!("Invalid change kind: {value}"),
                field: None,
                location,
            },
            CoreError::Unauthorized { message, .. } => ApiError::Unauthorized { message, location },
            CoreError::NotFound { message, .. } => ApiError::NotFound { message, location },
            CoreError::Conflict { message, .. } => ApiError::Conflict { message, location },
            other => ApiError::Internal {
                message: other.user_message(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
