//! REST API error types
//!
//! Every failure renders as `{"error": "<message>"}`. Validation detail is
//! logged but never returned to the caller.

use pilot_core::CoreError;

use std::fmt::Display;
use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request data";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch pilot requests";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        /// Failing field names, empty when the body could not be parsed at all
        fields: Vec<String>,
        location: ErrorLocation,
    },

    /// A well-formed submission that could not be stored (400). Answered like
    /// a validation failure but logged as an error.
    #[error("Submission rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Unexpected failure (500). Only `public_message` reaches the client.
    #[error("Internal error: {message} {location}")]
    Internal {
        public_message: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn internal(public_message: &'static str, detail: impl Display) -> Self {
        ApiError::Internal {
            public_message,
            message: detail.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(detail: impl Display) -> Self {
        ApiError::Rejected {
            message: detail.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::Rejected { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            ApiError::Validation { .. } => {
                log::warn!("{}", self);
                INVALID_REQUEST_MESSAGE.to_string()
            }
            ApiError::Rejected { .. } => {
                log::error!("{}", self);
                INVALID_REQUEST_MESSAGE.to_string()
            }
            ApiError::NotFound { ref message, .. } => {
                log::debug!("{}", self);
                message.clone()
            }
            ApiError::Internal { public_message, .. } => {
                log::error!("{}", self);
                public_message.to_string()
            }
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert schema failures to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let (message, fields) = match e {
            CoreError::Validation { ref errors, .. } => (
                errors.to_string(),
                errors.field_names().into_iter().map(String::from).collect(),
            ),
            other => (other.to_string(), Vec::new()),
        };

        ApiError::Validation {
            message,
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert unparseable or oversized bodies to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            fields: Vec::new(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
