use pilot_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur before or during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// The payload failed the schema; nothing was sent
    #[error("Invalid pilot request: {message} {location}")]
    Validation {
        message: String,
        fields: Vec<&'static str>,
        location: ErrorLocation,
    },

    /// An enumerated-style field holds a value the catalog does not offer
    #[error("Unknown {field} '{value}' (expected one of: {allowed}) {location}")]
    UnknownOption {
        field: &'static str,
        value: String,
        allowed: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: String) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let fields = err
            .field_errors()
            .map(|errors| errors.field_names())
            .unwrap_or_default();

        ClientError::Validation {
            message: match err.field_errors() {
                Some(errors) => errors.to_string(),
                None => err.to_string(),
            },
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
