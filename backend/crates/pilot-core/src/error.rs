use crate::ValidationErrors;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("Unknown option field: {value} {location}")]
    UnknownOptionField {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field errors carried by a validation failure, empty for other variants
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            CoreError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
