use std::fmt;

use serde::Serialize;

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorReason {
    /// Required field absent (or `null`)
    Missing,
    /// Required text field present but zero-length
    Empty,
    /// Field present with a JSON type other than the expected one
    WrongType { expected: &'static str },
}

/// A validation failure for one named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: FieldErrorReason,
}

impl FieldError {
    pub fn new(field: &'static str, reason: FieldErrorReason) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            FieldErrorReason::Missing => write!(f, "{} is required", self.field),
            FieldErrorReason::Empty => write!(f, "{} must not be empty", self.field),
            FieldErrorReason::WrongType { expected } => {
                write!(f, "{} must be a {}", self.field, expected)
            }
        }
    }
}
