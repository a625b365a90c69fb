pub mod field_error;
pub mod pilot_request_schema;
pub mod validation_errors;
