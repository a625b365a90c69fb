pub mod error;
pub mod models;
pub mod options;
pub mod schema;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::new_pilot_request::NewPilotRequest;
pub use models::new_user::NewUser;
pub use models::pilot_request::PilotRequest;
pub use models::user::User;
pub use options::{OptionField, SelectOption};
pub use schema::field_error::{FieldError, FieldErrorReason};
pub use schema::pilot_request_schema::{
    BODY_FIELD, FieldSpec, PILOT_REQUEST_FIELDS, PilotRequestSchema,
};
pub use schema::validation_errors::ValidationErrors;
