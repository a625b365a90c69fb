//! Validation schema for inbound pilot requests.
//!
//! The same schema runs on both sides of the HTTP boundary: the CLI checks a
//! payload before sending it and the server re-checks it before storing.
//! Enumerated-style fields (industry, use case, deployment type, network size)
//! are accepted as any non-empty string here; the option catalog in
//! [`crate::options`] is what clients offer, not what the server enforces.

use crate::{
    CoreError, FieldError, FieldErrorReason, NewPilotRequest, Result as CoreErrorResult,
    ValidationErrors,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Pseudo-field reported when the payload itself is not a JSON object
pub const BODY_FIELD: &str = "body";

/// Shape of one schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire (camelCase) name
    pub name: &'static str,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

const NAME: FieldSpec = FieldSpec::required("name");
const EMAIL: FieldSpec = FieldSpec::required("email");
const INDUSTRY: FieldSpec = FieldSpec::required("industry");
const USE_CASE: FieldSpec = FieldSpec::required("useCase");
const DEPLOYMENT_TYPE: FieldSpec = FieldSpec::required("deploymentType");
const NETWORK_SIZE: FieldSpec = FieldSpec::required("networkSize");
const REQUIREMENTS: FieldSpec = FieldSpec::optional("requirements");

/// All pilot request fields in schema order
pub const PILOT_REQUEST_FIELDS: [FieldSpec; 7] = [
    NAME,
    EMAIL,
    INDUSTRY,
    USE_CASE,
    DEPLOYMENT_TYPE,
    NETWORK_SIZE,
    REQUIREMENTS,
];

pub struct PilotRequestSchema;

impl PilotRequestSchema {
    /// Parse an untyped payload into a [`NewPilotRequest`].
    ///
    /// Unknown keys are ignored. On failure the error lists every failing
    /// field, not just the first.
    #[track_caller]
    pub fn parse(payload: &Value) -> CoreErrorResult<NewPilotRequest> {
        let location = ErrorLocation::from(Location::caller());
        let mut errors = ValidationErrors::new();

        let Some(object) = payload.as_object() else {
            errors.push(FieldError::new(
                BODY_FIELD,
                FieldErrorReason::WrongType { expected: "object" },
            ));
            return Err(CoreError::Validation { errors, location });
        };

        let name = extract(object, &NAME, &mut errors);
        let email = extract(object, &EMAIL, &mut errors);
        let industry = extract(object, &INDUSTRY, &mut errors);
        let use_case = extract(object, &USE_CASE, &mut errors);
        let deployment_type = extract(object, &DEPLOYMENT_TYPE, &mut errors);
        let network_size = extract(object, &NETWORK_SIZE, &mut errors);
        let requirements = extract(object, &REQUIREMENTS, &mut errors);

        let (
            Some(name),
            Some(email),
            Some(industry),
            Some(use_case),
            Some(deployment_type),
            Some(network_size),
        ) = (
            name,
            email,
            industry,
            use_case,
            deployment_type,
            network_size,
        )
        else {
            return Err(CoreError::Validation { errors, location });
        };

        if !errors.is_empty() {
            return Err(CoreError::Validation { errors, location });
        }

        Ok(NewPilotRequest {
            name,
            email,
            industry,
            use_case,
            deployment_type,
            network_size,
            requirements,
        })
    }

    /// Names of the fields a payload must carry
    #[cfg(test)]
    pub(crate) fn required_fields() -> impl Iterator<Item = &'static str> {
        PILOT_REQUEST_FIELDS
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }
}

/// Pull one text field out of `object`, recording a failure in `errors`.
///
/// Required fields must be non-empty strings. Optional fields may be absent
/// or `null`; an empty string is kept as-is.
fn extract(
    object: &Map<String, Value>,
    spec: &FieldSpec,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(spec.name) {
        None | Some(Value::Null) => {
            if spec.required {
                errors.push(FieldError::new(spec.name, FieldErrorReason::Missing));
            }
            None
        }
        Some(Value::String(s)) if spec.required && s.is_empty() => {
            errors.push(FieldError::new(spec.name, FieldErrorReason::Empty));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                spec.name,
                FieldErrorReason::WrongType { expected: "string" },
            ));
            None
        }
    }
}
