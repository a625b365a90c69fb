use crate::tests::sarah_chen_payload;
use crate::{BODY_FIELD, CoreError, FieldErrorReason, PilotRequestSchema, ValidationErrors};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serde_json::{Value, json};

fn validation_errors(payload: &Value) -> ValidationErrors {
    match PilotRequestSchema::parse(payload) {
        Err(CoreError::Validation { errors, .. }) => errors,
        other => panic!("expected validation error, got {:?}", other),
    }
}

// =========================================================================
// Accepted payloads
// =========================================================================

#[test]
fn given_complete_payload_when_parsed_then_all_fields_kept() {
    // Given
    let payload = sarah_chen_payload();

    // When
    let request = PilotRequestSchema::parse(&payload).unwrap();

    // Then
    assert_eq!(request.name(), "Sarah Chen");
    assert_eq!(request.email(), "sarah@vitalpath.com");
    assert_eq!(request.industry(), "healthcare");
    assert_eq!(request.use_case(), "latency-optimization");
    assert_eq!(request.deployment_type(), "hardware");
    assert_eq!(request.network_size(), "medium");
    assert_eq!(request.requirements(), Some("reduce jitter"));
}

#[test]
fn given_no_requirements_when_parsed_then_none() {
    // Given
    let mut payload = sarah_chen_payload();
    payload.as_object_mut().unwrap().remove("requirements");

    // When
    let request = PilotRequestSchema::parse(&payload).unwrap();

    // Then
    assert_eq!(request.requirements(), None);
}

#[test]
fn given_null_requirements_when_parsed_then_none() {
    let mut payload = sarah_chen_payload();
    payload["requirements"] = Value::Null;

    let request = PilotRequestSchema::parse(&payload).unwrap();

    assert_eq!(request.requirements(), None);
}

#[test]
fn given_empty_requirements_when_parsed_then_kept() {
    let mut payload = sarah_chen_payload();
    payload["requirements"] = json!("");

    let request = PilotRequestSchema::parse(&payload).unwrap();

    assert_eq!(request.requirements(), Some(""));
}

#[test]
fn given_unknown_keys_when_parsed_then_ignored() {
    // Given
    let mut payload = sarah_chen_payload();
    payload["id"] = json!("client-chosen-id");
    payload["createdAt"] = json!("1999-01-01T00:00:00Z");
    payload["favouriteColour"] = json!("teal");

    // When
    let result = PilotRequestSchema::parse(&payload);

    // Then
    assert_that!(result, ok(anything()));
    let serialized = serde_json::to_value(result.unwrap()).unwrap();
    assert!(serialized.get("id").is_none());
    assert!(serialized.get("favouriteColour").is_none());
}

#[test]
fn given_value_outside_catalog_when_parsed_then_accepted() {
    // Given
    let mut payload = sarah_chen_payload();
    payload["industry"] = json!("aerospace");
    payload["networkSize"] = json!("planetary");

    // When
    let request = PilotRequestSchema::parse(&payload).unwrap();

    // Then
    assert_eq!(request.industry(), "aerospace");
    assert_eq!(request.network_size(), "planetary");
}

#[test]
fn given_whitespace_name_when_parsed_then_accepted() {
    let mut payload = sarah_chen_payload();
    payload["name"] = json!(" ");

    assert_that!(PilotRequestSchema::parse(&payload), ok(anything()));
}

// =========================================================================
// Rejected payloads
// =========================================================================

#[test]
fn given_empty_name_when_parsed_then_empty_error() {
    // Given
    let mut payload = sarah_chen_payload();
    payload["name"] = json!("");

    // When
    let errors = validation_errors(&payload);

    // Then
    assert_eq!(errors.len(), 1);
    let error = errors.iter().next().unwrap();
    assert_eq!(error.field, "name");
    assert_eq!(error.reason, FieldErrorReason::Empty);
}

#[test]
fn given_missing_email_when_parsed_then_missing_error() {
    let mut payload = sarah_chen_payload();
    payload.as_object_mut().unwrap().remove("email");

    let errors = validation_errors(&payload);

    assert_eq!(errors.field_names(), vec!["email"]);
    assert_eq!(
        errors.iter().next().unwrap().reason,
        FieldErrorReason::Missing
    );
}

#[test]
fn given_null_required_field_when_parsed_then_missing_error() {
    let mut payload = sarah_chen_payload();
    payload["industry"] = Value::Null;

    let errors = validation_errors(&payload);

    assert_eq!(errors.field_names(), vec!["industry"]);
}

#[test]
fn given_wrong_type_when_parsed_then_wrong_type_error() {
    // Given
    let mut payload = sarah_chen_payload();
    payload["networkSize"] = json!(500);
    payload["requirements"] = json!(["a", "b"]);

    // When
    let errors = validation_errors(&payload);

    // Then
    assert_eq!(errors.field_names(), vec!["networkSize", "requirements"]);
    for error in errors.iter() {
        assert_eq!(
            error.reason,
            FieldErrorReason::WrongType { expected: "string" }
        );
    }
}

#[test]
fn given_empty_object_when_parsed_then_every_required_field_reported() {
    // Given
    let payload = json!({});

    // When
    let errors = validation_errors(&payload);

    // Then
    let required: Vec<_> = PilotRequestSchema::required_fields().collect();
    assert_eq!(errors.field_names(), required);
    assert!(!errors.field_names().contains(&"requirements"));
}

#[test]
fn given_non_object_when_parsed_then_body_error() {
    for payload in [json!(null), json!("text"), json!([1, 2, 3]), json!(42)] {
        let errors = validation_errors(&payload);

        assert_eq!(errors.field_names(), vec![BODY_FIELD]);
    }
}

#[test]
fn given_several_failures_when_displayed_then_all_listed() {
    let payload = json!({ "name": "", "email": 7 });

    let message = validation_errors(&payload).to_string();

    assert!(message.contains("name must not be empty"));
    assert!(message.contains("email must be a string"));
    assert!(message.contains("industry is required"));
}

#[test]
fn given_invalid_payload_when_parsed_then_core_error_exposes_fields() {
    let result = PilotRequestSchema::parse(&json!({}));

    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert!(error.field_errors().is_some());
    assert!(error.to_string().starts_with("Validation error:"));
}
