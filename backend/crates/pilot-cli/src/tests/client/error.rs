use crate::ClientError;

use pilot_core::PilotRequestSchema;

use serde_json::json;

#[test]
fn test_core_validation_error_keeps_failing_fields() {
    let core_error = PilotRequestSchema::parse(&json!({ "name": "Sarah Chen" })).unwrap_err();

    let error = ClientError::from(core_error);

    match error {
        ClientError::Validation { fields, message, .. } => {
            assert_eq!(
                fields,
                vec![
                    "email",
                    "industry",
                    "useCase",
                    "deploymentType",
                    "networkSize"
                ]
            );
            assert!(message.contains("email is required"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_api_error_display_includes_status() {
    let error = ClientError::api_error(400, "Invalid request data".to_string());

    let text = error.to_string();

    assert!(text.contains("Invalid request data"));
    assert!(text.contains("400"));
}
