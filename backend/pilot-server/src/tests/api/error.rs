use crate::{ApiError, FETCH_FAILED_MESSAGE, INVALID_REQUEST_MESSAGE};

use pilot_core::PilotRequestSchema;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_generic_message() {
    let error = ApiError::Validation {
        message: "name must not be empty".into(),
        fields: vec!["name".into()],
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": INVALID_REQUEST_MESSAGE }));
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = ApiError::internal(FETCH_FAILED_MESSAGE, "lock poisoned for pilot_requests");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], FETCH_FAILED_MESSAGE);
    assert!(!json.to_string().contains("poisoned"));
}

#[tokio::test]
async fn test_rejected_submission_answers_like_invalid_input() {
    let error = ApiError::rejected("lock poisoned for pilot_requests");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": INVALID_REQUEST_MESSAGE }));
}

#[tokio::test]
async fn test_fetch_failure_uses_fetch_message() {
    let (status, json) = body_json(ApiError::internal(FETCH_FAILED_MESSAGE, "boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to fetch pilot requests");
}

#[tokio::test]
async fn test_not_found_returns_404_with_message() {
    let (status, json) = body_json(ApiError::not_found("Metrics are disabled")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Metrics are disabled");
}

#[test]
fn test_core_validation_error_converts_with_field_names() {
    let core_error = PilotRequestSchema::parse(&json!({ "name": "" })).unwrap_err();

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { fields, .. } => {
            assert!(fields.contains(&"name".to_string()));
            assert!(fields.contains(&"email".to_string()));
            assert!(!fields.contains(&"requirements".to_string()));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}
