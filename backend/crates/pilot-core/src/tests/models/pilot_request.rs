use crate::tests::sarah_chen_payload;
use crate::{PilotRequest, PilotRequestSchema};

use chrono::{TimeZone, Utc};
use uuid::Uuid;

#[test]
fn test_pilot_request_from_new_copies_fields() {
    let new_request = PilotRequestSchema::parse(&sarah_chen_payload()).unwrap();
    let id = Uuid::new_v4();
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    let stored = PilotRequest::from_new(new_request, id, created_at);

    assert_eq!(stored.id, id);
    assert_eq!(stored.created_at, created_at);
    assert_eq!(stored.name, "Sarah Chen");
    assert_eq!(stored.email, "sarah@vitalpath.com");
    assert_eq!(stored.industry, "healthcare");
    assert_eq!(stored.use_case, "latency-optimization");
    assert_eq!(stored.deployment_type, "hardware");
    assert_eq!(stored.network_size, "medium");
    assert_eq!(stored.requirements.as_deref(), Some("reduce jitter"));
}

#[test]
fn test_pilot_request_serializes_camel_case() {
    let new_request = PilotRequestSchema::parse(&sarah_chen_payload()).unwrap();
    let stored = PilotRequest::from_new(new_request, Uuid::new_v4(), Utc::now());

    let json = serde_json::to_value(&stored).unwrap();

    assert_eq!(json["useCase"], "latency-optimization");
    assert_eq!(json["deploymentType"], "hardware");
    assert_eq!(json["networkSize"], "medium");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("use_case").is_none());
}

#[test]
fn test_pilot_request_without_requirements_omits_key() {
    let mut payload = sarah_chen_payload();
    payload.as_object_mut().unwrap().remove("requirements");
    let new_request = PilotRequestSchema::parse(&payload).unwrap();
    let stored = PilotRequest::from_new(new_request, Uuid::new_v4(), Utc::now());

    let json = serde_json::to_value(&stored).unwrap();

    assert!(json.get("requirements").is_none());
}
