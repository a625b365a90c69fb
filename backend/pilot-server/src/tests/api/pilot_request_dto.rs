use crate::PilotRequestDto;

use pilot_core::{PilotRequest, PilotRequestSchema};

use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

fn stored(requirements: Option<&str>) -> PilotRequest {
    let mut payload = json!({
        "name": "Sarah Chen",
        "email": "sarah@vitalpath.com",
        "industry": "healthcare",
        "useCase": "latency-optimization",
        "deploymentType": "hardware",
        "networkSize": "medium"
    });
    if let Some(requirements) = requirements {
        payload["requirements"] = json!(requirements);
    }

    let new_request = PilotRequestSchema::parse(&payload).unwrap();
    let created_at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
    PilotRequest::from_new(new_request, Uuid::nil(), created_at)
}

#[test]
fn test_dto_uses_camel_case_keys_and_millisecond_timestamp() {
    let dto = PilotRequestDto::from(stored(Some("reduce jitter")));

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["id"], Uuid::nil().to_string());
    assert_eq!(json["useCase"], "latency-optimization");
    assert_eq!(json["deploymentType"], "hardware");
    assert_eq!(json["networkSize"], "medium");
    assert_eq!(json["requirements"], "reduce jitter");
    assert_eq!(json["createdAt"], "2025-03-14T09:26:53.000Z");
}

#[test]
fn test_dto_omits_absent_requirements() {
    let dto = PilotRequestDto::from(stored(None));

    let json = serde_json::to_value(&dto).unwrap();

    assert!(json.get("requirements").is_none());
}
