mod models;

use serde_json::{Value, json};

/// A complete, valid pilot request payload
pub(crate) fn sarah_chen_payload() -> Value {
    json!({
        "name": "Sarah Chen",
        "email": "sarah@vitalpath.com",
        "industry": "healthcare",
        "useCase": "latency-optimization",
        "deploymentType": "hardware",
        "networkSize": "medium",
        "requirements": "reduce jitter"
    })
}
