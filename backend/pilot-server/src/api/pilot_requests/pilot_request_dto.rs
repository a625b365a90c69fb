use pilot_core::PilotRequest;

use chrono::SecondsFormat;
use serde::Serialize;

/// Pilot request DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotRequestDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub industry: String,
    pub use_case: String,
    pub deployment_type: String,
    pub network_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    /// RFC 3339, UTC, millisecond precision
    pub created_at: String,
}

impl From<PilotRequest> for PilotRequestDto {
    fn from(r: PilotRequest) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name,
            email: r.email,
            industry: r.industry,
            use_case: r.use_case,
            deployment_type: r.deployment_type,
            network_size: r.network_size,
            requirements: r.requirements,
            created_at: r.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
