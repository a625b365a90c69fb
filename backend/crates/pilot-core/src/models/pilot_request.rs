//! Pilot request entity - a lead-capture record submitted through the pilot program form.

use crate::NewPilotRequest;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored pilot request.
///
/// `id` and `created_at` are assigned by the store at insertion and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub industry: String,
    pub use_case: String,
    pub deployment_type: String,
    pub network_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PilotRequest {
    /// Stamp a validated submission with its identity and insertion time
    pub fn from_new(request: NewPilotRequest, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: request.name,
            email: request.email,
            industry: request.industry,
            use_case: request.use_case,
            deployment_type: request.deployment_type,
            network_size: request.network_size,
            requirements: request.requirements,
            created_at,
        }
    }
}
