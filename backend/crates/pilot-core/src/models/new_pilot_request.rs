use crate::OptionField;

use serde::Serialize;

/// A pilot request that has passed the validation schema.
///
/// There is no public constructor and no `Deserialize` impl: the only way to
/// obtain one is [`crate::PilotRequestSchema::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPilotRequest {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) industry: String,
    pub(crate) use_case: String,
    pub(crate) deployment_type: String,
    pub(crate) network_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) requirements: Option<String>,
}

impl NewPilotRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn use_case(&self) -> &str {
        &self.use_case
    }

    pub fn deployment_type(&self) -> &str {
        &self.deployment_type
    }

    pub fn network_size(&self) -> &str {
        &self.network_size
    }

    pub fn requirements(&self) -> Option<&str> {
        self.requirements.as_deref()
    }

    /// Value of an enumerated-style field
    pub fn option_value(&self, field: OptionField) -> &str {
        match field {
            OptionField::Industry => &self.industry,
            OptionField::UseCase => &self.use_case,
            OptionField::DeploymentType => &self.deployment_type,
            OptionField::NetworkSize => &self.network_size,
        }
    }
}
