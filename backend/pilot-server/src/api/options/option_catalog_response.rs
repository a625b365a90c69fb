use pilot_core::{OptionField, SelectOption};

use serde::Serialize;

/// Option catalog for the enumerated-style pilot request fields
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalogResponse {
    pub industry: &'static [SelectOption],
    pub use_case: &'static [SelectOption],
    pub deployment_type: &'static [SelectOption],
    pub network_size: &'static [SelectOption],
}

impl OptionCatalogResponse {
    pub fn new() -> Self {
        Self {
            industry: OptionField::Industry.options(),
            use_case: OptionField::UseCase.options(),
            deployment_type: OptionField::DeploymentType.options(),
            network_size: OptionField::NetworkSize.options(),
        }
    }
}

impl Default for OptionCatalogResponse {
    fn default() -> Self {
        Self::new()
    }
}
