//! Local pre-submit check for the `submit` command.
//!
//! Runs the same schema the server runs, then holds the enumerated-style
//! fields to the option catalog the way the intake form does.

use crate::{CliClientResult, ClientError};

use pilot_core::{NewPilotRequest, OptionField, PilotRequestSchema};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Pilot request fields as collected from the command line
#[derive(Debug, Clone, Default)]
pub struct PilotSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub use_case: Option<String>,
    pub deployment_type: Option<String>,
    pub network_size: Option<String>,
    pub requirements: Option<String>,
}

impl PilotSubmission {
    /// JSON payload holding only the fields that were given
    pub fn to_payload(&self) -> Value {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("industry", &self.industry),
            ("useCase", &self.use_case),
            ("deploymentType", &self.deployment_type),
            ("networkSize", &self.network_size),
            ("requirements", &self.requirements),
        ];

        let mut payload = Map::new();
        for (key, value) in fields {
            if let Some(value) = value {
                payload.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(payload)
    }

    /// Check the submission and produce the request to send
    #[track_caller]
    pub fn validate(&self) -> CliClientResult<NewPilotRequest> {
        let request = PilotRequestSchema::parse(&self.to_payload())?;

        for field in OptionField::ALL {
            let value = request.option_value(field);
            if !field.is_known(value) {
                return Err(ClientError::UnknownOption {
                    field: field.as_str(),
                    value: value.to_string(),
                    allowed: field.values_list(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(request)
    }
}
