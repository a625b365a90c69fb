use crate::{CliClientResult, PilotSubmission};

use pilot_core::OptionField;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate and submit a pilot request
    Submit {
        /// Contact name
        #[arg(long)]
        name: Option<String>,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
        /// Industry (see `pilot options`)
        #[arg(long)]
        industry: Option<String>,
        /// Primary use case
        #[arg(long)]
        use_case: Option<String>,
        /// Deployment type
        #[arg(long)]
        deployment_type: Option<String>,
        /// Network size
        #[arg(long)]
        network_size: Option<String>,
        /// Free-text requirements
        #[arg(long)]
        requirements: Option<String>,
    },

    /// List all pilot requests, newest first
    List,

    /// Show the option catalog for enumerated fields
    Options {
        /// Only this field (industry, useCase, deploymentType, networkSize)
        field: Option<String>,
    },
}

impl Commands {
    /// Collect `submit` flags; `None` for other commands
    pub fn submission(&self) -> Option<PilotSubmission> {
        match self {
            Commands::Submit {
                name,
                email,
                industry,
                use_case,
                deployment_type,
                network_size,
                requirements,
            } => Some(PilotSubmission {
                name: name.clone(),
                email: email.clone(),
                industry: industry.clone(),
                use_case: use_case.clone(),
                deployment_type: deployment_type.clone(),
                network_size: network_size.clone(),
                requirements: requirements.clone(),
            }),
            _ => None,
        }
    }

    /// Field named by `options <FIELD>`; `None` when absent or for other commands
    pub fn option_field(&self) -> CliClientResult<Option<OptionField>> {
        match self {
            Commands::Options { field: Some(name) } => Ok(Some(name.parse()?)),
            _ => Ok(None),
        }
    }
}
