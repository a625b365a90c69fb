//! Option catalog for the enumerated-style pilot request fields.
//!
//! These are the choices the intake form offers. The server does not enforce
//! them; clients use them to constrain input before submitting.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// A selectable value with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const INDUSTRY_OPTIONS: &[SelectOption] = &[
    opt("healthcare", "Healthcare"),
    opt("defense", "Defense & Government"),
    opt("manufacturing", "Manufacturing"),
    opt("finance", "Financial Services"),
    opt("telecom", "Telecommunications"),
    opt("other", "Other"),
];

pub const USE_CASE_OPTIONS: &[SelectOption] = &[
    opt("ddos-protection", "DDoS Protection"),
    opt("qos-optimization", "QoS Optimization"),
    opt("cost-reduction", "Cost Reduction"),
    opt("latency-optimization", "Latency Optimization"),
    opt("traffic-management", "Traffic Management"),
    opt("other", "Other"),
];

pub const DEPLOYMENT_TYPE_OPTIONS: &[SelectOption] = &[
    opt("namespace", "Namespace/Container"),
    opt("gns3", "GNS3 Simulation"),
    opt("hardware", "Real Hardware"),
    opt("cloud", "Cloud Environment"),
];

pub const NETWORK_SIZE_OPTIONS: &[SelectOption] = &[
    opt("small", "Small (< 100 nodes)"),
    opt("medium", "Medium (100-1000 nodes)"),
    opt("large", "Large (1000+ nodes)"),
    opt("enterprise", "Enterprise (10k+ nodes)"),
];

/// Pilot request fields that have an option catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Industry,
    UseCase,
    DeploymentType,
    NetworkSize,
}

impl OptionField {
    pub const ALL: [OptionField; 4] = [
        Self::Industry,
        Self::UseCase,
        Self::DeploymentType,
        Self::NetworkSize,
    ];

    /// Wire (camelCase) field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::UseCase => "useCase",
            Self::DeploymentType => "deploymentType",
            Self::NetworkSize => "networkSize",
        }
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            Self::Industry => INDUSTRY_OPTIONS,
            Self::UseCase => USE_CASE_OPTIONS,
            Self::DeploymentType => DEPLOYMENT_TYPE_OPTIONS,
            Self::NetworkSize => NETWORK_SIZE_OPTIONS,
        }
    }

    pub fn is_known(&self, value: &str) -> bool {
        self.options().iter().any(|o| o.value == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }

    /// Option values joined for display, e.g. in error messages
    pub fn values_list(&self) -> String {
        self.options()
            .iter()
            .map(|o| o.value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for OptionField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "industry" => Ok(Self::Industry),
            "useCase" => Ok(Self::UseCase),
            "deploymentType" => Ok(Self::DeploymentType),
            "networkSize" => Ok(Self::NetworkSize),
            _ => Err(CoreError::UnknownOptionField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
