use crate::DEFAULT_CORS_ALLOW_ANY_ORIGIN;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allow cross-origin requests from any origin (the website is served separately)
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: DEFAULT_CORS_ALLOW_ANY_ORIGIN,
        }
    }
}
