use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT,
    MAX_MAX_BODY_BYTES, MIN_MAX_BODY_BYTES, MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        if self.max_body_bytes < MIN_MAX_BODY_BYTES || self.max_body_bytes > MAX_MAX_BODY_BYTES {
            return Err(ConfigError::server(format!(
                "server.max_body_bytes must be {}-{}, got {}",
                MIN_MAX_BODY_BYTES, MAX_MAX_BODY_BYTES, self.max_body_bytes
            )));
        }

        Ok(())
    }
}
