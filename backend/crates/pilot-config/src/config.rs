use crate::{
    CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, CorsConfig, DEFAULT_CONFIG_DIR, LoggingConfig,
    MetricsConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PILOT_CONFIG_DIR env var, else use ./.pilot/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PILOT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PILOT_CONFIG_DIR env var > ./.pilot/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(file)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max body {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  metrics: {}",
            if self.metrics.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!(
            "  cors: {}",
            if self.cors.allow_any_origin {
                "any origin"
            } else {
                "same origin"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PILOT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PILOT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "PILOT_SERVER_MAX_BODY_BYTES",
            &mut self.server.max_body_bytes,
        );

        // Logging
        Self::apply_env_parse("PILOT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PILOT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("PILOT_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("PILOT_LOG_FILE", &mut self.logging.file);

        // Metrics
        Self::apply_env_bool("PILOT_METRICS_ENABLED", &mut self.metrics.enabled);

        // CORS
        Self::apply_env_bool(
            "PILOT_CORS_ALLOW_ANY_ORIGIN",
            &mut self.cors.allow_any_origin,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
