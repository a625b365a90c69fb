mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod metrics_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use metrics_config::MetricsConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const MIN_MAX_BODY_BYTES: usize = 1024;
pub const MAX_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_METRICS_ENABLED: bool = true;
const DEFAULT_CORS_ALLOW_ANY_ORIGIN: bool = true;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "PILOT_CONFIG_DIR";
/// Config directory used when [`CONFIG_DIR_ENV`] is unset, relative to cwd
pub const DEFAULT_CONFIG_DIR: &str = ".pilot";
