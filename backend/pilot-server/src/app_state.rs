use crate::{Metrics, ShutdownCoordinator};

use pilot_config::{Config, CorsConfig, ServerConfig};
use pilot_store::Storage;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub metrics: Metrics,
    /// Present when the Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
    pub shutdown: ShutdownCoordinator,
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: &Config) -> Self {
        Self {
            storage,
            metrics: Metrics::new(),
            prometheus: None,
            shutdown: ShutdownCoordinator::new(),
            server: config.server.clone(),
            cors: config.cors.clone(),
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
