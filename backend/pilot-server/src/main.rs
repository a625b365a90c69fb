use pilot_server::{AppState, build_router, error::ServerError, logger};
use pilot_store::MemStorage;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = pilot_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::Io {
            path: log_dir.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pilot-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Records live only as long as the process
    let storage = Arc::new(MemStorage::new());
    warn!("Using in-memory storage: pilot requests are lost on restart");

    let mut app_state = AppState::new(storage, &config);

    if config.metrics.enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| ServerError::Metrics {
                message: e.to_string(),
            })?;
        app_state = app_state.with_prometheus(handle);
        info!("Prometheus recorder installed, exposing /metrics");
    }

    let shutdown = app_state.shutdown.clone();

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
