use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with store status
pub async fn health(State(state): State<AppState>) -> Response {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.storage.pilot_request_count().await {
        Ok(count) => {
            let health = json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "pilotRequests": count,
                "timestamp": timestamp,
            });
            (StatusCode::OK, Json(health)).into_response()
        }
        Err(e) => {
            log::error!("Health check failed: {}", e);
            let health = json!({
                "status": "degraded",
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": timestamp,
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(health)).into_response()
        }
    }
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    if state.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
