use crate::{AppState, create_pilot_request, health, list_pilot_options, list_pilot_requests};

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.server.max_body_bytes;
    let allow_any_origin = state.cors.allow_any_origin;

    let router = Router::new()
        // Pilot request intake
        .route(
            "/api/pilot-requests",
            get(list_pilot_requests).post(create_pilot_request),
        )
        .route("/api/pilot-options", get(list_pilot_options))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(crate::metrics::render_metrics))
        // Add shared state
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes));

    if allow_any_origin {
        // The marketing site is served from a different origin
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}
