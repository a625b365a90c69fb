//! Pilot request REST API handlers

use crate::{ApiError, ApiResult, AppState, FETCH_FAILED_MESSAGE, PilotRequestDto};

use pilot_core::{OptionField, PilotRequestSchema};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::{info, warn};
use serde_json::Value;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/pilot-requests
///
/// Validate and store a pilot request. The store is untouched unless the
/// payload passes the schema. A store failure is answered like invalid
/// input.
pub async fn create_pilot_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<PilotRequestDto>> {
    let Json(body) = payload.inspect_err(|_| state.metrics.submission_rejected())?;

    let new_request =
        PilotRequestSchema::parse(&body).inspect_err(|_| state.metrics.submission_rejected())?;

    let stored = state
        .storage
        .create_pilot_request(new_request)
        .await
        .map_err(|e| {
            state.metrics.store_failed();
            ApiError::rejected(e)
        })?;

    state.metrics.submission_accepted();
    match state.storage.pilot_request_count().await {
        Ok(count) => state.metrics.stored_count(count),
        Err(e) => warn!("Could not refresh stored pilot request count: {}", e),
    }

    info!(
        "Pilot request {} submitted ({}, {})",
        stored.id,
        label(OptionField::Industry, &stored.industry),
        label(OptionField::NetworkSize, &stored.network_size)
    );

    Ok(Json(stored.into()))
}

/// GET /api/pilot-requests
///
/// List every pilot request, newest first
pub async fn list_pilot_requests(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PilotRequestDto>>> {
    let requests = state.storage.get_all_pilot_requests().await.map_err(|e| {
        state.metrics.store_failed();
        ApiError::internal(FETCH_FAILED_MESSAGE, e)
    })?;

    state.metrics.listing_served(requests.len());

    Ok(Json(
        requests.into_iter().map(PilotRequestDto::from).collect(),
    ))
}

/// Catalog label for a value, or the value itself when the catalog lacks it
fn label<'a>(field: OptionField, value: &'a str) -> &'a str {
    field.label_for(value).unwrap_or(value)
}
