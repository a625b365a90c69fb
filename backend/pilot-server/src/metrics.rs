use crate::{ApiError, ApiResult, AppState};

use axum::extract::State;
use metrics::{counter, gauge};

/// Metrics collector for pilot request handling
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "pilot_requests",
        }
    }

    /// Record a stored submission
    pub fn submission_accepted(&self) {
        counter!(format!("{}.submitted", self.prefix)).increment(1);
    }

    /// Record a submission turned away by validation
    pub fn submission_rejected(&self) {
        counter!(format!("{}.rejected", self.prefix)).increment(1);
    }

    /// Record a listing and the number of records it returned
    pub fn listing_served(&self, count: usize) {
        counter!(format!("{}.listed", self.prefix)).increment(1);
        self.stored_count(count);
    }

    /// Number of pilot requests currently held by the store
    pub fn stored_count(&self, count: usize) {
        gauge!(format!("{}.stored", self.prefix)).set(count as f64);
    }

    /// Record a storage failure
    pub fn store_failed(&self) {
        counter!(format!("{}.errors", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn render_metrics(State(state): State<AppState>) -> ApiResult<String> {
    let handle = state
        .prometheus
        .as_ref()
        .ok_or_else(|| ApiError::not_found("Metrics are disabled"))?;

    Ok(handle.render())
}
