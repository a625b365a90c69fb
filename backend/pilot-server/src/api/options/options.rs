use crate::OptionCatalogResponse;

use axum::Json;

/// GET /api/pilot-options
///
/// The choices the intake form offers. Informational only; submissions are
/// not checked against them.
pub async fn list_pilot_options() -> Json<OptionCatalogResponse> {
    Json(OptionCatalogResponse::new())
}
