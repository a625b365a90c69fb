pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;


pub use api::{
    error::{
        ApiError, ApiErrorResponse, FETCH_FAILED_MESSAGE, INVALID_REQUEST_MESSAGE,
        Result as ApiResult,
    },
    options::{option_catalog_response::OptionCatalogResponse, options::list_pilot_options},
    pilot_requests::{
        pilot_request_dto::PilotRequestDto,
        pilot_requests::{create_pilot_request, list_pilot_requests},
    },
};
pub use app_state::AppState;
pub use crate::metrics::Metrics;
pub use routes::build_router;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
