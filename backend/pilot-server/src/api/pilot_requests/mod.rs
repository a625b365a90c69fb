pub mod pilot_request_dto;
#[allow(clippy::module_inception)]
pub mod pilot_requests;
