pub mod new_pilot_request;
pub mod new_user;
pub mod pilot_request;
pub mod user;
