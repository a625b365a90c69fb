pub mod error;
pub mod options;
pub mod pilot_requests;
