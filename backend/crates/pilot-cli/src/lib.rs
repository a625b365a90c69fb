//! pilot-cli library
//!
//! This module exports the HTTP client and the local submission check for use
//! in tests and the `pilot` binary.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub(crate) mod submission;


pub use client::{CliClientResult, Client, ClientError};
pub use submission::PilotSubmission;

/// Server used when neither `--server` nor `PILOT_SERVER_URL` is given
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
