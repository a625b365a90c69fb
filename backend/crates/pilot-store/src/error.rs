use std::panic::Location;
use std::sync::PoisonError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Lock poisoned for {collection} collection {location}")]
    LockPoisoned {
        collection: &'static str,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn poisoned<T>(collection: &'static str, _err: PoisonError<T>) -> Self {
        log::error!("In-memory {} collection lock is poisoned", collection);
        Self::LockPoisoned {
            collection,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
