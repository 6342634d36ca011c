use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid locale: {value} {location}")]
    InvalidLocale {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid session state: {value} {location}")]
    InvalidSessionState {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
