use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by an auth backend. The session container maps these
/// onto the user-facing [`SessionError`](crate::SessionError) taxonomy.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Credentials rejected {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("One-time code rejected {location}")]
    InvalidOtp { location: ErrorLocation },

    #[error("Backend unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl BackendError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_otp() -> Self {
        Self::InvalidOtp {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
