use crate::backend::BackendError;
use crate::store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by [`SessionContainer`](crate::SessionContainer) operations.
///
/// A failed operation never leaves partial state behind.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Sign-in failed: {message} {location}")]
    SignInFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Signup failed: {message} {location}")]
    SignupFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("No pending verification {location}")]
    NoPendingVerification { location: ErrorLocation },

    #[error("Invalid OTP code {location}")]
    InvalidOtp { location: ErrorLocation },

    #[error("OTP resend failed: {message} {location}")]
    ResendFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Google login failed: {message} {location}")]
    GoogleLoginFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Message suitable for a toast, without location details.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "Invalid credentials",
            Self::SignInFailed { .. } => "Sign-in failed",
            Self::SignupFailed { .. } => "Signup failed",
            Self::NoPendingVerification { .. } => "No pending verification",
            Self::InvalidOtp { .. } => "Invalid OTP code",
            Self::ResendFailed { .. } => "OTP resend failed",
            Self::GoogleLoginFailed { .. } => "Google login failed",
            Self::Storage { .. } => "Could not save your session",
        }
    }

    /// Translation key of the localized toast message.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "error.invalidCredentials",
            Self::SignInFailed { .. } => "error.signInFailed",
            Self::SignupFailed { .. } => "error.signupFailed",
            Self::NoPendingVerification { .. } => "error.noPendingVerification",
            Self::InvalidOtp { .. } => "error.invalidOtp",
            Self::ResendFailed { .. } => "error.resendFailed",
            Self::GoogleLoginFailed { .. } => "error.googleLoginFailed",
            Self::Storage { .. } => "error.storage",
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_pending_verification() -> Self {
        Self::NoPendingVerification {
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
    pub fn storage(source: StoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Sign-in keeps the credentials rejection; anything else is wrapped.
    #[track_caller]
    pub fn from_sign_in(err: BackendError) -> Self {
        match err {
            BackendError::InvalidCredentials { .. } => Self::invalid_credentials(),
            other => Self::SignInFailed {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }

    #[track_caller]
    pub fn from_sign_up(err: BackendError) -> Self {
        Self::SignupFailed {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Every verification failure reads as an invalid code to the user.
    #[track_caller]
    pub fn from_verify(err: BackendError) -> Self {
        if !matches!(err, BackendError::InvalidOtp { .. }) {
            log::warn!("OTP verification failed unexpectedly: {err}");
        }
        Self::invalid_otp()
    }

    #[track_caller]
    pub fn from_resend(err: BackendError) -> Self {
        Self::ResendFailed {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_provider_login(err: BackendError) -> Self {
        Self::GoogleLoginFailed {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::storage(source)
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
