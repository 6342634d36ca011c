//! Stand-in backend: a fixed delay followed by hard-coded answers.
//!
//! Every mock value lives here so replacing the backend is mechanical.

use crate::backend::{AuthBackend, BackendError, BackendResult, ProviderGrant};

use std::time::Duration;

use an_core::{Identity, PendingSignup};
use async_trait::async_trait;
use log::{debug, info};

/// Simulated round-trip for every mock call.
pub const MOCK_LATENCY: Duration = Duration::from_secs(1);

/// The only code `verify_otp` accepts. Shown to users as a development aid.
pub const ACCEPTED_OTP: &str = "123456";

/// `(id, email, display name)` returned by every provider login.
pub const GOOGLE_PLACEHOLDER: (&str, &str, &str) = ("google-user", "user@gmail.com", "Google User");

#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    latency: Duration,
}

impl MockAuthBackend {
    pub fn new() -> Self {
        Self::with_latency(MOCK_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    /// Accepts any non-empty credentials; the password is never checked.
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Identity> {
        self.round_trip().await;

        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(BackendError::invalid_credentials());
        }

        Ok(Identity::generate(email, Identity::local_part(email)))
    }

    async fn sign_up(&self, signup: &PendingSignup) -> BackendResult<()> {
        self.round_trip().await;
        info!("Mock OTP for {} is {ACCEPTED_OTP}", signup.email);
        Ok(())
    }

    async fn verify_otp(&self, signup: &PendingSignup, code: &str) -> BackendResult<Identity> {
        self.round_trip().await;

        if code != ACCEPTED_OTP {
            return Err(BackendError::invalid_otp());
        }

        Ok(signup.clone().into_identity())
    }

    async fn resend_otp(&self, signup: &PendingSignup) -> BackendResult<()> {
        info!("Resending OTP to {}", signup.email);
        Ok(())
    }

    async fn login_with_provider(&self, grant: Option<ProviderGrant>) -> BackendResult<Identity> {
        self.round_trip().await;

        if let Some(grant) = grant {
            debug!("Ignoring {} grant in mock backend", grant.provider.as_str());
        }

        let (id, email, name) = GOOGLE_PLACEHOLDER;
        Ok(Identity::new(id, email, name))
    }
}
