pub(crate) mod error;
pub(crate) mod mock;
pub(crate) mod provider_grant;

pub use error::{BackendError, Result as BackendResult};
pub use mock::{ACCEPTED_OTP, GOOGLE_PLACEHOLDER, MOCK_LATENCY, MockAuthBackend};
pub use provider_grant::{IdentityProvider, ProviderGrant};

use an_core::{Identity, PendingSignup};
use async_trait::async_trait;

/// The network side of authentication.
///
/// [`SessionContainer`](crate::SessionContainer) owns all state; a backend
/// only answers requests. Swapping [`MockAuthBackend`] for an HTTP client
/// changes no call site.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Identity>;

    /// Registers the sign-up and sends a one-time code.
    async fn sign_up(&self, signup: &PendingSignup) -> BackendResult<()>;

    async fn verify_otp(&self, signup: &PendingSignup, code: &str) -> BackendResult<Identity>;

    async fn resend_otp(&self, signup: &PendingSignup) -> BackendResult<()>;

    /// `None` means "start the provider flow"; a real backend exchanges the grant.
    async fn login_with_provider(&self, grant: Option<ProviderGrant>) -> BackendResult<Identity>;
}
