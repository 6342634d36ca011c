//! Session state for the Al Nakhwa storefront.
//!
//! [`SessionContainer`] owns the signed-in [`Identity`](an_core::Identity)
//! and the sign-up → OTP verification flow, persisting the identity through
//! a [`DurableStore`]. Network calls go through an [`AuthBackend`]; the
//! shipped [`MockAuthBackend`] answers after a fixed delay.

pub mod backend;
pub mod cooldown;
pub mod error;
pub mod guard;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use backend::{
    ACCEPTED_OTP, AuthBackend, BackendError, IdentityProvider, MOCK_LATENCY, MockAuthBackend,
    ProviderGrant,
};
pub use cooldown::{RESEND_COOLDOWN_SECS, ResendCooldown};
pub use error::{Result as SessionResult, SessionError};
pub use guard::{Guarded, Navigation, ROOT_ROUTE, Route, guard, navigate, protect};
pub use session::{SessionContainer, SessionSnapshot};
pub use store::{
    DurableStore, FileStore, LoadResult, MemoryStore, StoreError, StoreResult, USER_STORAGE_KEY,
};
