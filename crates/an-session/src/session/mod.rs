pub(crate) mod in_flight;
pub(crate) mod snapshot;

pub use snapshot::SessionSnapshot;

use crate::backend::{AuthBackend, MockAuthBackend, ProviderGrant};
use crate::error::{Result as SessionResult, SessionError};
use crate::store::{self, DurableStore, FileStore, LoadResult};
use in_flight::InFlight;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use an_config::Config;
use an_core::{Identity, PendingSignup, SessionState};
use log::{error, info, warn};
use tokio::sync::watch;

#[derive(Default)]
struct SessionInner {
    identity: Option<Identity>,
    pending: Option<PendingSignup>,
}

impl SessionInner {
    fn state(&self) -> SessionState {
        if self.identity.is_some() {
            SessionState::Authenticated
        } else if self.pending.is_some() {
            SessionState::PendingVerification
        } else {
            SessionState::Unauthenticated
        }
    }
}

/// Process-wide authority on who is signed in and on the sign-up flow.
///
/// The identity is hydrated from the durable store synchronously in the
/// constructor. Every mutating operation is async, awaits the backend
/// without holding the state lock, then persists before mutating memory.
pub struct SessionContainer {
    backend: Arc<dyn AuthBackend>,
    store: Arc<dyn DurableStore>,
    inner: Mutex<SessionInner>,
    pub(crate) in_flight: AtomicUsize,
    notifier: watch::Sender<SessionSnapshot>,
    corruption_notice: Option<String>,
}

impl SessionContainer {
    pub fn new(backend: Arc<dyn AuthBackend>, store: Arc<dyn DurableStore>) -> Self {
        let LoadResult {
            identity,
            corruption_error,
        } = store::load_identity(store.as_ref()).unwrap_or_else(|e| {
            error!("Failed to read stored identity, starting signed out: {e}");
            LoadResult::default()
        });

        let inner = SessionInner {
            identity,
            pending: None,
        };
        let (notifier, _) = watch::channel(SessionSnapshot {
            state: inner.state(),
            identity: inner.identity.clone(),
            pending_email: None,
            loading: false,
        });

        Self {
            backend,
            store,
            inner: Mutex::new(inner),
            in_flight: AtomicUsize::new(0),
            notifier,
            corruption_notice: corruption_error,
        }
    }

    /// Mock backend with the configured latency over a file store in the configured dir.
    pub fn from_config(config: &Config) -> an_config::ConfigErrorResult<Self> {
        let backend = MockAuthBackend::with_latency(config.session.mock_latency());
        let store = FileStore::new(config.storage_path()?);
        Ok(Self::new(Arc::new(backend), Arc::new(store)))
    }

    // ---------------------------------------------------------------------
    // Readers
    // ---------------------------------------------------------------------

    pub fn current(&self) -> Option<Identity> {
        self.inner().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner().identity.is_some()
    }

    pub fn state(&self) -> SessionState {
        self.inner().state()
    }

    /// The sign-up awaiting its code. Its `Debug` output hides the password.
    pub fn pending(&self) -> Option<PendingSignup> {
        self.inner().pending.clone()
    }

    pub fn pending_email(&self) -> Option<String> {
        self.inner().pending.as_ref().map(|p| p.email.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Parse error of a stored record that was purged during hydration.
    pub fn corruption_notice(&self) -> Option<&str> {
        self.corruption_notice.as_deref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner();
        SessionSnapshot {
            state: inner.state(),
            identity: inner.identity.clone(),
            pending_email: inner.pending.as_ref().map(|p| p.email.clone()),
            loading: self.is_loading(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.notifier.subscribe()
    }

    // ---------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------

    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<Identity> {
        let _loading = InFlight::begin(self);

        let identity = self
            .backend
            .sign_in(email, password)
            .await
            .map_err(SessionError::from_sign_in)?;

        self.establish(identity.clone())?;
        info!("Signed in as {}", identity.email);
        Ok(identity)
    }

    /// Starts a sign-up. A sign-up already awaiting its code is replaced.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> SessionResult<()> {
        let _loading = InFlight::begin(self);
        let signup = PendingSignup::new(email, password, display_name);

        self.backend
            .sign_up(&signup)
            .await
            .map_err(SessionError::from_sign_up)?;

        {
            let mut inner = self.inner();
            if let Some(previous) = inner.pending.replace(signup) {
                warn!(
                    "Sign-up for {} replaced pending sign-up for {}",
                    email, previous.email
                );
            }
        }
        self.publish();

        info!("Sign-up started for {email}, awaiting verification");
        Ok(())
    }

    pub async fn verify_otp(&self, code: &str) -> SessionResult<Identity> {
        let signup = self
            .inner()
            .pending
            .clone()
            .ok_or_else(SessionError::no_pending_verification)?;

        let _loading = InFlight::begin(self);

        let identity = self
            .backend
            .verify_otp(&signup, code)
            .await
            .map_err(SessionError::from_verify)?;

        // Clears whatever sign-up is pending, including one started mid-verify.
        self.establish(identity.clone())?;

        info!("Verified sign-up for {}", identity.email);
        Ok(identity)
    }

    /// Asks the backend for a fresh code. The accepted code does not change.
    pub async fn resend_otp(&self) -> SessionResult<()> {
        let signup = self
            .inner()
            .pending
            .clone()
            .ok_or_else(SessionError::no_pending_verification)?;

        self.backend
            .resend_otp(&signup)
            .await
            .map_err(SessionError::from_resend)
    }

    pub async fn login_with_google(&self) -> SessionResult<Identity> {
        self.login_with_provider(None).await
    }

    pub async fn login_with_provider(
        &self,
        grant: Option<ProviderGrant>,
    ) -> SessionResult<Identity> {
        let _loading = InFlight::begin(self);

        let identity = self
            .backend
            .login_with_provider(grant)
            .await
            .map_err(SessionError::from_provider_login)?;

        self.establish(identity.clone())?;
        info!("Signed in with provider as {}", identity.email);
        Ok(identity)
    }

    /// Always ends signed out. A failure to delete the stored record is logged.
    pub async fn sign_out(&self) -> SessionResult<()> {
        {
            let mut inner = self.inner();
            inner.identity = None;
            inner.pending = None;
        }

        if let Err(e) = store::clear_identity(self.store.as_ref()) {
            error!("Failed to remove stored identity: {e} ({})", e.recovery_hint());
        }

        self.publish();
        info!("Signed out");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Persist first so a storage failure leaves memory untouched.
    fn establish(&self, identity: Identity) -> SessionResult<()> {
        store::save_identity(self.store.as_ref(), &identity)?;
        {
            let mut inner = self.inner();
            inner.pending = None;
            inner.identity = Some(identity);
        }
        self.publish();
        Ok(())
    }

    pub(crate) fn publish(&self) {
        self.notifier.send_replace(self.snapshot());
    }

    fn inner(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SessionContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContainer")
            .field("state", &self.state())
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}
