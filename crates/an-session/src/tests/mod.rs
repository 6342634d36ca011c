mod store;

use crate::backend::{AuthBackend, BackendError, BackendResult, MockAuthBackend, ProviderGrant};
use crate::store::{DurableStore, MemoryStore, StoreError, StoreResult, USER_STORAGE_KEY};
use crate::SessionContainer;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use an_core::{Identity, PendingSignup};
use async_trait::async_trait;

/// Session over a zero-latency mock backend.
pub(crate) fn instant_session(store: Arc<dyn DurableStore>) -> SessionContainer {
    SessionContainer::new(Arc::new(MockAuthBackend::with_latency(Duration::ZERO)), store)
}

pub(crate) fn memory_session() -> (SessionContainer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (instant_session(store.clone()), store)
}

/// The stored identity record, parsed.
pub(crate) fn stored_record(store: &dyn DurableStore) -> Option<serde_json::Value> {
    store
        .get(USER_STORAGE_KEY)
        .unwrap()
        .map(|json| serde_json::from_str(&json).unwrap())
}

/// Backend whose every call fails as if the network were down.
pub(crate) struct OfflineBackend;

#[async_trait]
impl AuthBackend for OfflineBackend {
    async fn sign_in(&self, _email: &str, _password: &str) -> BackendResult<Identity> {
        Err(BackendError::unavailable("offline"))
    }

    async fn sign_up(&self, _signup: &PendingSignup) -> BackendResult<()> {
        Err(BackendError::unavailable("offline"))
    }

    async fn verify_otp(&self, _signup: &PendingSignup, _code: &str) -> BackendResult<Identity> {
        Err(BackendError::unavailable("offline"))
    }

    async fn resend_otp(&self, _signup: &PendingSignup) -> BackendResult<()> {
        Err(BackendError::unavailable("offline"))
    }

    async fn login_with_provider(
        &self,
        _grant: Option<ProviderGrant>,
    ) -> BackendResult<Identity> {
        Err(BackendError::unavailable("offline"))
    }
}

/// Store that can be read but never written.
pub(crate) struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub(crate) fn new(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

impl DurableStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::file_write(
            PathBuf::from(key),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        Err(StoreError::file_remove(
            PathBuf::from(key),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}

/// Mock backend whose verification takes longer than everything else.
pub(crate) struct SlowVerifyBackend {
    inner: MockAuthBackend,
    verify_delay: Duration,
}

impl SlowVerifyBackend {
    pub(crate) fn new(verify_delay: Duration) -> Self {
        Self {
            inner: MockAuthBackend::with_latency(Duration::ZERO),
            verify_delay,
        }
    }
}

#[async_trait]
impl AuthBackend for SlowVerifyBackend {
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Identity> {
        self.inner.sign_in(email, password).await
    }

    async fn sign_up(&self, signup: &PendingSignup) -> BackendResult<()> {
        self.inner.sign_up(signup).await
    }

    async fn verify_otp(&self, signup: &PendingSignup, code: &str) -> BackendResult<Identity> {
        tokio::time::sleep(self.verify_delay).await;
        self.inner.verify_otp(signup, code).await
    }

    async fn resend_otp(&self, signup: &PendingSignup) -> BackendResult<()> {
        self.inner.resend_otp(signup).await
    }

    async fn login_with_provider(
        &self,
        grant: Option<ProviderGrant>,
    ) -> BackendResult<Identity> {
        self.inner.login_with_provider(grant).await
    }
}
