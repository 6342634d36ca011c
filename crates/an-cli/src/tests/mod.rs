mod error;

use crate::Runner;

use an_i18n::{Locale, LocaleStore};
use an_session::{MemoryStore, MockAuthBackend, SessionContainer};

use std::sync::Arc;
use std::time::Duration;

/// Runner over an in-memory store and a zero-latency mock backend.
pub(crate) fn runner_in(locale: Locale) -> Runner {
    let session = SessionContainer::new(
        Arc::new(MockAuthBackend::with_latency(Duration::ZERO)),
        Arc::new(MemoryStore::new()),
    );
    let mut store = LocaleStore::headless();
    store.set_locale(locale);
    Runner::new(session, store)
}
