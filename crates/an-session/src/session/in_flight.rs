use crate::SessionContainer;

use std::sync::atomic::Ordering;

/// Holds the loading flag up for the lifetime of one operation.
///
/// Released on drop, so failed and cancelled operations clear it too.
pub(crate) struct InFlight<'a> {
    session: &'a SessionContainer,
}

impl<'a> InFlight<'a> {
    pub(crate) fn begin(session: &'a SessionContainer) -> Self {
        session.in_flight.fetch_add(1, Ordering::SeqCst);
        session.publish();
        Self { session }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.session.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.session.publish();
    }
}
