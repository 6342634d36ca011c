use an_core::{Identity, SessionState};

/// What views observe after every session change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub identity: Option<Identity>,
    /// Email of the sign-up awaiting its code, if any
    pub pending_email: Option<String>,
    pub loading: bool,
}
