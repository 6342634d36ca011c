use crate::Identity;

use std::fmt;

/// A sign-up waiting for its one-time code.
///
/// Lives in memory only. Never serialized, and `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingSignup {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl PendingSignup {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }

    /// Promotes the pending fields into a new identity. The password is dropped.
    pub fn into_identity(self) -> Identity {
        Identity::generate(self.email, self.display_name)
    }
}

impl fmt::Debug for PendingSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSignup")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}
