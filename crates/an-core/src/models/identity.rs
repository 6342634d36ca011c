use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user held by the session.
///
/// Serialized as `{"id", "email", "name"}`; the display name lives under
/// `name` in the durable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }

    /// Builds an identity with a freshly generated id.
    pub fn generate(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), email, display_name)
    }

    /// Everything before the first `@`, or the whole string when there is none.
    pub fn local_part(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::validation("identity id cannot be empty"));
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::validation("identity email cannot be empty"));
        }
        Ok(())
    }
}
