pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::identity::Identity;
pub use models::locale::Locale;
pub use models::pending_signup::PendingSignup;
pub use models::session_state::SessionState;
pub use models::text_direction::TextDirection;
