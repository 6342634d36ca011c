pub mod identity;
pub mod locale;
pub mod pending_signup;
pub mod session_state;
pub mod text_direction;
