mod identity;
mod locale;
mod pending_signup;
mod session_state;
