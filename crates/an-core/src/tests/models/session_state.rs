use crate::SessionState;

use std::str::FromStr;

#[test]
fn test_session_state_round_trips_through_str() {
    for state in [
        SessionState::Unauthenticated,
        SessionState::PendingVerification,
        SessionState::Authenticated,
    ] {
        assert_eq!(SessionState::from_str(state.as_str()).unwrap(), state);
    }
}

#[test]
fn test_session_state_rejects_unknown() {
    assert!(SessionState::from_str("logged_in").is_err());
}

#[test]
fn test_only_authenticated_is_authenticated() {
    assert!(SessionState::Authenticated.is_authenticated());
    assert!(!SessionState::PendingVerification.is_authenticated());
    assert!(!SessionState::Unauthenticated.is_authenticated());
}
