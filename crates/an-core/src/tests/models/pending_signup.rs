use crate::PendingSignup;

#[test]
fn given_pending_signup_when_debug_then_password_redacted() {
    let pending = PendingSignup::new("a@b.com", "hunter2", "Alice");

    let rendered = format!("{pending:?}");

    assert!(rendered.contains("a@b.com"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn given_pending_signup_when_into_identity_then_keeps_email_and_name() {
    let identity = PendingSignup::new("a@b.com", "pw", "Alice").into_identity();

    assert_eq!(identity.email, "a@b.com");
    assert_eq!(identity.display_name, "Alice");
    assert!(!identity.id.is_empty());
}
