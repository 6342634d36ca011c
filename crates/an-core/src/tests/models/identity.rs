use crate::Identity;

use googletest::prelude::*;

#[test]
fn given_email_with_at_when_local_part_then_returns_prefix() {
    assert_that!(Identity::local_part("alice@example.com"), eq("alice"));
}

#[test]
fn given_email_with_several_ats_when_local_part_then_splits_on_first() {
    assert_that!(Identity::local_part("a@b@c"), eq("a"));
}

#[test]
fn given_email_without_at_when_local_part_then_returns_whole_string() {
    assert_that!(Identity::local_part("nobody"), eq("nobody"));
}

#[test]
fn given_identity_when_serialize_then_display_name_stored_under_name() {
    let identity = Identity::new("1", "x@y.com", "X");

    let json = serde_json::to_value(&identity).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"id": "1", "email": "x@y.com", "name": "X"})
    );
}

#[test]
fn given_durable_record_when_deserialize_then_maps_name_to_display_name() {
    let json = r#"{"id":"1","email":"x@y.com","name":"X"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity, eq(&Identity::new("1", "x@y.com", "X")));
}

#[test]
fn given_record_missing_email_when_deserialize_then_fails() {
    let json = r#"{"id":"1","name":"X"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_generated_identities_when_compared_then_ids_differ() {
    let a = Identity::generate("a@b.com", "A");
    let b = Identity::generate("a@b.com", "A");

    assert_ne!(a.id, b.id);
}

#[test]
fn given_blank_email_when_validate_then_error() {
    let identity = Identity::new("1", "  ", "X");

    assert_that!(identity.validate(), err(anything()));
}

#[test]
fn given_complete_identity_when_validate_then_ok() {
    assert_that!(Identity::new("1", "x@y.com", "X").validate(), ok(anything()));
}
