use crate::store::{DurableStore, FileStore, MemoryStore, StoreError, save_identity};
use crate::USER_STORAGE_KEY;

use std::path::PathBuf;

use an_core::Identity;
use googletest::prelude::*;
use tempfile::TempDir;

// =============================================================================
// FileStore
// =============================================================================

#[test]
fn given_written_record_when_get_then_returns_value() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("nested"));

    store.set("k", "value").unwrap();

    assert_that!(store.get("k").unwrap(), some(eq("value")));
}

#[test]
fn given_missing_record_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    assert_that!(store.get("absent").unwrap(), none());
}

#[test]
fn given_existing_record_when_set_then_overwritten_without_temp_files() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    store.set("k", "one").unwrap();

    store.set("k", "two").unwrap();

    assert_that!(store.get("k").unwrap(), some(eq("two")));
    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_that!(names, elements_are![eq("k.json")]);
}

#[test]
fn given_missing_record_when_remove_then_ok() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    assert_that!(store.remove("absent"), ok(anything()));
}

#[test]
fn given_record_when_remove_then_gone() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    store.set("k", "v").unwrap();

    store.remove("k").unwrap();

    assert_that!(store.get("k").unwrap(), none());
}

#[test]
fn given_path_like_key_when_used_then_invalid_key() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    for key in ["", "../escape", "a/b", "a\\b"] {
        let result = store.set(key, "v");
        assert!(
            matches!(result, Err(StoreError::InvalidKey { .. })),
            "key {key:?} should be rejected"
        );
    }
}

#[test]
fn given_missing_record_when_discard_corrupted_then_ok_and_no_backup() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    store.discard_corrupted("k").unwrap();

    assert_that!(std::fs::read_dir(temp.path()).unwrap().count(), eq(0));
}

#[test]
fn given_identity_when_save_to_file_store_then_record_is_plain_json() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    let identity = Identity::new("1", "x@y.com", "X");

    save_identity(&store, &identity).unwrap();

    let on_disk = std::fs::read_to_string(temp.path().join("al_nakhwa_user.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": "1", "email": "x@y.com", "name": "X"})
    );
}

// =============================================================================
// MemoryStore
// =============================================================================

#[test]
fn given_memory_store_when_set_get_remove_then_behaves_like_map() {
    let store = MemoryStore::new();

    store.set(USER_STORAGE_KEY, "v").unwrap();
    assert_that!(store.get(USER_STORAGE_KEY).unwrap(), some(eq("v")));
    assert_that!(store.len(), eq(1));

    store.remove(USER_STORAGE_KEY).unwrap();
    assert!(store.is_empty());
}

// =============================================================================
// StoreError
// =============================================================================

#[test]
fn given_io_errors_when_is_transient_then_true() {
    let io = || std::io::Error::new(std::io::ErrorKind::Other, "test");

    assert!(StoreError::file_read(PathBuf::from("/t"), io()).is_transient());
    assert!(StoreError::file_write(PathBuf::from("/t"), io()).is_transient());
    assert!(StoreError::file_remove(PathBuf::from("/t"), io()).is_transient());
    assert!(
        StoreError::atomic_rename(PathBuf::from("/a"), PathBuf::from("/b"), io()).is_transient()
    );
}

#[test]
fn given_invalid_key_when_is_transient_then_false() {
    assert!(!StoreError::invalid_key("a/b", "separator").is_transient());
}

#[test]
fn given_any_error_when_recovery_hint_then_non_empty() {
    let errors = vec![
        StoreError::invalid_key("k", "bad"),
        StoreError::dir_creation(
            PathBuf::from("/t"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ),
        StoreError::backup_failed(std::io::Error::new(std::io::ErrorKind::Other, "test")),
    ];

    for err in errors {
        assert!(
            !err.recovery_hint().is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_serde_error_when_converted_then_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();

    let store_err: StoreError = json_err.into();

    assert!(matches!(store_err, StoreError::Serialization { .. }));
}
