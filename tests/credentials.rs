use std::fs;

use renaming_rules_sync::SyncError;
use renaming_rules_sync::io::credentials::Credentials;
use tempfile::tempdir;

#[test]
fn loads_id_and_secret() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("credentials.json");
    fs::write(&path, r#"{"id": "abc", "secret": "xyz", "name": "ignored"}"#)
        .expect("credentials written");

    let credentials = Credentials::load(&path).expect("credentials loaded");
    assert_eq!(credentials.id, "abc");
    assert_eq!(credentials.secret, "xyz");
    assert!(!format!("{credentials:?}").contains("xyz"));
}

#[test]
fn rejects_blank_secret() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("credentials.json");
    fs::write(&path, r#"{"id": "abc", "secret": " "}"#).expect("credentials written");

    let error = Credentials::load(&path).expect_err("blank secret");
    assert!(
        matches!(error, SyncError::InvalidCredentials { reason, .. } if reason.contains("secret"))
    );
}

#[test]
fn rejects_malformed_json() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("credentials.json");
    fs::write(&path, "not json").expect("credentials written");

    let error = Credentials::load(&path).expect_err("malformed credentials");
    assert!(matches!(error, SyncError::InvalidCredentials { .. }));
    assert_eq!(error.headline(), "Failed to load credentials");
}

#[test]
fn missing_file_is_reported() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("absent.json");

    assert!(matches!(Credentials::load(&path), Err(SyncError::MissingInput(_))));
}
