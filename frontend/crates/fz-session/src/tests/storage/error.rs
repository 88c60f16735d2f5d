use crate::StorageError;

use std::path::PathBuf;

#[test]
fn given_file_read_error_when_recovery_hint_then_mentions_locking() {
    let err = StorageError::file_read(
        PathBuf::from("/test"),
        std::io::Error::new(std::io::ErrorKind::Other, "test"),
    );
    assert!(err.recovery_hint().contains("locked"));
}

#[test]
fn given_atomic_rename_error_when_recovery_hint_then_points_at_disk() {
    let err = StorageError::atomic_rename(
        PathBuf::from("/from"),
        PathBuf::from("/to"),
        std::io::Error::new(std::io::ErrorKind::Other, "test"),
    );
    assert!(err.recovery_hint().contains("disk space"));
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        StorageError::invalid_key("bad key"),
        StorageError::dir_creation(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ),
        StorageError::file_write(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::Other, "test"),
        ),
        StorageError::file_remove(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::Other, "test"),
        ),
    ];

    for err in errors {
        let hint = err.recovery_hint();
        assert!(
            !hint.is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_serialization_error_when_from_serde_json_then_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let storage_err: StorageError = json_err.into();

    match storage_err {
        StorageError::Serialization { .. } => {}
        _ => panic!("Expected Serialization variant"),
    }
}
