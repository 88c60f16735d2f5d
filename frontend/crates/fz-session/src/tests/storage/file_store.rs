use crate::{FileStore, SessionStore, StorageError, TOKEN_KEY, USER_KEY};

use tempfile::TempDir;

#[test]
fn given_missing_dir_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("session"));
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn given_missing_dir_when_set_then_dir_created_and_value_readable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("session");
    let mut store = FileStore::new(&dir);

    store.set(TOKEN_KEY, "t1").unwrap();

    assert!(dir.join(TOKEN_KEY).is_file());
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("t1"));
}

#[test]
fn given_set_when_complete_then_no_temp_files_left() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path());

    store.set(USER_KEY, r#"{"id":"1"}"#).unwrap();

    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![USER_KEY.to_string()]);
}

#[test]
fn given_existing_value_when_set_then_overwritten() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path());

    store.set(TOKEN_KEY, "old").unwrap();
    store.set(TOKEN_KEY, "new").unwrap();

    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("new"));
}

#[test]
fn given_value_when_remove_then_file_gone() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path());
    store.set(TOKEN_KEY, "t1").unwrap();

    store.remove(TOKEN_KEY).unwrap();

    assert!(!temp.path().join(TOKEN_KEY).exists());
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn given_missing_key_when_remove_then_ok() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path());
    assert!(store.remove(USER_KEY).is_ok());
}

#[test]
fn given_path_traversal_key_when_set_then_invalid_key() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path());

    let result = store.set("../escape", "x");

    match result {
        Err(StorageError::InvalidKey { key, .. }) => assert_eq!(key, "../escape"),
        other => panic!("Expected InvalidKey, got {other:?}"),
    }
}

#[test]
fn given_empty_key_when_get_then_invalid_key() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    assert!(matches!(
        store.get(""),
        Err(StorageError::InvalidKey { .. })
    ));
}

#[test]
fn given_two_stores_on_same_dir_when_set_then_visible_to_both() {
    let temp = TempDir::new().unwrap();
    let mut writer = FileStore::new(temp.path());
    let reader = FileStore::new(temp.path());

    writer.set(USER_KEY, "cached").unwrap();

    assert_eq!(reader.get(USER_KEY).unwrap().as_deref(), Some("cached"));
}
