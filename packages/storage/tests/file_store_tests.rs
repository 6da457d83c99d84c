// ABOUTME: Integration tests for file-backed slot storage
// ABOUTME: Verifies persistence across instances and JSON helpers against real files

use pretty_assertions::assert_eq;
use taglist_storage::{read_json, write_json, FileStore, KeyValueStore, StorageError};
use tempfile::TempDir;

#[test]
fn test_value_survives_new_instance() {
    let temp_dir = TempDir::new().unwrap();

    let mut writer = FileStore::new(temp_dir.path());
    writer.set("tagList", r#"[{"id":"work","name":"work"}]"#).unwrap();

    let reader = FileStore::new(temp_dir.path());
    assert_eq!(
        reader.get("tagList").unwrap().as_deref(),
        Some(r#"[{"id":"work","name":"work"}]"#)
    );
}

#[test]
fn test_keys_are_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileStore::new(temp_dir.path());

    store.set("tagList", "[]").unwrap();

    assert!(store.get("other").unwrap().is_none());
}

#[test]
fn test_json_helpers_write_readable_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileStore::new(temp_dir.path());
    let names = vec!["work".to_string(), "life".to_string()];

    write_json(&mut store, "names", &names).unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("names.json")).unwrap();
    assert!(raw.contains('\n'));
    let loaded: Option<Vec<String>> = read_json(&store, "names").unwrap();
    assert_eq!(loaded, Some(names));
}

#[test]
fn test_set_rejects_invalid_key() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileStore::new(temp_dir.path());

    let result = store.set("a/b", "[]");

    assert!(matches!(result, Err(StorageError::InvalidKey(_))));
}

#[test]
fn test_unreadable_slot_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the slot file should be
    std::fs::create_dir(temp_dir.path().join("tagList.json")).unwrap();
    let store = FileStore::new(temp_dir.path());

    assert!(matches!(store.get("tagList"), Err(StorageError::Io(_))));
}
