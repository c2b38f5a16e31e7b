use super::*;

#[test]
fn memory_store_set_get_remove() {
	let store = MemoryStore::new();
	assert_eq!(store.get("a").unwrap(), None);

	store.set("a", "1").unwrap();
	store.set("a", "2").unwrap();
	assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
	assert_eq!(store.len(), 1);

	store.remove("a").unwrap();
	store.remove("a").unwrap();
	assert!(store.is_empty());
}

#[test]
fn file_store_survives_reopen() {
	let dir = tempfile::tempdir().unwrap();
	let store = FileStore::new(dir.path().join("nested"));
	store.set("glimpse_media_kind_cache_v1", r#"{"a":1}"#).unwrap();

	let reopened = FileStore::new(dir.path().join("nested"));
	assert_eq!(reopened.get("glimpse_media_kind_cache_v1").unwrap().as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn file_store_missing_key_is_none() {
	let dir = tempfile::tempdir().unwrap();
	let store = FileStore::new(dir.path());
	assert_eq!(store.get("absent").unwrap(), None);
	store.remove("absent").unwrap();
}

#[test]
fn file_store_rejects_path_like_keys() {
	let dir = tempfile::tempdir().unwrap();
	let store = FileStore::new(dir.path());
	assert!(matches!(store.set("../escape", "x"), Err(StorageError::InvalidKey(_))));
	assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
	assert!(matches!(store.get(".hidden"), Err(StorageError::InvalidKey(_))));
}
