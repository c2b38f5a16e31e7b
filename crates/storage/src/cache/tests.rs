use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::kv::MemoryStore;

fn open(backend: &Arc<MemoryStore>, capacity: usize) -> CacheStore<u32> {
	CacheStore::open(backend.clone(), "test_ns", CacheConfig { capacity, max_age: None })
}

#[test]
fn evicts_oldest_inserted_first() {
	let backend = Arc::new(MemoryStore::new());
	let cache = open(&backend, 3);
	for (i, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
		cache.put(key, i as u32);
	}
	assert_eq!(cache.keys(), vec!["c", "d", "e"]);
	assert_eq!(cache.get("a"), None);
	assert_eq!(cache.get("e"), Some(4));
}

#[test]
fn reads_do_not_promote_entries() {
	let backend = Arc::new(MemoryStore::new());
	let cache = open(&backend, 2);
	cache.put("a", 1);
	cache.put("b", 2);
	assert_eq!(cache.get("a"), Some(1));
	cache.put("c", 3);
	assert_eq!(cache.keys(), vec!["b", "c"]);
}

#[test]
fn overwrite_keeps_insertion_position() {
	let backend = Arc::new(MemoryStore::new());
	let cache = open(&backend, 2);
	cache.put("a", 1);
	cache.put("b", 2);
	cache.put("a", 10);
	assert_eq!(cache.keys(), vec!["a", "b"]);
	assert_eq!(cache.get("a"), Some(10));

	cache.put("c", 3);
	assert_eq!(cache.keys(), vec!["b", "c"]);
}

#[test]
fn entries_survive_reopen_in_order() {
	let backend = Arc::new(MemoryStore::new());
	{
		let cache = open(&backend, 200);
		cache.put("x", 1);
		cache.put("y", 2);
	}
	let reopened = open(&backend, 200);
	assert_eq!(reopened.keys(), vec!["x", "y"]);
	assert_eq!(reopened.get("y"), Some(2));
}

#[test]
fn corrupt_backend_value_yields_empty_cache() {
	let backend = Arc::new(MemoryStore::new());
	backend.set("test_ns", "{not json").unwrap();
	let cache = open(&backend, 200);
	assert!(cache.is_empty());

	cache.put("k", 7);
	assert_eq!(open(&backend, 200).get("k"), Some(7));
}

#[test]
fn wrong_shape_yields_empty_cache() {
	let backend = Arc::new(MemoryStore::new());
	backend.set("test_ns", r#"{"k":{"value":"not a number"}}"#).unwrap();
	assert!(open(&backend, 200).is_empty());
}

#[test]
fn expired_entries_are_ignored() {
	let backend = Arc::new(MemoryStore::new());
	let cache: CacheStore<u32> = CacheStore::open(
		backend,
		"test_ns",
		CacheConfig {
			capacity: 10,
			max_age: Some(Duration::from_secs(60)),
		},
	);
	cache.put_at("k".into(), 1, 1_000);
	assert_eq!(cache.get_at("k", 1_000 + 60_000), Some(1));
	assert_eq!(cache.get_at("k", 1_000 + 60_001), None);
}

#[test]
fn namespaces_are_independent() {
	let backend = Arc::new(MemoryStore::new());
	let media: CacheStore<u32> = CacheStore::open(backend.clone(), "media", CacheConfig::default());
	let text: CacheStore<u32> = CacheStore::open(backend.clone(), "text", CacheConfig::default());
	media.put("https://x/a", 1);
	assert_eq!(text.get("https://x/a"), None);
	assert!(backend.get("media").unwrap().is_some());
	assert!(backend.get("text").unwrap().is_none());
}

proptest! {
	#[test]
	fn prop_never_exceeds_capacity_and_keeps_newest(keys in proptest::collection::vec(0u16..400, 0..600)) {
		let backend = Arc::new(MemoryStore::new());
		let cache = open(&backend, DEFAULT_CAPACITY);

		let mut expected: IndexMap<String, ()> = IndexMap::new();
		for key in &keys {
			let key = key.to_string();
			cache.put(key.clone(), 0);
			expected.insert(key, ());
			let surplus = expected.len().saturating_sub(DEFAULT_CAPACITY);
			expected.drain(..surplus);
			prop_assert!(cache.len() <= DEFAULT_CAPACITY);
		}

		let expected: Vec<String> = expected.into_keys().collect();
		prop_assert_eq!(cache.keys(), expected);
	}
}
