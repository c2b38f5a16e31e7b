//! Bounded, insertion-ordered cache namespaces over a durable store.
//!
//! Each namespace is persisted as one JSON object under its own key. Entries
//! keep the position of their first insertion; overwriting a key refreshes its
//! value and timestamp but not its place in line. Reads never promote an
//! entry, so eviction is strictly oldest-inserted-first.

use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Number of entries a namespace keeps before evicting.
pub const DEFAULT_CAPACITY: usize = 200;

/// Limits applied to a cache namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
	/// Maximum number of entries retained after each put.
	pub capacity: usize,
	/// Entries older than this are ignored on read. `None` keeps entries
	/// until they are evicted.
	pub max_age: Option<Duration>,
}

impl Default for CacheConfig {
	fn default() -> Self {
		Self {
			capacity: DEFAULT_CAPACITY,
			max_age: None,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Stamped<E> {
	value: E,
	#[serde(default)]
	stored_at: u64,
}

/// One cache namespace holding values of type `E` keyed by url.
pub struct CacheStore<E> {
	namespace: String,
	config: CacheConfig,
	backend: Arc<dyn KeyValueStore>,
	entries: Mutex<IndexMap<String, Stamped<E>>>,
}

impl<E> std::fmt::Debug for CacheStore<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CacheStore")
			.field("namespace", &self.namespace)
			.field("config", &self.config)
			.field("len", &self.entries.lock().len())
			.finish()
	}
}

impl<E> CacheStore<E>
where
	E: Clone + Serialize + DeserializeOwned,
{
	/// Opens the namespace, loading whatever the backend holds for it.
	///
	/// Missing, unreadable or corrupt data yields an empty cache.
	pub fn open(backend: Arc<dyn KeyValueStore>, namespace: impl Into<String>, config: CacheConfig) -> Self {
		let namespace = namespace.into();
		let entries = load_namespace(backend.as_ref(), &namespace);
		Self {
			namespace,
			config,
			backend,
			entries: Mutex::new(entries),
		}
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Returns the cached value for `key` unless it is missing or expired.
	pub fn get(&self, key: &str) -> Option<E> {
		self.get_at(key, now_millis())
	}

	pub(crate) fn get_at(&self, key: &str, now_ms: u64) -> Option<E> {
		let entries = self.entries.lock();
		let entry = entries.get(key)?;
		if let Some(max_age) = self.config.max_age {
			let age = now_ms.saturating_sub(entry.stored_at);
			if u128::from(age) > max_age.as_millis() {
				return None;
			}
		}
		Some(entry.value.clone())
	}

	/// Stores `value` under `key`, evicts the oldest surplus entries and
	/// writes the namespace back to the backend.
	pub fn put(&self, key: impl Into<String>, value: E) {
		self.put_at(key.into(), value, now_millis());
	}

	pub(crate) fn put_at(&self, key: String, value: E, now_ms: u64) {
		let mut entries = self.entries.lock();
		entries.insert(key, Stamped { value, stored_at: now_ms });

		let surplus = entries.len().saturating_sub(self.config.capacity);
		if surplus > 0 {
			entries.drain(..surplus);
			tracing::debug!(namespace = %self.namespace, evicted = surplus, "cache eviction");
		}

		// Persist under the lock so concurrent puts cannot interleave a stale
		// snapshot over a newer one.
		match serde_json::to_string(&*entries) {
			Ok(raw) => {
				if let Err(error) = self.backend.set(&self.namespace, &raw) {
					tracing::warn!(namespace = %self.namespace, %error, "failed to persist cache");
				}
			}
			Err(error) => tracing::warn!(namespace = %self.namespace, %error, "failed to encode cache"),
		}
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.lock().contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	/// Keys in insertion order, oldest first.
	pub fn keys(&self) -> Vec<String> {
		self.entries.lock().keys().cloned().collect()
	}
}

fn load_namespace<E: DeserializeOwned>(backend: &dyn KeyValueStore, namespace: &str) -> IndexMap<String, Stamped<E>> {
	let raw = match backend.get(namespace) {
		Ok(Some(raw)) => raw,
		Ok(None) => return IndexMap::new(),
		Err(error) => {
			tracing::warn!(%namespace, %error, "failed to read cache, starting empty");
			return IndexMap::new();
		}
	};
	match serde_json::from_str(&raw) {
		Ok(entries) => entries,
		Err(error) => {
			tracing::warn!(%namespace, %error, "corrupt cache, starting empty");
			IndexMap::new()
		}
	}
}

fn now_millis() -> u64 {
	web_time::SystemTime::now()
		.duration_since(web_time::UNIX_EPOCH)
		.map(|d| d.as_millis() as u64)
		.unwrap_or_default()
}

#[cfg(test)]
mod tests;
