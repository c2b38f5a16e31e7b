//! String-keyed value stores.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{Result, StorageError};

/// A string-keyed store of serialized records.
///
/// Implementations must be cheap to call from the UI path; every operation
/// completes synchronously.
pub trait KeyValueStore: Send + Sync {
	/// Returns the raw value for `key`, or `None` if it was never set.
	fn get(&self, key: &str) -> Result<Option<String>>;

	/// Replaces the value for `key`.
	fn set(&self, key: &str, value: &str) -> Result<()>;

	/// Deletes `key`. Removing a missing key is not an error.
	fn remove(&self, key: &str) -> Result<()>;
}

/// Session-scoped store: lives as long as the value itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
	values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.values.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.lock().is_empty()
	}

	/// Drops every value, as closing the tab would.
	pub fn clear(&self) {
		self.values.lock().clear();
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		Ok(self.values.lock().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		self.values.lock().insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<()> {
		self.values.lock().remove(key);
		Ok(())
	}
}

/// Durable store keeping one `<key>.json` file per key under a directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
	dir: PathBuf,
}

impl FileStore {
	/// Creates a store rooted at `dir`. The directory is created lazily on
	/// first write.
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	fn path_for(&self, key: &str) -> Result<PathBuf> {
		let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) && !key.starts_with('.');
		if !valid {
			return Err(StorageError::InvalidKey(key.to_string()));
		}
		Ok(self.dir.join(format!("{key}.json")))
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		let path = self.path_for(key)?;
		match std::fs::read_to_string(&path) {
			Ok(raw) => Ok(Some(raw)),
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(error) => Err(StorageError::Io { path, error }),
		}
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		let path = self.path_for(key)?;
		let io_err = |error| StorageError::Io { path: path.clone(), error };

		std::fs::create_dir_all(&self.dir).map_err(io_err)?;
		let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
		tmp.write_all(value.as_bytes()).map_err(io_err)?;
		tmp.persist(&path).map_err(|e| io_err(e.error))?;
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<()> {
		let path = self.path_for(key)?;
		match std::fs::remove_file(&path) {
			Ok(()) => Ok(()),
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(error) => Err(StorageError::Io { path, error }),
		}
	}
}

#[cfg(test)]
mod tests;
