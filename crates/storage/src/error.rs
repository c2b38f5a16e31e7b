//! Error types for storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by key-value backends and record (de)serialization.
///
/// Callers inside the engine never propagate these; they log and fall back to
/// empty or default state.
#[derive(Debug, Error)]
pub enum StorageError {
	/// Reading or writing a backing file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// File backing the key.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A key contains characters that cannot be mapped to a file name.
	#[error("invalid storage key: {0:?}")]
	InvalidKey(String),

	/// A stored value could not be decoded.
	#[error("corrupt value for {key}: {error}")]
	Corrupt {
		/// Key whose value failed to decode.
		key: String,
		/// The decode error.
		error: serde_json::Error,
	},

	/// A value could not be encoded.
	#[error("failed to encode value for {key}: {error}")]
	Encode {
		/// Key being written.
		key: String,
		/// The encode error.
		error: serde_json::Error,
	},
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
