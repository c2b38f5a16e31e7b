//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glimpse_storage::{CacheConfig, DEFAULT_CAPACITY};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
	pub cache: CacheSection,
	pub panels: PanelSection,
	pub network: NetworkSection,
	pub store: StoreSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSection {
	/// Entries kept per cache namespace.
	pub capacity: usize,
	/// Entries older than this many seconds are treated as missing.
	pub max_age_secs: Option<u64>,
}

impl Default for CacheSection {
	fn default() -> Self {
		Self {
			capacity: DEFAULT_CAPACITY,
			max_age_secs: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelSection {
	pub media_hide_delay_ms: u64,
	pub text_hide_delay_ms: u64,
	pub osu_hide_delay_ms: u64,
}

impl Default for PanelSection {
	fn default() -> Self {
		Self {
			media_hide_delay_ms: 1000,
			text_hide_delay_ms: 1000,
			osu_hide_delay_ms: 500,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkSection {
	/// Base url of the beatmap mirror.
	pub beatmap_base_url: String,
	/// Per-request timeout for probes, text fetches and beatmap lookups.
	pub timeout_ms: u64,
}

impl Default for NetworkSection {
	fn default() -> Self {
		Self {
			beatmap_base_url: glimpse_osu::DEFAULT_BASE_URL.to_string(),
			timeout_ms: 10_000,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
	/// Directory of the durable key-value store.
	pub dir: PathBuf,
}

impl Default for StoreSection {
	fn default() -> Self {
		Self {
			dir: PathBuf::from(".glimpse"),
		}
	}
}

impl EngineConfig {
	/// Reads and parses a TOML configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "engine config loaded");
		Ok(config)
	}

	pub fn cache_config(&self) -> CacheConfig {
		CacheConfig {
			capacity: self.cache.capacity,
			max_age: self.cache.max_age_secs.map(Duration::from_secs),
		}
	}

	pub fn media_hide_delay(&self) -> Duration {
		Duration::from_millis(self.panels.media_hide_delay_ms)
	}

	pub fn text_hide_delay(&self) -> Duration {
		Duration::from_millis(self.panels.text_hide_delay_ms)
	}

	pub fn osu_hide_delay(&self) -> Duration {
		Duration::from_millis(self.panels.osu_hide_delay_ms)
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.network.timeout_ms)
	}
}
