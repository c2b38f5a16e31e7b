//! User preferences selecting where each kind of preview appears.

use std::sync::Arc;

use async_trait::async_trait;
use glimpse_primitives::{PanelKind, PreviewLocation};
use glimpse_storage::KeyValueStore;
use parking_lot::Mutex;

/// Preview location per panel kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
	pub image: PreviewLocation,
	pub text: PreviewLocation,
	pub osu: PreviewLocation,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			image: PreviewLocation::Chat,
			text: PreviewLocation::Chat,
			osu: PreviewLocation::Panel,
		}
	}
}

impl Settings {
	pub fn location(&self, kind: PanelKind) -> PreviewLocation {
		match kind {
			PanelKind::Media => self.image,
			PanelKind::Text => self.text,
			PanelKind::Beatmap => self.osu,
		}
	}

	pub fn set(&mut self, kind: PanelKind, location: PreviewLocation) {
		match kind {
			PanelKind::Media => self.image = location,
			PanelKind::Text => self.text = location,
			PanelKind::Beatmap => self.osu = location,
		}
	}

	/// Returns a copy with `kind` set to `location`.
	pub fn with(mut self, kind: PanelKind, location: PreviewLocation) -> Self {
		self.set(kind, location);
		self
	}
}

/// Asynchronous settings lookup.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
	/// Reads the locations for `kinds`. Kinds not requested, or with nothing
	/// stored, keep their defaults.
	async fn get(&self, kinds: &[PanelKind]) -> Settings;
}

/// Settings read from a key-value store under their `*Location` keys.
pub struct StoredSettings {
	backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for StoredSettings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StoredSettings").finish_non_exhaustive()
	}
}

impl StoredSettings {
	pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
		Self { backend }
	}

	/// Stores `location` for `kind`. Failures are logged.
	pub fn store(&self, kind: PanelKind, location: PreviewLocation) {
		if let Err(error) = self.backend.set(kind.settings_key(), location.as_str()) {
			tracing::warn!(key = kind.settings_key(), %error, "failed to store setting");
		}
	}

	fn read(&self, kind: PanelKind) -> Option<PreviewLocation> {
		match self.backend.get(kind.settings_key()) {
			// Accept both bare and JSON-quoted values.
			Ok(raw) => raw.map(|raw| PreviewLocation::parse(raw.trim().trim_matches('"'))),
			Err(error) => {
				tracing::warn!(key = kind.settings_key(), %error, "failed to read setting");
				None
			}
		}
	}
}

#[async_trait]
impl SettingsProvider for StoredSettings {
	async fn get(&self, kinds: &[PanelKind]) -> Settings {
		let mut settings = Settings::default();
		for &kind in kinds {
			if let Some(location) = self.read(kind) {
				settings.set(kind, location);
			}
		}
		settings
	}
}

/// In-memory settings, changed directly by the embedder.
#[derive(Debug, Default)]
pub struct FixedSettings {
	settings: Mutex<Settings>,
}

impl FixedSettings {
	pub fn new(settings: Settings) -> Self {
		Self {
			settings: Mutex::new(settings),
		}
	}

	pub fn set(&self, kind: PanelKind, location: PreviewLocation) {
		self.settings.lock().set(kind, location);
	}
}

#[async_trait]
impl SettingsProvider for FixedSettings {
	async fn get(&self, _kinds: &[PanelKind]) -> Settings {
		*self.settings.lock()
	}
}
