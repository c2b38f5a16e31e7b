//! Session-scoped panel layout and pin state, one slot per panel kind.

use std::sync::Arc;

use glimpse_primitives::{PanelGeometry, PanelKind};

use crate::kv::KeyValueStore;

/// Per-kind geometry and pin flag over a session key-value store.
#[derive(Clone)]
pub struct SessionPositionStore {
	backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionPositionStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionPositionStore").finish_non_exhaustive()
	}
}

fn geometry_key(kind: PanelKind) -> String {
	format!("glimpse_{}_panel_state", kind.as_str())
}

fn pinned_key(kind: PanelKind) -> String {
	format!("glimpse_{}_pinned", kind.as_str())
}

impl SessionPositionStore {
	pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
		Self { backend }
	}

	/// Last saved geometry for `kind`, or `None` if none was ever saved or the
	/// stored value is unreadable.
	pub fn geometry(&self, kind: PanelKind) -> Option<PanelGeometry> {
		let key = geometry_key(kind);
		let raw = match self.backend.get(&key) {
			Ok(raw) => raw?,
			Err(error) => {
				tracing::warn!(panel = kind.as_str(), %error, "failed to load panel state");
				return None;
			}
		};
		match serde_json::from_str(&raw) {
			Ok(geometry) => Some(geometry),
			Err(error) => {
				tracing::warn!(panel = kind.as_str(), %error, "corrupt panel state ignored");
				None
			}
		}
	}

	pub fn save_geometry(&self, kind: PanelKind, geometry: PanelGeometry) {
		let key = geometry_key(kind);
		let raw = match serde_json::to_string(&geometry) {
			Ok(raw) => raw,
			Err(error) => {
				tracing::warn!(panel = kind.as_str(), %error, "failed to encode panel state");
				return;
			}
		};
		if let Err(error) = self.backend.set(&key, &raw) {
			tracing::warn!(panel = kind.as_str(), %error, "failed to save panel state");
		}
	}

	/// Stored pin flag; anything but an explicit `true` reads as unpinned.
	pub fn pinned(&self, kind: PanelKind) -> bool {
		match self.backend.get(&pinned_key(kind)) {
			Ok(raw) => raw.as_deref() == Some("true"),
			Err(error) => {
				tracing::warn!(panel = kind.as_str(), %error, "failed to load pin state");
				false
			}
		}
	}

	pub fn set_pinned(&self, kind: PanelKind, pinned: bool) {
		let value = if pinned { "true" } else { "false" };
		if let Err(error) = self.backend.set(&pinned_key(kind), value) {
			tracing::warn!(panel = kind.as_str(), %error, "failed to save pin state");
		}
	}
}
