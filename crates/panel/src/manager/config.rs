use std::time::Duration;

use glimpse_primitives::{PanelKind, Size};

/// Timing and sizing of one panel kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerConfig {
	pub kind: PanelKind,
	/// Delay between leaving the panel and its link, and the panel closing.
	pub hide_delay: Duration,
	/// Size used when no geometry was saved this session.
	pub default_size: Size,
	/// Resize notifications are clamped to this.
	pub min_size: Size,
}

impl ManagerConfig {
	pub const fn media() -> Self {
		Self {
			kind: PanelKind::Media,
			hide_delay: Duration::from_millis(1000),
			default_size: Size::new(320.0, 240.0),
			min_size: Size::new(200.0, 150.0),
		}
	}

	pub const fn text() -> Self {
		Self {
			kind: PanelKind::Text,
			hide_delay: Duration::from_millis(1000),
			default_size: Size::new(320.0, 320.0),
			min_size: Size::new(200.0, 200.0),
		}
	}

	pub const fn with_hide_delay(mut self, delay: Duration) -> Self {
		self.hide_delay = delay;
		self
	}
}
