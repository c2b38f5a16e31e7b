use serde::{Deserialize, Serialize};

/// Resolved content type of a linked resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
	Image,
	Video,
	Text,
	/// Not previewable. Stored as a negative cache entry and never re-probed.
	Other,
}

impl ContentKind {
	/// Returns true for kinds rendered by the media preview panel.
	pub const fn is_media(self) -> bool {
		matches!(self, Self::Image | Self::Video)
	}

	/// Returns true for anything other than [`ContentKind::Other`].
	pub const fn is_previewable(self) -> bool {
		!matches!(self, Self::Other)
	}

	/// Panel kind that renders this content, if any.
	pub const fn panel_kind(self) -> Option<PanelKind> {
		match self {
			Self::Image | Self::Video => Some(PanelKind::Media),
			Self::Text => Some(PanelKind::Text),
			Self::Other => None,
		}
	}
}

/// Kind of floating panel. Each kind has independent lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
	/// Image and video previews.
	Media,
	/// Plain-text file previews.
	Text,
	/// osu! beatmap info card.
	Beatmap,
}

impl PanelKind {
	/// Stable lowercase name, used in storage keys and log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Media => "image",
			Self::Text => "text",
			Self::Beatmap => "osu",
		}
	}

	/// Settings key that selects where this kind of preview is shown.
	pub const fn settings_key(self) -> &'static str {
		match self {
			Self::Media => "imageLocation",
			Self::Text => "textLocation",
			Self::Beatmap => "osuLocation",
		}
	}

	/// Header title shown by the panel.
	pub const fn title(self) -> &'static str {
		match self {
			Self::Media => "Media Preview",
			Self::Text => "Text Preview",
			Self::Beatmap => "osu! Beatmap",
		}
	}
}
