use serde::{Deserialize, Serialize};

/// Where a kind of preview is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewLocation {
	/// Embedded inline in the chat, replacing the link.
	Chat,
	/// Floating hover panel.
	Panel,
	#[default]
	Disabled,
}

impl PreviewLocation {
	/// Parses a stored settings value. Unknown values disable the preview.
	pub fn parse(value: &str) -> Self {
		match value {
			"chat" => Self::Chat,
			"panel" => Self::Panel,
			_ => Self::Disabled,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Chat => "chat",
			Self::Panel => "panel",
			Self::Disabled => "disabled",
		}
	}
}
