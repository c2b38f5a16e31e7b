use glimpse_panel::PanelPart;
use glimpse_primitives::{Position, Size};

/// Interaction the host observed on a mounted panel.
///
/// The engine consumes every one of these; none should be forwarded to the
/// host page's own handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
	PointerEnter,
	PointerLeave,
	Press { part: PanelPart, pointer: Position },
	Resized(Size),
	TogglePin,
	Close,
	/// Open the previewed url (media click, "open" button, beatmap download).
	Open,
	CopyText,
}
