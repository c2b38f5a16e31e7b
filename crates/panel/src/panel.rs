use glimpse_primitives::{LinkId, PanelGeometry, PanelKind, Size};

use crate::content::PanelContent;

/// A floating overlay as the host renders it.
///
/// The engine drives panels only through this trait. Implementations report
/// user interaction back through the owning manager's event methods.
pub trait Panel: Send {
	/// Inserts the panel into the document at `geometry`.
	fn mount(&mut self, geometry: PanelGeometry, pinned: bool);

	fn update_geometry(&mut self, geometry: PanelGeometry);

	fn set_pinned(&mut self, pinned: bool);

	fn set_content(&mut self, content: PanelContent);

	/// Removes the panel from the document. Called exactly once.
	fn destroy(&mut self);

	/// Rendered size after layout.
	fn measure(&self) -> Size;
}

/// Creates host panels.
pub trait PanelFactory: Send + Sync {
	fn create(&self, kind: PanelKind, owner: LinkId) -> Box<dyn Panel>;
}
