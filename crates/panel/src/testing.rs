//! Recording panel and host doubles for tests.

use std::sync::Arc;

use glimpse_primitives::{LinkId, PanelGeometry, PanelKind, Size};
use parking_lot::Mutex;

use crate::actions::HostActions;
use crate::content::PanelContent;
use crate::panel::{Panel, PanelFactory};

/// One call made on a recorded panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelCall {
	Mount { geometry: PanelGeometry, pinned: bool },
	Geometry(PanelGeometry),
	Pinned(bool),
	Content(PanelContent),
	Destroy,
}

/// Everything done to one panel, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPanel {
	pub kind: PanelKind,
	pub owner: LinkId,
	pub calls: Vec<PanelCall>,
}

impl RecordedPanel {
	pub fn is_live(&self) -> bool {
		let mounted = self.calls.iter().any(|c| matches!(c, PanelCall::Mount { .. }));
		mounted && !self.calls.contains(&PanelCall::Destroy)
	}

	/// Last geometry set through `mount` or `update_geometry`.
	pub fn geometry(&self) -> Option<PanelGeometry> {
		self.calls.iter().rev().find_map(|c| match c {
			PanelCall::Mount { geometry, .. } | PanelCall::Geometry(geometry) => Some(*geometry),
			_ => None,
		})
	}

	pub fn pinned(&self) -> Option<bool> {
		self.calls.iter().rev().find_map(|c| match c {
			PanelCall::Mount { pinned, .. } | PanelCall::Pinned(pinned) => Some(*pinned),
			_ => None,
		})
	}

	pub fn content(&self) -> Option<&PanelContent> {
		self.calls.iter().rev().find_map(|c| match c {
			PanelCall::Content(content) => Some(content),
			_ => None,
		})
	}

	pub fn destroy_count(&self) -> usize {
		self.calls.iter().filter(|c| **c == PanelCall::Destroy).count()
	}
}

/// Factory whose panels record every call into a shared log.
#[derive(Debug, Clone)]
pub struct RecordingFactory {
	panels: Arc<Mutex<Vec<RecordedPanel>>>,
	measure: Size,
}

impl Default for RecordingFactory {
	fn default() -> Self {
		Self::new(Size::new(320.0, 240.0))
	}
}

impl RecordingFactory {
	/// Panels report `measure` as their rendered size.
	pub fn new(measure: Size) -> Self {
		Self {
			panels: Arc::default(),
			measure,
		}
	}

	pub fn panels(&self) -> Vec<RecordedPanel> {
		self.panels.lock().clone()
	}

	pub fn created(&self) -> usize {
		self.panels.lock().len()
	}

	/// Panels of `kind` that are mounted and not destroyed.
	pub fn live(&self, kind: PanelKind) -> Vec<RecordedPanel> {
		self.panels
			.lock()
			.iter()
			.filter(|p| p.kind == kind && p.is_live())
			.cloned()
			.collect()
	}

	pub fn last(&self) -> Option<RecordedPanel> {
		self.panels.lock().last().cloned()
	}
}

impl PanelFactory for RecordingFactory {
	fn create(&self, kind: PanelKind, owner: LinkId) -> Box<dyn Panel> {
		let mut panels = self.panels.lock();
		panels.push(RecordedPanel {
			kind,
			owner,
			calls: Vec::new(),
		});
		Box::new(RecordingPanel {
			index: panels.len() - 1,
			panels: self.panels.clone(),
			measure: self.measure,
		})
	}
}

struct RecordingPanel {
	index: usize,
	panels: Arc<Mutex<Vec<RecordedPanel>>>,
	measure: Size,
}

impl RecordingPanel {
	fn record(&self, call: PanelCall) {
		self.panels.lock()[self.index].calls.push(call);
	}
}

impl Panel for RecordingPanel {
	fn mount(&mut self, geometry: PanelGeometry, pinned: bool) {
		self.record(PanelCall::Mount { geometry, pinned });
	}

	fn update_geometry(&mut self, geometry: PanelGeometry) {
		self.record(PanelCall::Geometry(geometry));
	}

	fn set_pinned(&mut self, pinned: bool) {
		self.record(PanelCall::Pinned(pinned));
	}

	fn set_content(&mut self, content: PanelContent) {
		self.record(PanelCall::Content(content));
	}

	fn destroy(&mut self) {
		self.record(PanelCall::Destroy);
	}

	fn measure(&self) -> Size {
		self.measure
	}
}

/// Host actions that remember what they were asked to do.
#[derive(Debug, Default)]
pub struct RecordingActions {
	pub copied: Mutex<Vec<String>>,
	pub opened: Mutex<Vec<String>>,
}

impl HostActions for RecordingActions {
	fn copy_text(&self, text: &str) {
		self.copied.lock().push(text.to_string());
	}

	fn open_url(&self, url: &str) {
		self.opened.lock().push(url.to_string());
	}
}
