//! Lifecycle of the media and text preview panels.
//!
//! One [`PanelLifecycleManager`] exists per panel kind and owns at most one
//! live panel. Its states are:
//!
//! * `Idle`: nothing tracked.
//! * `Loading`: a link was hovered; settings and classification are in flight.
//! * `Displayed`: a panel is mounted for the tracked link.
//! * `Hiding`: displayed with a hide timer running.
//!
//! Every hover advances a [`GenerationClock`]; async results carry the
//! generation they were started with and are dropped once it is no longer
//! current. Hide timers are [`HideTimer`]s.

mod config;

use std::sync::{Arc, Weak};

use glimpse_primitives::{ContentKind, LinkId, PanelGeometry, PanelKind, Position, PreviewLocation, Rect, Size};
use glimpse_storage::SessionPositionStore;
use glimpse_worker::{Generation, GenerationClock, TaskClass};
use parking_lot::Mutex;
use tokio::task::JoinHandle;

pub use config::ManagerConfig;

use crate::actions::HostActions;
use crate::content::PanelContent;
use crate::hide::HideTimer;
use crate::loader::ContentLoader;
use crate::panel::{Panel, PanelFactory};
use crate::settings::SettingsProvider;

/// Collaborators shared by the panel managers.
#[derive(Clone)]
pub struct ManagerDeps {
	pub settings: Arc<dyn SettingsProvider>,
	pub loader: Arc<dyn ContentLoader>,
	pub factory: Arc<dyn PanelFactory>,
	pub positions: SessionPositionStore,
	pub actions: Arc<dyn HostActions>,
}

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Loading,
	Displayed,
	Hiding,
}

/// Part of a panel a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPart {
	Header,
	PinControl,
	CloseControl,
	Body,
}

struct Pending {
	link: LinkId,
	generation: Generation,
}

struct ActivePanel {
	id: u64,
	link: LinkId,
	href: String,
	panel: Box<dyn Panel>,
	geometry: PanelGeometry,
	pinned: bool,
	/// Body text once loaded, for the copy action.
	text: Option<String>,
	/// Pointer offset from the panel origin while dragging.
	drag: Option<Position>,
	hide: HideTimer,
}

#[derive(Default)]
struct State {
	pending: Option<Pending>,
	active: Option<ActivePanel>,
	over_link: bool,
	over_panel: bool,
	next_panel_id: u64,
}

struct Shared {
	config: ManagerConfig,
	deps: ManagerDeps,
	requests: GenerationClock,
	state: Mutex<State>,
}

/// Owns the single live panel of one kind.
#[derive(Clone)]
pub struct PanelLifecycleManager {
	shared: Arc<Shared>,
}

impl std::fmt::Debug for PanelLifecycleManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PanelLifecycleManager")
			.field("kind", &self.shared.config.kind)
			.field("phase", &self.phase())
			.finish_non_exhaustive()
	}
}

impl PanelLifecycleManager {
	pub fn new(config: ManagerConfig, deps: ManagerDeps) -> Self {
		Self {
			shared: Arc::new(Shared {
				config,
				deps,
				requests: GenerationClock::new(),
				state: Mutex::new(State::default()),
			}),
		}
	}

	pub fn kind(&self) -> PanelKind {
		self.shared.config.kind
	}

	pub fn phase(&self) -> Phase {
		let state = self.shared.state.lock();
		match (&state.active, &state.pending) {
			(Some(active), _) if active.hide.is_armed() => Phase::Hiding,
			(Some(_), _) => Phase::Displayed,
			(None, Some(_)) => Phase::Loading,
			(None, None) => Phase::Idle,
		}
	}

	/// Link owning the displayed panel.
	pub fn owner(&self) -> Option<LinkId> {
		self.shared.state.lock().active.as_ref().map(|a| a.link)
	}

	/// Link being loaded or displayed.
	pub fn tracked_link(&self) -> Option<LinkId> {
		let state = self.shared.state.lock();
		state
			.active
			.as_ref()
			.map(|a| a.link)
			.or_else(|| state.pending.as_ref().map(|p| p.link))
	}

	pub fn geometry(&self) -> Option<PanelGeometry> {
		self.shared.state.lock().active.as_ref().map(|a| a.geometry)
	}

	pub fn is_pinned(&self) -> bool {
		self.shared.state.lock().active.as_ref().is_some_and(|a| a.pinned)
	}

	/// Pointer entered a link carrying this kind's trigger.
	///
	/// Re-entering the owning link of the displayed panel only cancels its
	/// hide timer. Any other link tears the current panel down and starts a
	/// new request; the returned handle completes once that request has been
	/// displayed or discarded.
	pub fn hover_enter(&self, link: LinkId, href: &str, anchor: Rect) -> Option<JoinHandle<()>> {
		let generation = {
			let mut state = self.shared.state.lock();
			state.over_link = true;
			if let Some(active) = state.active.as_mut()
				&& active.link == link
			{
				active.hide.cancel();
				return None;
			}
			self.shared.teardown(&mut state);
			let generation = self.shared.requests.advance();
			state.pending = Some(Pending { link, generation });
			generation
		};
		tracing::debug!(panel = self.kind().as_str(), %link, generation = generation.get(), "hover");

		let shared = self.shared.clone();
		let href = href.to_string();
		Some(glimpse_worker::spawn(TaskClass::Interactive, async move {
			shared.resolve(link, href, anchor, generation).await;
		}))
	}

	/// Pointer left a link carrying this kind's trigger.
	pub fn hover_leave(&self, link: LinkId) {
		let mut state = self.shared.state.lock();
		let tracked = state.active.as_ref().map(|a| a.link).or(state.pending.as_ref().map(|p| p.link));
		if tracked != Some(link) {
			return;
		}
		state.over_link = false;
		self.shared.maybe_schedule_hide(&mut state);
	}

	pub fn panel_enter(&self) {
		let mut state = self.shared.state.lock();
		state.over_panel = true;
		if let Some(active) = state.active.as_mut() {
			active.hide.cancel();
		}
	}

	pub fn panel_leave(&self) {
		let mut state = self.shared.state.lock();
		state.over_panel = false;
		self.shared.maybe_schedule_hide(&mut state);
	}

	/// Pointer pressed on the panel. Only the header starts a drag.
	pub fn press(&self, part: PanelPart, pointer: Position) {
		let mut state = self.shared.state.lock();
		let Some(active) = state.active.as_mut() else {
			return;
		};
		if part == PanelPart::Header {
			active.drag = Some(pointer.offset_from(active.geometry.position()));
		}
	}

	/// Pointer moved anywhere in the document.
	pub fn pointer_move(&self, pointer: Position) {
		let mut state = self.shared.state.lock();
		let Some(active) = state.active.as_mut() else {
			return;
		};
		let Some(offset) = active.drag else {
			return;
		};
		active.geometry = active.geometry.with_position(pointer.offset_from(offset));
		active.panel.update_geometry(active.geometry);
		self.shared.deps.positions.save_geometry(self.kind(), active.geometry);
	}

	pub fn release(&self) {
		if let Some(active) = self.shared.state.lock().active.as_mut() {
			active.drag = None;
		}
	}

	/// The host reported a new rendered size.
	pub fn resized(&self, size: Size) {
		let mut state = self.shared.state.lock();
		let Some(active) = state.active.as_mut() else {
			return;
		};
		let clamped = size.at_least(self.shared.config.min_size);
		active.geometry = active.geometry.with_size(clamped);
		if clamped != size {
			active.panel.update_geometry(active.geometry);
		}
		self.shared.deps.positions.save_geometry(self.kind(), active.geometry);
	}

	pub fn toggle_pin(&self) {
		let mut state = self.shared.state.lock();
		let pointer_away = !state.over_link && !state.over_panel;
		let Some(active) = state.active.as_mut() else {
			return;
		};
		active.pinned = !active.pinned;
		active.panel.set_pinned(active.pinned);
		self.shared.deps.positions.set_pinned(self.kind(), active.pinned);
		tracing::debug!(panel = self.kind().as_str(), pinned = active.pinned, "pin toggled");

		if active.pinned {
			active.hide.cancel();
		} else if pointer_away {
			self.shared.schedule_hide(active);
		}
	}

	/// Explicit close: destroys the panel and clears the pin.
	pub fn close(&self) {
		let mut state = self.shared.state.lock();
		if state.active.is_none() {
			return;
		}
		self.shared.teardown(&mut state);
		self.shared.deps.positions.set_pinned(self.kind(), false);
		tracing::debug!(panel = self.kind().as_str(), "panel closed");
	}

	/// Drops whatever is tracked without touching persisted state.
	pub fn dismiss(&self) {
		let mut state = self.shared.state.lock();
		self.shared.requests.advance();
		self.shared.teardown(&mut state);
	}

	/// The link element left the document. No pointer leave can arrive for
	/// it anymore, so its request or panel is dropped. A pinned panel stays
	/// up but no longer counts the pointer as over the link.
	pub fn link_removed(&self, link: LinkId) {
		let mut state = self.shared.state.lock();
		let tracked = state.active.as_ref().map(|a| a.link).or(state.pending.as_ref().map(|p| p.link));
		if tracked != Some(link) {
			return;
		}
		state.over_link = false;
		if state.active.as_ref().is_some_and(|a| a.pinned) {
			return;
		}
		self.shared.requests.advance();
		self.shared.teardown(&mut state);
		tracing::debug!(panel = self.kind().as_str(), %link, "owning link removed");
	}

	/// Click on the media body opens the url.
	pub fn open_link(&self) {
		let href = self.shared.state.lock().active.as_ref().map(|a| a.href.clone());
		if let Some(href) = href {
			self.shared.deps.actions.open_url(&href);
		}
	}

	/// Copies the loaded body text, if any.
	pub fn copy_text(&self) {
		let text = self.shared.state.lock().active.as_ref().and_then(|a| a.text.clone());
		if let Some(text) = text {
			self.shared.deps.actions.copy_text(&text);
		}
	}
}

impl Shared {
	async fn resolve(self: Arc<Self>, link: LinkId, href: String, anchor: Rect, generation: Generation) {
		let kind = self.config.kind;

		let settings = self.deps.settings.get(&[kind]).await;
		if settings.location(kind) != PreviewLocation::Panel {
			self.abandon(generation, "panel preview disabled");
			return;
		}

		let content = self.deps.loader.classify(&href, kind).await;
		if content.panel_kind() != Some(kind) {
			self.abandon(generation, "not previewable");
			return;
		}

		let Some((panel_id, needs_fetch)) = self.display(link, &href, content, anchor, generation) else {
			return;
		};
		if !needs_fetch {
			return;
		}

		let body = match self.deps.loader.load_text(&href).await {
			Ok(text) => PanelContent::Text { url: href.clone(), text },
			Err(error) => {
				tracing::warn!(url = %href, %error, "failed to load text");
				PanelContent::Failed { url: href.clone() }
			}
		};
		let mut state = self.state.lock();
		match state.active.as_mut() {
			Some(active) if active.id == panel_id => {
				if let PanelContent::Text { text, .. } = &body {
					active.text = Some(text.clone());
				}
				active.panel.set_content(body);
			}
			_ => tracing::debug!(url = %href, "text arrived for a replaced panel"),
		}
	}

	fn abandon(&self, generation: Generation, reason: &'static str) {
		let mut state = self.state.lock();
		if self.requests.is_current(generation) {
			state.pending = None;
		}
		tracing::debug!(panel = self.config.kind.as_str(), generation = generation.get(), reason, "request abandoned");
	}

	/// Mounts the panel for a still-current request. Returns the panel id and
	/// whether its text body still has to be fetched.
	fn display(
		self: &Arc<Self>,
		link: LinkId,
		href: &str,
		content: ContentKind,
		anchor: Rect,
		generation: Generation,
	) -> Option<(u64, bool)> {
		let kind = self.config.kind;
		let mut state = self.state.lock();
		if !self.requests.is_current(generation) {
			tracing::debug!(panel = kind.as_str(), generation = generation.get(), "stale classification dropped");
			return None;
		}
		state.pending = None;

		let geometry = self
			.deps
			.positions
			.geometry(kind)
			.map(|g| g.with_size(g.size().at_least(self.config.min_size)))
			.unwrap_or_else(|| PanelGeometry::anchored_below(anchor, self.config.default_size));
		let pinned = self.deps.positions.pinned(kind);

		let (body, text, needs_fetch) = match content {
			ContentKind::Image => (PanelContent::Image { url: href.to_string() }, None, false),
			ContentKind::Video => (PanelContent::Video { url: href.to_string() }, None, false),
			_ => match self.deps.loader.cached_text(href) {
				Some(text) => (
					PanelContent::Text {
						url: href.to_string(),
						text: text.clone(),
					},
					Some(text),
					false,
				),
				None => (PanelContent::Loading, None, true),
			},
		};

		let mut panel = self.deps.factory.create(kind, link);
		panel.mount(geometry, pinned);
		panel.set_content(body);

		state.next_panel_id += 1;
		let id = state.next_panel_id;
		state.active = Some(ActivePanel {
			id,
			link,
			href: href.to_string(),
			panel,
			geometry,
			pinned,
			text,
			drag: None,
			hide: HideTimer::default(),
		});
		tracing::debug!(panel = kind.as_str(), %link, ?content, pinned, "panel displayed");

		self.maybe_schedule_hide(&mut state);
		Some((id, needs_fetch))
	}

	fn maybe_schedule_hide(self: &Arc<Self>, state: &mut State) {
		if state.over_link || state.over_panel {
			return;
		}
		if let Some(active) = state.active.as_mut()
			&& !active.pinned
		{
			self.schedule_hide(active);
		}
	}

	fn schedule_hide(self: &Arc<Self>, active: &mut ActivePanel) {
		let weak: Weak<Shared> = Arc::downgrade(self);
		let panel_id = active.id;
		active.hide.arm(self.config.hide_delay, move |timer| {
			if let Some(shared) = weak.upgrade() {
				shared.hide_expired(panel_id, timer);
			}
		});
	}

	fn hide_expired(&self, panel_id: u64, timer: u64) {
		let mut state = self.state.lock();
		let live = state
			.active
			.as_mut()
			.is_some_and(|a| a.id == panel_id && a.hide.fire(timer));
		if !live {
			return;
		}
		if let Some(mut active) = state.active.take() {
			active.panel.destroy();
			tracing::debug!(panel = self.config.kind.as_str(), link = %active.link, "panel hidden");
		}
		state.over_link = false;
		state.over_panel = false;
	}

	fn teardown(&self, state: &mut State) {
		state.pending = None;
		state.over_panel = false;
		if let Some(mut active) = state.active.take() {
			active.hide.cancel();
			active.panel.destroy();
		}
	}
}
