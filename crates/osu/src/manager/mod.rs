//! Lifecycle of the beatmap card.
//!
//! Same shape as the media and text panels, with three differences: only
//! links inside the chat container count, the panel is not pinnable, and its
//! position is a single page-lifetime coordinate shared by every card rather
//! than session state.

use std::sync::{Arc, Weak};
use std::time::Duration;

use glimpse_panel::{
	BeatmapCard, HideTimer, HostActions, Panel, PanelContent, PanelFactory, PanelPart, Phase, SettingsProvider,
};
use glimpse_primitives::{LinkId, PanelGeometry, PanelKind, Position, PreviewLocation, Rect, Viewport};
use glimpse_worker::{Generation, GenerationClock, TaskClass};
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::api::{BeatmapApi, load_beatmap};
use crate::card::build_card;
use crate::layout::clamp_to_viewport;
use crate::link::BeatmapRef;

/// Fixed card width; the height follows the content.
pub const CARD_WIDTH: f64 = 300.0;

/// Collaborators of the beatmap card manager.
#[derive(Clone)]
pub struct OsuDeps {
	pub settings: Arc<dyn SettingsProvider>,
	pub api: Arc<dyn BeatmapApi>,
	pub factory: Arc<dyn PanelFactory>,
	pub actions: Arc<dyn HostActions>,
}

struct Pending {
	link: LinkId,
	generation: Generation,
}

struct ActiveCard {
	id: u64,
	link: LinkId,
	panel: Box<dyn Panel>,
	geometry: PanelGeometry,
	card: BeatmapCard,
	drag: Option<Position>,
	hide: HideTimer,
}

#[derive(Default)]
struct State {
	pending: Option<Pending>,
	active: Option<ActiveCard>,
	over_link: bool,
	over_panel: bool,
	/// Top-left of the first placed card, then wherever it was last dragged.
	last_position: Option<Position>,
	next_id: u64,
}

struct Shared {
	hide_delay: Duration,
	deps: OsuDeps,
	requests: GenerationClock,
	state: Mutex<State>,
}

/// Owns the single beatmap card.
#[derive(Clone)]
pub struct OsuPanelManager {
	shared: Arc<Shared>,
}

impl std::fmt::Debug for OsuPanelManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("OsuPanelManager").field("phase", &self.phase()).finish_non_exhaustive()
	}
}

impl OsuPanelManager {
	/// Hide delay used when none is configured.
	pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(500);

	pub fn new(hide_delay: Duration, deps: OsuDeps) -> Self {
		Self {
			shared: Arc::new(Shared {
				hide_delay,
				deps,
				requests: GenerationClock::new(),
				state: Mutex::new(State::default()),
			}),
		}
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

	pub fn owner(&self) -> Option<LinkId> {
		self.shared.state.lock().active.as_ref().map(|a| a.link)
	}

	pub fn geometry(&self) -> Option<PanelGeometry> {
		self.shared.state.lock().active.as_ref().map(|a| a.geometry)
	}

	pub fn card(&self) -> Option<BeatmapCard> {
		self.shared.state.lock().active.as_ref().map(|a| a.card.clone())
	}

	/// Position the next card opens at, if one was placed this page lifetime.
	pub fn last_position(&self) -> Option<Position> {
		self.shared.state.lock().last_position
	}

	/// Pointer entered a link. Ignored unless the link is a beatmap link
	/// inside the chat container.
	pub fn hover_enter(
		&self,
		link: LinkId,
		href: &str,
		anchor: Rect,
		in_chat: bool,
		viewport: Viewport,
	) -> Option<JoinHandle<()>> {
		if !in_chat {
			tracing::trace!(%link, "beatmap link outside chat ignored");
			return None;
		}
		let reference = BeatmapRef::parse(href)?;

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
		tracing::debug!(%link, ?reference, generation = generation.get(), "beatmap hover");

		let shared = self.shared.clone();
		Some(glimpse_worker::spawn(TaskClass::Interactive, async move {
			shared.resolve(link, reference, anchor, viewport, generation).await;
		}))
	}

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

	/// Any press except on the close control starts a drag.
	pub fn press(&self, part: PanelPart, pointer: Position) {
		let mut state = self.shared.state.lock();
		if let Some(active) = state.active.as_mut()
			&& part != PanelPart::CloseControl
		{
			active.drag = Some(pointer.offset_from(active.geometry.position()));
		}
	}

	pub fn pointer_move(&self, pointer: Position) {
		let mut state = self.shared.state.lock();
		let Some(active) = state.active.as_mut() else {
			return;
		};
		let Some(offset) = active.drag else {
			return;
		};
		let position = pointer.offset_from(offset);
		active.geometry = active.geometry.with_position(position);
		active.panel.update_geometry(active.geometry);
		state.last_position = Some(position);
	}

	pub fn release(&self) {
		if let Some(active) = self.shared.state.lock().active.as_mut() {
			active.drag = None;
		}
	}

	pub fn close(&self) {
		let mut state = self.shared.state.lock();
		self.shared.teardown(&mut state);
	}

	/// The link element left the document: drops its request or card. The
	/// shared position is kept.
	pub fn link_removed(&self, link: LinkId) {
		let mut state = self.shared.state.lock();
		let tracked = state.active.as_ref().map(|a| a.link).or(state.pending.as_ref().map(|p| p.link));
		if tracked != Some(link) {
			return;
		}
		state.over_link = false;
		self.shared.requests.advance();
		self.shared.teardown(&mut state);
		tracing::debug!(%link, "beatmap link removed");
	}

	/// Forgets the shared position and drops any card, as a page unload does.
	pub fn page_unload(&self) {
		let mut state = self.shared.state.lock();
		self.shared.requests.advance();
		self.shared.teardown(&mut state);
		state.last_position = None;
	}

	/// Opens the set download of the displayed card.
	pub fn open_download(&self) {
		let url = self.shared.state.lock().active.as_ref().and_then(|a| a.card.download_url.clone());
		if let Some(url) = url {
			self.shared.deps.actions.open_url(&url);
		}
	}
}

impl Shared {
	async fn resolve(
		self: Arc<Self>,
		link: LinkId,
		reference: BeatmapRef,
		anchor: Rect,
		viewport: Viewport,
		generation: Generation,
	) {
		let settings = self.deps.settings.get(&[PanelKind::Beatmap]).await;
		if settings.osu != PreviewLocation::Panel {
			self.abandon(generation, "beatmap panel disabled");
			return;
		}

		let (record, meta) = match load_beatmap(self.deps.api.as_ref(), reference).await {
			Ok((_, record, meta)) => (record, meta),
			Err(error) => {
				tracing::warn!(?reference, %error, "failed to load beatmap");
				self.abandon(generation, "beatmap load failed");
				return;
			}
		};
		let api = self.deps.api.clone();
		let card = build_card(&record, &meta, |set| api.download_url(set));
		self.display(link, card, anchor, viewport, generation);
	}

	fn abandon(&self, generation: Generation, reason: &'static str) {
		let mut state = self.state.lock();
		if self.requests.is_current(generation) {
			state.pending = None;
		}
		tracing::debug!(generation = generation.get(), reason, "beatmap request abandoned");
	}

	fn display(self: &Arc<Self>, link: LinkId, card: BeatmapCard, anchor: Rect, viewport: Viewport, generation: Generation) {
		let mut state = self.state.lock();
		if !self.requests.is_current(generation) {
			tracing::debug!(generation = generation.get(), "stale beatmap dropped");
			return;
		}
		state.pending = None;

		let origin = state.last_position.unwrap_or_else(|| anchor.origin());
		let mut panel = self.deps.factory.create(PanelKind::Beatmap, link);
		panel.mount(PanelGeometry::new(origin.x, origin.y, CARD_WIDTH, 0.0), false);
		panel.set_content(PanelContent::Beatmap(card.clone()));

		let size = panel.measure();
		let position = clamp_to_viewport(origin, size, viewport);
		let geometry = PanelGeometry::new(position.x, position.y, size.width, size.height);
		panel.update_geometry(geometry);
		if state.last_position.is_none() {
			state.last_position = Some(position);
		}

		state.next_id += 1;
		state.active = Some(ActiveCard {
			id: state.next_id,
			link,
			panel,
			geometry,
			card,
			drag: None,
			hide: HideTimer::default(),
		});
		tracing::debug!(%link, x = position.x, y = position.y, "beatmap card displayed");
		self.maybe_schedule_hide(&mut state);
	}

	fn maybe_schedule_hide(self: &Arc<Self>, state: &mut State) {
		if state.over_link || state.over_panel {
			return;
		}
		let Some(active) = state.active.as_mut() else {
			return;
		};
		let weak: Weak<Shared> = Arc::downgrade(self);
		let id = active.id;
		active.hide.arm(self.hide_delay, move |timer| {
			if let Some(shared) = weak.upgrade() {
				shared.hide_expired(id, timer);
			}
		});
	}

	fn hide_expired(&self, id: u64, timer: u64) {
		let mut state = self.state.lock();
		let live = state.active.as_mut().is_some_and(|a| a.id == id && a.hide.fire(timer));
		if !live {
			return;
		}
		if let Some(mut active) = state.active.take() {
			active.panel.destroy();
			tracing::debug!(link = %active.link, "beatmap card hidden");
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
