//! The assembled preview engine.
//!
//! [`Engine`] consumes the mutation feed, decides per link whether it gets a
//! hover trigger or an inline embed, and routes host pointer and panel events
//! to the three panel managers. Entry points return nothing: every failure is
//! logged and ends in a degraded but safe state.

mod feed;

use std::collections::HashMap;
use std::sync::Arc;

use glimpse_classifier::{HttpProber, HttpTextFetcher, LinkClassifier, Prober, TextContent, TextFetcher};
use glimpse_feed::{ProcessedLinks, TriggerRegistry, TriggerSubscription};
use glimpse_osu::{BeatmapApi, CatboyApi, OsuDeps, OsuPanelManager};
use glimpse_panel::{
	ClassifierLoader, HostActions, ManagerConfig, ManagerDeps, PanelFactory, PanelLifecycleManager, SettingsProvider,
};
use glimpse_primitives::{LinkId, PanelKind, Position, Rect, Viewport};
use glimpse_storage::{FileStore, KeyValueStore, SessionPositionStore};
use parking_lot::Mutex;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::PanelAction;
use crate::inline::{InlineEmbed, InlineEmbedder};

/// Capabilities the host page provides.
#[derive(Clone)]
pub struct EngineHost {
	pub settings: Arc<dyn SettingsProvider>,
	pub factory: Arc<dyn PanelFactory>,
	pub embedder: Arc<dyn InlineEmbedder>,
	pub actions: Arc<dyn HostActions>,
	/// Session-scoped store for panel geometry and pin state.
	pub session: Arc<dyn KeyValueStore>,
}

/// Storage and network backends.
#[derive(Clone)]
pub struct EngineServices {
	pub durable: Arc<dyn KeyValueStore>,
	pub prober: Arc<dyn Prober>,
	pub text_fetcher: Arc<dyn TextFetcher>,
	pub beatmaps: Arc<dyn BeatmapApi>,
}

impl EngineServices {
	/// HTTP-backed services sharing one client, with a file store under
	/// the configured directory.
	pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
		let client = reqwest::Client::new();
		let timeout = config.timeout();
		let beatmaps = CatboyApi::new(client.clone(), &config.network.beatmap_base_url, timeout)?;
		Ok(Self {
			durable: Arc::new(FileStore::new(config.store.dir.clone())),
			prober: Arc::new(HttpProber::new(client.clone(), timeout)),
			text_fetcher: Arc::new(HttpTextFetcher::new(client, timeout)),
			beatmaps: Arc::new(beatmaps),
		})
	}
}

/// A link that received at least one hover trigger.
struct TrackedLink {
	href: String,
	in_chat: bool,
	_triggers: Vec<TriggerSubscription>,
}

struct Inner {
	settings: Arc<dyn SettingsProvider>,
	classifier: Arc<LinkClassifier>,
	text: Arc<TextContent>,
	embedder: Arc<dyn InlineEmbedder>,
	actions: Arc<dyn HostActions>,
	media: PanelLifecycleManager,
	text_panel: PanelLifecycleManager,
	osu: OsuPanelManager,
	processed: ProcessedLinks,
	triggers: TriggerRegistry,
	links: Mutex<HashMap<LinkId, TrackedLink>>,
	embedded: Mutex<HashMap<LinkId, InlineEmbed>>,
}

/// Hover preview engine for one page.
#[derive(Clone)]
pub struct Engine {
	inner: Arc<Inner>,
}

impl std::fmt::Debug for Engine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Engine")
			.field("processed", &self.inner.processed.len())
			.field("triggers", &self.inner.triggers.len())
			.finish_non_exhaustive()
	}
}

impl Engine {
	pub fn new(config: &EngineConfig, host: EngineHost, services: EngineServices) -> Self {
		let cache = config.cache_config();
		let classifier = Arc::new(LinkClassifier::new(services.durable.clone(), cache, services.prober));
		let text = Arc::new(TextContent::new(services.durable, cache, services.text_fetcher));

		let deps = ManagerDeps {
			settings: host.settings.clone(),
			loader: Arc::new(ClassifierLoader::new(classifier.clone(), text.clone())),
			factory: host.factory.clone(),
			positions: SessionPositionStore::new(host.session),
			actions: host.actions.clone(),
		};
		let media = PanelLifecycleManager::new(
			ManagerConfig::media().with_hide_delay(config.media_hide_delay()),
			deps.clone(),
		);
		let text_panel = PanelLifecycleManager::new(ManagerConfig::text().with_hide_delay(config.text_hide_delay()), deps);
		let osu = OsuPanelManager::new(
			config.osu_hide_delay(),
			OsuDeps {
				settings: host.settings.clone(),
				api: services.beatmaps,
				factory: host.factory,
				actions: host.actions.clone(),
			},
		);

		Self {
			inner: Arc::new(Inner {
				settings: host.settings,
				classifier,
				text,
				embedder: host.embedder,
				actions: host.actions,
				media,
				text_panel,
				osu,
				processed: ProcessedLinks::new(),
				triggers: TriggerRegistry::new(),
				links: Mutex::new(HashMap::new()),
				embedded: Mutex::new(HashMap::new()),
			}),
		}
	}

	pub fn media_panel(&self) -> &PanelLifecycleManager {
		&self.inner.media
	}

	pub fn text_panel(&self) -> &PanelLifecycleManager {
		&self.inner.text_panel
	}

	pub fn osu_panel(&self) -> &OsuPanelManager {
		&self.inner.osu
	}

	/// Panel kinds with a hover trigger on `link`.
	pub fn triggers_for(&self, link: LinkId) -> Vec<PanelKind> {
		self.inner.triggers.kinds_for(link)
	}

	/// Inline replacement made for `link`, if any.
	pub fn embedded(&self, link: LinkId) -> Option<InlineEmbed> {
		self.inner.embedded.lock().get(&link).cloned()
	}

	/// Pointer entered a link element.
	pub fn hover_enter(&self, link: LinkId, anchor: Rect, viewport: Viewport) {
		let Some((href, in_chat)) = self.inner.links.lock().get(&link).map(|t| (t.href.clone(), t.in_chat)) else {
			return;
		};
		for kind in self.inner.triggers.kinds_for(link) {
			tracing::trace!(%link, ?kind, "hover trigger");
			match kind {
				PanelKind::Media => drop(self.inner.media.hover_enter(link, &href, anchor)),
				PanelKind::Text => drop(self.inner.text_panel.hover_enter(link, &href, anchor)),
				PanelKind::Beatmap => drop(self.inner.osu.hover_enter(link, &href, anchor, in_chat, viewport)),
			}
		}
	}

	/// Pointer left a link element.
	pub fn hover_leave(&self, link: LinkId) {
		self.inner.media.hover_leave(link);
		self.inner.text_panel.hover_leave(link);
		self.inner.osu.hover_leave(link);
	}

	/// Routes an interaction on the panel of `kind`.
	pub fn panel_event(&self, kind: PanelKind, action: PanelAction) {
		match kind {
			PanelKind::Media => route_to_panel(&self.inner.media, action),
			PanelKind::Text => route_to_panel(&self.inner.text_panel, action),
			PanelKind::Beatmap => route_to_osu(&self.inner.osu, action),
		}
	}

	/// Document-level pointer move; continues any drag in progress.
	pub fn pointer_move(&self, pointer: Position) {
		self.inner.media.pointer_move(pointer);
		self.inner.text_panel.pointer_move(pointer);
		self.inner.osu.pointer_move(pointer);
	}

	/// Document-level pointer release; ends any drag in progress.
	pub fn pointer_release(&self) {
		self.inner.media.release();
		self.inner.text_panel.release();
		self.inner.osu.release();
	}

	/// Click on inline content: opens its url.
	pub fn inline_open(&self, link: LinkId) {
		let url = self.inner.embedded.lock().get(&link).map(|e| e.url().to_string());
		if let Some(url) = url {
			self.inner.actions.open_url(&url);
		}
	}

	/// Copy button of an inline text block.
	pub fn inline_copy(&self, link: LinkId) {
		let text = match self.inner.embedded.lock().get(&link) {
			Some(InlineEmbed::Text { text, .. }) => text.clone(),
			_ => return,
		};
		self.inner.actions.copy_text(&text);
	}

	/// The page is going away: drop every panel and forget the beatmap
	/// card position. Pin state stays in the session store.
	pub fn page_unload(&self) {
		self.inner.media.dismiss();
		self.inner.text_panel.dismiss();
		self.inner.osu.page_unload();
		tracing::debug!("page unloaded");
	}
}

fn route_to_panel(manager: &PanelLifecycleManager, action: PanelAction) {
	match action {
		PanelAction::PointerEnter => manager.panel_enter(),
		PanelAction::PointerLeave => manager.panel_leave(),
		PanelAction::Press { part, pointer } => manager.press(part, pointer),
		PanelAction::Resized(size) => manager.resized(size),
		PanelAction::TogglePin => manager.toggle_pin(),
		PanelAction::Close => manager.close(),
		PanelAction::Open => manager.open_link(),
		PanelAction::CopyText => manager.copy_text(),
	}
}

fn route_to_osu(manager: &OsuPanelManager, action: PanelAction) {
	match action {
		PanelAction::PointerEnter => manager.panel_enter(),
		PanelAction::PointerLeave => manager.panel_leave(),
		PanelAction::Press { part, pointer } => manager.press(part, pointer),
		PanelAction::Close => manager.close(),
		PanelAction::Open => manager.open_download(),
		PanelAction::Resized(_) | PanelAction::TogglePin | PanelAction::CopyText => {
			tracing::trace!(?action, "beatmap card ignores action");
		}
	}
}

