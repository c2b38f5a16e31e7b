use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use glimpse_primitives::{LinkId, PanelKind};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Attached {
	next_token: AtomicU64,
	triggers: Mutex<HashMap<(LinkId, PanelKind), u64>>,
}

/// Which links currently carry a hover trigger, and for which panel kind.
///
/// Pointer events for links without a trigger are ignored by the engine.
#[derive(Debug, Default, Clone)]
pub struct TriggerRegistry {
	inner: Arc<Attached>,
}

impl TriggerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches a `kind` trigger to `link`, replacing any previous one.
	pub fn attach(&self, link: LinkId, kind: PanelKind) -> TriggerSubscription {
		let token = self.inner.next_token.fetch_add(1, Ordering::Relaxed);
		if self.inner.triggers.lock().insert((link, kind), token).is_some() {
			tracing::debug!(%link, panel = kind.as_str(), "trigger replaced");
		}
		TriggerSubscription {
			registry: Arc::downgrade(&self.inner),
			link,
			kind,
			token,
		}
	}

	pub fn is_attached(&self, link: LinkId, kind: PanelKind) -> bool {
		self.inner.triggers.lock().contains_key(&(link, kind))
	}

	/// Panel kinds with a trigger on `link`.
	pub fn kinds_for(&self, link: LinkId) -> Vec<PanelKind> {
		let mut kinds: Vec<_> = self
			.inner
			.triggers
			.lock()
			.keys()
			.filter(|(l, _)| *l == link)
			.map(|(_, k)| *k)
			.collect();
		kinds.sort_by_key(|k| k.as_str());
		kinds
	}

	pub fn len(&self) -> usize {
		self.inner.triggers.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.triggers.lock().is_empty()
	}
}

/// A live hover trigger. Dropping it detaches the trigger.
#[derive(Debug)]
#[must_use = "dropping a subscription detaches its trigger"]
pub struct TriggerSubscription {
	registry: Weak<Attached>,
	link: LinkId,
	kind: PanelKind,
	token: u64,
}

impl TriggerSubscription {
	pub fn link(&self) -> LinkId {
		self.link
	}

	pub fn kind(&self) -> PanelKind {
		self.kind
	}

	/// Detaches the trigger now.
	pub fn cancel(self) {
		drop(self);
	}
}

impl Drop for TriggerSubscription {
	fn drop(&mut self) {
		let Some(registry) = self.registry.upgrade() else {
			return;
		};
		let mut triggers = registry.triggers.lock();
		// A newer subscription for the same slot owns it now.
		if triggers.get(&(self.link, self.kind)) == Some(&self.token) {
			triggers.remove(&(self.link, self.kind));
		}
	}
}
