use std::collections::HashMap;
use std::sync::Arc;

use glimpse_primitives::ContentKind;
use glimpse_storage::{CacheConfig, CacheStore, KeyValueStore};
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use url::Url;

use crate::probe::Prober;
use crate::{MEDIA_KIND_NAMESPACE, TEXT_KIND_NAMESPACE, rules};

/// Which question a classification answers, and so which cache it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifyScope {
	/// Image or video; unmatched urls are probed.
	Media,
	/// Text files; unmatched urls are `Other` without probing.
	Text,
}

/// Resolves a link's [`ContentKind`]: cache, then syntactic rules, then a
/// probe for the media scope.
pub struct LinkClassifier {
	media: CacheStore<ContentKind>,
	text: CacheStore<ContentKind>,
	prober: Arc<dyn Prober>,
	probes: Mutex<HashMap<String, Arc<OnceCell<ContentKind>>>>,
}

impl std::fmt::Debug for LinkClassifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LinkClassifier")
			.field("media", &self.media)
			.field("text", &self.text)
			.field("probes_in_flight", &self.probes.lock().len())
			.finish_non_exhaustive()
	}
}

impl LinkClassifier {
	pub fn new(durable: Arc<dyn KeyValueStore>, cache: CacheConfig, prober: Arc<dyn Prober>) -> Self {
		Self {
			media: CacheStore::open(durable.clone(), MEDIA_KIND_NAMESPACE, cache),
			text: CacheStore::open(durable, TEXT_KIND_NAMESPACE, cache),
			prober,
			probes: Mutex::new(HashMap::new()),
		}
	}

	fn cache(&self, scope: ClassifyScope) -> &CacheStore<ContentKind> {
		match scope {
			ClassifyScope::Media => &self.media,
			ClassifyScope::Text => &self.text,
		}
	}

	/// Classifies `href` within `scope`. Never fails: malformed urls and
	/// failed probes are `Other`.
	pub async fn classify(&self, href: &str, scope: ClassifyScope) -> ContentKind {
		let Some(url) = rules::parse(href) else {
			tracing::debug!(href, "malformed url, not previewable");
			return ContentKind::Other;
		};

		let cache = self.cache(scope);
		if let Some(kind) = cache.get(href) {
			return kind;
		}

		if let Some(kind) = rules::syntactic_kind(&url) {
			cache.put(href, kind);
			return kind;
		}

		match scope {
			ClassifyScope::Text => {
				cache.put(href, ContentKind::Other);
				ContentKind::Other
			}
			ClassifyScope::Media => self.probe_once(href, &url).await,
		}
	}

	/// Probes `url` at most once, however many callers race on it.
	async fn probe_once(&self, href: &str, url: &Url) -> ContentKind {
		let cell = {
			let mut probes = self.probes.lock();
			// A probe that finished between our cache miss and this lock has
			// already written its result.
			if let Some(kind) = self.media.get(href) {
				return kind;
			}
			probes.entry(href.to_string()).or_default().clone()
		};

		*cell
			.get_or_init(|| async {
				let kind = probe(self.prober.as_ref(), url).await;
				tracing::debug!(url = %url, ?kind, "probe resolved");
				self.media.put(href, kind);
				self.probes.lock().remove(href);
				kind
			})
			.await
	}

	pub fn cached(&self, href: &str, scope: ClassifyScope) -> Option<ContentKind> {
		self.cache(scope).get(href)
	}
}

async fn probe(prober: &dyn Prober, url: &Url) -> ContentKind {
	if prober.probe_image(url).await {
		ContentKind::Image
	} else if prober.probe_video(url).await {
		ContentKind::Video
	} else {
		ContentKind::Other
	}
}

#[cfg(test)]
mod tests;
