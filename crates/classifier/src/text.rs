use std::sync::Arc;

use glimpse_storage::{CacheConfig, CacheStore, KeyValueStore};

use crate::error::{FetchError, FetchResult};
use crate::fetch::TextFetcher;
use crate::{TEXT_CONTENT_NAMESPACE, rules};

/// Full bodies of text links, cached in their own namespace.
pub struct TextContent {
	cache: CacheStore<String>,
	fetcher: Arc<dyn TextFetcher>,
}

impl std::fmt::Debug for TextContent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TextContent").field("cache", &self.cache).finish_non_exhaustive()
	}
}

impl TextContent {
	pub fn new(durable: Arc<dyn KeyValueStore>, cache: CacheConfig, fetcher: Arc<dyn TextFetcher>) -> Self {
		Self {
			cache: CacheStore::open(durable, TEXT_CONTENT_NAMESPACE, cache),
			fetcher,
		}
	}

	pub fn cached(&self, href: &str) -> Option<String> {
		self.cache.get(href)
	}

	/// Fetches `href` and caches the body on success. Failures are not cached.
	pub async fn load(&self, href: &str) -> FetchResult<String> {
		let url = rules::parse(href).ok_or_else(|| FetchError::InvalidUrl(href.to_string()))?;
		let text = self.fetcher.fetch_text(&url).await?;
		self.cache.put(href, text.clone());
		Ok(text)
	}

	/// Cached body if present, otherwise [`TextContent::load`].
	pub async fn get_or_load(&self, href: &str) -> FetchResult<String> {
		match self.cached(href) {
			Some(text) => Ok(text),
			None => self.load(href).await,
		}
	}
}
