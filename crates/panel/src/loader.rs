use std::sync::Arc;

use async_trait::async_trait;
use glimpse_classifier::{ClassifyScope, FetchResult, LinkClassifier, TextContent};
use glimpse_primitives::{ContentKind, PanelKind};

/// Everything a panel manager needs to know about, and load from, a link.
#[async_trait]
pub trait ContentLoader: Send + Sync {
	/// Classifies `href` for a panel of `kind`.
	async fn classify(&self, href: &str, kind: PanelKind) -> ContentKind;

	fn cached_text(&self, href: &str) -> Option<String>;

	async fn load_text(&self, href: &str) -> FetchResult<String>;
}

/// [`ContentLoader`] over the link classifier and the text content service.
#[derive(Debug, Clone)]
pub struct ClassifierLoader {
	classifier: Arc<LinkClassifier>,
	text: Arc<TextContent>,
}

impl ClassifierLoader {
	pub fn new(classifier: Arc<LinkClassifier>, text: Arc<TextContent>) -> Self {
		Self { classifier, text }
	}
}

fn scope_for(kind: PanelKind) -> ClassifyScope {
	match kind {
		PanelKind::Text => ClassifyScope::Text,
		PanelKind::Media | PanelKind::Beatmap => ClassifyScope::Media,
	}
}

#[async_trait]
impl ContentLoader for ClassifierLoader {
	async fn classify(&self, href: &str, kind: PanelKind) -> ContentKind {
		self.classifier.classify(href, scope_for(kind)).await
	}

	fn cached_text(&self, href: &str) -> Option<String> {
		self.text.cached(href)
	}

	async fn load_text(&self, href: &str) -> FetchResult<String> {
		self.text.load(href).await
	}
}
