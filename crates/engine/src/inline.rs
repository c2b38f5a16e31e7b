use glimpse_primitives::LinkId;

/// Replacement rendered in place of a chat link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEmbed {
	Image { url: String },
	Video { url: String },
	Text { url: String, text: String },
}

impl InlineEmbed {
	pub fn url(&self) -> &str {
		match self {
			Self::Image { url } | Self::Video { url } | Self::Text { url, .. } => url,
		}
	}
}

/// Host capability that swaps a link element for inline content.
pub trait InlineEmbedder: Send + Sync {
	fn embed(&self, link: LinkId, embed: InlineEmbed);
}

/// Embedder for hosts without an inline surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInline;

impl InlineEmbedder for NoInline {
	fn embed(&self, link: LinkId, embed: InlineEmbed) {
		tracing::debug!(%link, url = embed.url(), "inline embed dropped");
	}
}
