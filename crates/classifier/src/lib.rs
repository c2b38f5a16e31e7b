//! Decides whether a link is previewable and what it points at.
//!
//! Resolution order is cache, then syntactic rules, then (for media only) an
//! active probe. Results are written back to a per-scope cache namespace, and
//! `Other` is a permanent negative entry.
//!
//! The [`TextContent`] service loads and caches the full body of text links.

mod classifier;
mod error;
mod fetch;
mod probe;
pub mod rules;
mod text;

pub use classifier::{ClassifyScope, LinkClassifier};
pub use error::{FetchError, FetchResult};
pub use fetch::{HttpTextFetcher, TextFetcher};
pub use probe::{HttpProber, Prober};
pub use text::TextContent;

/// Cache namespace for media-scope classifications.
pub const MEDIA_KIND_NAMESPACE: &str = "glimpse_media_kind_cache_v1";
/// Cache namespace for text-scope classifications.
pub const TEXT_KIND_NAMESPACE: &str = "glimpse_text_kind_cache_v1";
/// Cache namespace for fetched text bodies.
pub const TEXT_CONTENT_NAMESPACE: &str = "glimpse_text_content_cache_v1";
