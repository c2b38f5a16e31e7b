//! Syntactic url rules: fast, offline classification by file extension.

use std::sync::LazyLock;

use glimpse_primitives::ContentKind;
use regex::Regex;
use url::Url;

static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^https?://.+\.(?:jpg|jpeg|png|gif|webp|bmp|svg|ico|tiff|tif|avif|jxl|apng)(?:\?.*)?$")
		.expect("image url pattern")
});

static VIDEO_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.(?:mp4|webm|mov|m4v|avi|mkv)(?:\?.*)?$").expect("video path pattern"));

static TEXT_PATH: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"(?i)\.(?:txt|log|js|json|xml|html|htm|css|csv|md|yml|yaml|ini|toml|py|cpp|c|java|ts|tsv|sql|sh|bash|bat|ps1|cfg|conf|rtf|tex|org)(?:\?.*)?$",
	)
	.expect("text path pattern")
});

/// Parses an href. Anything the url parser rejects is not previewable.
pub fn parse(href: &str) -> Option<Url> {
	Url::parse(href).ok()
}

/// Image check against the full serialized url, video check against the path.
pub fn media_kind(url: &Url) -> Option<ContentKind> {
	if IMAGE_URL.is_match(url.as_str()) {
		Some(ContentKind::Image)
	} else if VIDEO_PATH.is_match(url.path()) {
		Some(ContentKind::Video)
	} else {
		None
	}
}

/// Text-file check against the path.
pub fn text_kind(url: &Url) -> Option<ContentKind> {
	TEXT_PATH.is_match(url.path()).then_some(ContentKind::Text)
}

/// Full syntactic classification: image, then video, then text.
pub fn syntactic_kind(url: &Url) -> Option<ContentKind> {
	media_kind(url).or_else(|| text_kind(url))
}

/// Convenience for callers holding a raw href.
pub fn is_media_href(href: &str) -> bool {
	parse(href).as_ref().and_then(media_kind).is_some()
}

/// Convenience for callers holding a raw href.
pub fn is_text_href(href: &str) -> bool {
	parse(href).as_ref().and_then(text_kind).is_some()
}
