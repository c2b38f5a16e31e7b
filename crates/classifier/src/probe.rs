use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, RANGE};
use url::Url;

/// Active check of what a url serves, used when no syntactic rule matches.
#[async_trait]
pub trait Prober: Send + Sync {
	/// Returns true if the resource loads as an image.
	async fn probe_image(&self, url: &Url) -> bool;

	/// Returns true if the resource's metadata loads as a video.
	async fn probe_video(&self, url: &Url) -> bool;
}

/// Probes over HTTP by inspecting status and `Content-Type`.
#[derive(Debug, Clone)]
pub struct HttpProber {
	client: Client,
	timeout: Duration,
}

impl HttpProber {
	pub fn new(client: Client, timeout: Duration) -> Self {
		Self { client, timeout }
	}

	async fn content_type(&self, url: &Url, ranged: bool) -> Option<String> {
		let mut request = self.client.get(url.clone()).timeout(self.timeout);
		if ranged {
			// Only the first byte: enough for headers, like a metadata-only load.
			request = request.header(RANGE, "bytes=0-0");
		}
		let response = match request.send().await {
			Ok(response) => response,
			Err(error) => {
				tracing::debug!(url = %url, %error, "probe request failed");
				return None;
			}
		};
		if !response.status().is_success() {
			tracing::debug!(url = %url, status = %response.status(), "probe rejected");
			return None;
		}
		response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(|v| v.trim().to_ascii_lowercase())
	}
}

#[async_trait]
impl Prober for HttpProber {
	async fn probe_image(&self, url: &Url) -> bool {
		self.content_type(url, false).await.is_some_and(|ct| ct.starts_with("image/"))
	}

	async fn probe_video(&self, url: &Url) -> bool {
		self.content_type(url, true).await.is_some_and(|ct| ct.starts_with("video/"))
	}
}
