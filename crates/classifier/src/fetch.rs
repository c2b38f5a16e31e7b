use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{FetchError, FetchResult};

/// Loads the body of a text link.
#[async_trait]
pub trait TextFetcher: Send + Sync {
	async fn fetch_text(&self, url: &Url) -> FetchResult<String>;
}

/// Plain HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpTextFetcher {
	client: Client,
	timeout: Duration,
}

impl HttpTextFetcher {
	pub fn new(client: Client, timeout: Duration) -> Self {
		Self { client, timeout }
	}
}

#[async_trait]
impl TextFetcher for HttpTextFetcher {
	async fn fetch_text(&self, url: &Url) -> FetchResult<String> {
		let response = self
			.client
			.get(url.clone())
			.timeout(self.timeout)
			.send()
			.await
			.map_err(|e| FetchError::Network(e.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}

		response.text().await.map_err(|e| FetchError::Body(e.to_string()))
	}
}
