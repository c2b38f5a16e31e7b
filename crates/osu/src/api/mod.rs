//! Beatmap mirror client.

mod records;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

pub use records::{BeatmapMeta, BeatmapRecord, BeatmapSetInfo, Difficulty, MapStats, PpEntry, SetBeatmap, SetRecord};

use crate::error::{OsuError, OsuResult};
use crate::link::BeatmapRef;

/// Default mirror serving beatmap records and downloads.
pub const DEFAULT_BASE_URL: &str = "https://catboy.best";

/// Read access to beatmap data.
#[async_trait]
pub trait BeatmapApi: Send + Sync {
	/// Id of the first difficulty listed for `set`.
	async fn first_beatmap(&self, set: u64) -> OsuResult<u64>;

	async fn beatmap(&self, id: u64) -> OsuResult<BeatmapRecord>;

	async fn meta(&self, id: u64) -> OsuResult<BeatmapMeta>;

	/// Download link for a beatmap set.
	fn download_url(&self, set: u64) -> String;
}

/// Resolves `reference` and fetches its record and meta in parallel.
///
/// Either request failing fails the whole load.
pub async fn load_beatmap(api: &dyn BeatmapApi, reference: BeatmapRef) -> OsuResult<(u64, BeatmapRecord, BeatmapMeta)> {
	let id = match reference {
		BeatmapRef::Beatmap(id) => id,
		BeatmapRef::Set(set) => api.first_beatmap(set).await?,
	};
	let (record, meta) = futures::try_join!(api.beatmap(id), api.meta(id))?;
	Ok((id, record, meta))
}

/// HTTP client for a catboy.best compatible mirror.
#[derive(Debug, Clone)]
pub struct CatboyApi {
	client: Client,
	base: Url,
	timeout: Duration,
}

impl CatboyApi {
	pub fn new(client: Client, base_url: &str, timeout: Duration) -> OsuResult<Self> {
		let base = Url::parse(base_url).map_err(|e| OsuError::InvalidBaseUrl {
			url: base_url.to_string(),
			reason: e.to_string(),
		})?;
		if base.cannot_be_a_base() {
			return Err(OsuError::InvalidBaseUrl {
				url: base_url.to_string(),
				reason: "not a base url".to_string(),
			});
		}
		Ok(Self { client, base, timeout })
	}

	fn endpoint(&self, path: &str) -> Url {
		let mut url = self.base.clone();
		let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
		url.set_path(&joined);
		url
	}

	async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, path: &str) -> OsuResult<T> {
		let url = self.endpoint(path);
		tracing::debug!(url = %url, endpoint, "beatmap request");
		let response = self
			.client
			.get(url)
			.timeout(self.timeout)
			.send()
			.await
			.map_err(|e| OsuError::Network(e.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(OsuError::Status {
				endpoint,
				status: status.as_u16(),
			});
		}

		response.json::<T>().await.map_err(|e| OsuError::Decode {
			endpoint,
			reason: e.to_string(),
		})
	}
}

#[async_trait]
impl BeatmapApi for CatboyApi {
	async fn first_beatmap(&self, set: u64) -> OsuResult<u64> {
		let record: SetRecord = self.get_json("set", &format!("api/v2/s/{set}")).await?;
		record.beatmaps.first().map(|b| b.id).ok_or(OsuError::EmptySet(set))
	}

	async fn beatmap(&self, id: u64) -> OsuResult<BeatmapRecord> {
		self.get_json("beatmap", &format!("api/v2/b/{id}")).await
	}

	async fn meta(&self, id: u64) -> OsuResult<BeatmapMeta> {
		self.get_json("meta", &format!("api/meta/{id}")).await
	}

	fn download_url(&self, set: u64) -> String {
		self.endpoint(&format!("d/{set}")).to_string()
	}
}
