use thiserror::Error;

/// Failure loading beatmap data.
#[derive(Debug, Error)]
pub enum OsuError {
	#[error("invalid beatmap API base url {url}: {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	#[error("network error: {0}")]
	Network(String),

	#[error("{endpoint} returned HTTP {status}")]
	Status { endpoint: &'static str, status: u16 },

	#[error("failed to decode {endpoint} response: {reason}")]
	Decode { endpoint: &'static str, reason: String },

	/// The set lookup succeeded but listed no difficulties.
	#[error("beatmap set {0} has no beatmaps")]
	EmptySet(u64),
}

pub type OsuResult<T> = std::result::Result<T, OsuError>;
