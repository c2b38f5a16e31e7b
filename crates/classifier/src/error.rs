use thiserror::Error;

/// Failure fetching a linked resource.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The href is not an absolute url.
	#[error("invalid url: {0}")]
	InvalidUrl(String),

	/// The request could not be sent or the connection failed.
	#[error("network error: {0}")]
	Network(String),

	/// The server answered with a non-success status.
	#[error("HTTP {0}")]
	Status(u16),

	/// The response body could not be read or decoded.
	#[error("invalid response body: {0}")]
	Body(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
