use glimpse_osu::OsuError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures while assembling an engine. Once running, the engine never fails.
#[derive(Debug, Error)]
pub enum EngineError {
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error("beatmap service: {0}")]
	Beatmaps(#[from] OsuError),
}
