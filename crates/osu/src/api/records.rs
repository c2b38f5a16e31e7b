//! Response shapes of the beatmap mirror. Every field the card does not
//! strictly need is optional so partial records still render.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `GET /api/v2/s/{set}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRecord {
	#[serde(default, deserialize_with = "null_as_default")]
	pub beatmaps: Vec<SetBeatmap>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetBeatmap {
	pub id: u64,
}

/// `GET /api/v2/b/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeatmapRecord {
	pub version: Option<String>,
	pub status: Option<String>,
	pub bpm: Option<f64>,
	pub beatmapset_id: Option<u64>,
	pub set: Option<BeatmapSetInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeatmapSetInfo {
	pub title: Option<String>,
	pub artist: Option<String>,
	pub creator: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub covers: HashMap<String, String>,
}

/// `GET /api/meta/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeatmapMeta {
	pub difficulty: Option<Difficulty>,
	/// Performance keyed by accuracy percentage ("95", "98", ...).
	#[serde(default, deserialize_with = "null_as_default")]
	pub pp: HashMap<String, Option<PpEntry>>,
	pub map: Option<MapStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Difficulty {
	pub stars: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PpEntry {
	pub pp: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapStats {
	pub ar: Option<f64>,
	pub cs: Option<f64>,
	pub od: Option<f64>,
	pub hp: Option<f64>,
}
