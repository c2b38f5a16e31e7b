use serde::Serialize;

/// What a panel body shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelContent {
	/// Placeholder while the body is being fetched.
	Loading,
	Image { url: String },
	Video { url: String },
	Text { url: String, text: String },
	/// Placeholder after a fetch failed.
	Failed { url: String },
	Beatmap(BeatmapCard),
}

/// Colour-coded beatmap status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
	pub label: String,
	/// Ranked and loved maps are shown in the success colour.
	pub highlighted: bool,
}

/// Rendered summary of one osu! beatmap difficulty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeatmapCard {
	pub cover_url: Option<String>,
	pub title: String,
	pub artist: String,
	pub mapper: String,
	pub difficulty: String,
	pub stars: Option<f64>,
	/// `#rrggbb` colour for the star rating.
	pub star_color: String,
	pub status: StatusBadge,
	/// Performance points at 95% accuracy, floored.
	pub pp_95: Option<u32>,
	pub ar: Option<f64>,
	pub cs: Option<f64>,
	pub od: Option<f64>,
	pub hp: Option<f64>,
	pub bpm: Option<f64>,
	/// Mirror download of the whole set, when the set id is known.
	pub download_url: Option<String>,
}
