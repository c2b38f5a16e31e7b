use std::sync::LazyLock;

use regex::Regex;

static BEATMAP: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^https://osu\.ppy\.sh/beatmaps/(\d+)").expect("beatmap url pattern"));

static SET_WITH_BEATMAP: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^https://osu\.ppy\.sh/beatmapsets/\d+#osu/(\d+)").expect("set beatmap url pattern"));

static SET_ONLY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^https://osu\.ppy\.sh/beatmapsets/(\d+)#osu/?$").expect("set url pattern"));

/// What an osu! link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeatmapRef {
	/// A single difficulty.
	Beatmap(u64),
	/// A whole set; resolved to its first difficulty.
	Set(u64),
}

impl BeatmapRef {
	/// Recognises `/beatmaps/{id}`, `/beatmapsets/{set}#osu/{id}` and
	/// `/beatmapsets/{set}#osu`.
	pub fn parse(href: &str) -> Option<Self> {
		let capture = |re: &Regex| re.captures(href).and_then(|c| c[1].parse::<u64>().ok());

		if let Some(id) = capture(&BEATMAP) {
			return Some(Self::Beatmap(id));
		}
		if let Some(id) = capture(&SET_WITH_BEATMAP) {
			return Some(Self::Beatmap(id));
		}
		capture(&SET_ONLY).map(Self::Set)
	}
}
