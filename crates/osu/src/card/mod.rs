//! Builds the rendered card from beatmap records.

use std::fmt;

use glimpse_panel::{BeatmapCard, StatusBadge};

use crate::api::{BeatmapMeta, BeatmapRecord};

/// An sRGB colour, displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
	}
}

/// Colour for a missing or non-numeric rating.
pub const UNRATED: Rgb = Rgb(0xa9, 0xa9, 0xb3);

const STAR_SCALE: [(f64, Rgb); 9] = [
	(0.0, Rgb(0x4e, 0xff, 0x00)),
	(2.0, Rgb(0xa3, 0xff, 0x00)),
	(3.0, Rgb(0xff, 0xff, 0x00)),
	(4.0, Rgb(0xff, 0xa3, 0x00)),
	(5.0, Rgb(0xff, 0x4e, 0x00)),
	(6.0, Rgb(0xd9, 0x00, 0x6c)),
	(6.5, Rgb(0x8a, 0x00, 0xb0)),
	(7.0, Rgb(0x2f, 0x00, 0xff)),
	(8.0, Rgb(0x00, 0x00, 0x00)),
];

/// Star rating colour: piecewise-linear per channel between the scale's
/// control points, rounded to the nearest integer.
pub fn star_color(stars: Option<f64>) -> Rgb {
	let Some(stars) = stars.filter(|s| !s.is_nan()) else {
		return UNRATED;
	};
	let (first, last) = (STAR_SCALE[0], STAR_SCALE[STAR_SCALE.len() - 1]);
	if stars < first.0 {
		return first.1;
	}
	if stars >= last.0 {
		return last.1;
	}

	for pair in STAR_SCALE.windows(2) {
		let [(s1, c1), (s2, c2)] = [pair[0], pair[1]];
		if stars >= s1 && stars < s2 {
			let t = (stars - s1) / (s2 - s1);
			let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
			return Rgb(lerp(c1.0, c2.0), lerp(c1.1, c2.1), lerp(c1.2, c2.2));
		}
	}
	last.1
}

/// Display label for a ranked status. Unknown statuses are shown verbatim.
pub fn status_badge(status: Option<&str>) -> StatusBadge {
	let label = match status {
		Some("ranked") => "Ranked",
		Some("approved") => "Approved",
		Some("qualified") => "Qualified",
		Some("loved") => "Loved",
		Some("pending") => "Pending",
		Some("wip") => "WIP",
		Some("graveyard") => "Graveyard",
		Some(other) if !other.is_empty() => other,
		_ => "Unknown",
	};
	StatusBadge {
		label: label.to_string(),
		highlighted: matches!(status, Some("ranked" | "loved")),
	}
}

const MISSING: &str = "-";

/// Assembles the card. `download_url` maps a set id to its download link.
pub fn build_card(record: &BeatmapRecord, meta: &BeatmapMeta, download_url: impl Fn(u64) -> String) -> BeatmapCard {
	let set = record.set.clone().unwrap_or_default();
	let stars = meta.difficulty.as_ref().and_then(|d| d.stars);
	let stats = meta.map.clone().unwrap_or_default();

	BeatmapCard {
		cover_url: set.covers.get("cover@2x").cloned(),
		title: set.title.unwrap_or_else(|| MISSING.to_string()),
		artist: set.artist.unwrap_or_else(|| MISSING.to_string()),
		mapper: set.creator.unwrap_or_else(|| MISSING.to_string()),
		difficulty: record.version.clone().unwrap_or_else(|| MISSING.to_string()),
		stars,
		star_color: star_color(stars).to_string(),
		status: status_badge(record.status.as_deref()),
		pp_95: meta
			.pp
			.get("95")
			.and_then(|e| e.as_ref()?.pp)
			.filter(|pp| *pp > 0.0)
			.map(|pp| pp.floor() as u32),
		ar: stats.ar,
		cs: stats.cs,
		od: stats.od,
		hp: stats.hp,
		bpm: record.bpm,
		download_url: record.beatmapset_id.map(download_url),
	}
}

#[cfg(test)]
mod tests;
