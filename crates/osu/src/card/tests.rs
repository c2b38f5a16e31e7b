use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::api::{BeatmapSetInfo, Difficulty, MapStats, PpEntry};

#[rstest]
#[case(0.0, "#4eff00")]
#[case(2.0, "#a3ff00")]
#[case(3.0, "#ffff00")]
#[case(5.0, "#ff4e00")]
#[case(6.5, "#8a00b0")]
#[case(7.0, "#2f00ff")]
#[case(1.0, "#79ff00")]
#[case(6.25, "#b2008e")]
#[case(7.999, "#000000")]
#[case(8.0, "#000000")]
#[case(12.4, "#000000")]
#[case(-1.0, "#4eff00")]
fn star_colour_boundaries(#[case] stars: f64, #[case] expected: &str) {
	assert_eq!(star_color(Some(stars)).to_string(), expected);
}

#[test]
fn missing_or_nan_rating_is_grey() {
	assert_eq!(star_color(None), UNRATED);
	assert_eq!(star_color(Some(f64::NAN)).to_string(), "#a9a9b3");
}

#[rstest]
#[case(Some("ranked"), "Ranked", true)]
#[case(Some("loved"), "Loved", true)]
#[case(Some("qualified"), "Qualified", false)]
#[case(Some("wip"), "WIP", false)]
#[case(Some("graveyard"), "Graveyard", false)]
#[case(Some("frozen"), "frozen", false)]
#[case(None, "Unknown", false)]
fn status_labels(#[case] status: Option<&str>, #[case] label: &str, #[case] highlighted: bool) {
	let badge = status_badge(status);
	assert_eq!(badge.label, label);
	assert_eq!(badge.highlighted, highlighted);
}

#[test]
fn builds_full_card() {
	let record = BeatmapRecord {
		version: Some("Extra".into()),
		status: Some("ranked".into()),
		bpm: Some(175.0),
		beatmapset_id: Some(39804),
		set: Some(BeatmapSetInfo {
			title: Some("FREEDOM DiVE".into()),
			artist: Some("xi".into()),
			creator: Some("Nakagawa-Kanon".into()),
			covers: HashMap::from([("cover@2x".to_string(), "https://assets.ppy.sh/cover@2x.jpg".to_string())]),
		}),
	};
	let meta = BeatmapMeta {
		difficulty: Some(Difficulty { stars: Some(7.0) }),
		pp: HashMap::from([("95".to_string(), Some(PpEntry { pp: Some(612.9) }))]),
		map: Some(MapStats {
			ar: Some(10.0),
			cs: Some(4.0),
			od: Some(8.0),
			hp: Some(6.0),
		}),
	};

	let card = build_card(&record, &meta, |set| format!("https://catboy.best/d/{set}"));
	assert_eq!(card.title, "FREEDOM DiVE");
	assert_eq!(card.artist, "xi");
	assert_eq!(card.mapper, "Nakagawa-Kanon");
	assert_eq!(card.difficulty, "Extra");
	assert_eq!(card.cover_url.as_deref(), Some("https://assets.ppy.sh/cover@2x.jpg"));
	assert_eq!(card.star_color, "#2f00ff");
	assert!(card.status.highlighted);
	assert_eq!(card.pp_95, Some(612));
	assert_eq!(card.ar, Some(10.0));
	assert_eq!(card.bpm, Some(175.0));
	assert_eq!(card.download_url.as_deref(), Some("https://catboy.best/d/39804"));
}

#[test]
fn sparse_records_still_build() {
	let card = build_card(&BeatmapRecord::default(), &BeatmapMeta::default(), |_| unreachable!());
	assert_eq!(card.title, "-");
	assert_eq!(card.stars, None);
	assert_eq!(card.star_color, "#a9a9b3");
	assert_eq!(card.status.label, "Unknown");
	assert_eq!(card.pp_95, None);
	assert_eq!(card.download_url, None);
}
