//! osu! beatmap info cards.
//!
//! Hovering a beatmap link in chat fetches the beatmap from a mirror and
//! shows a draggable card next to it.

pub mod api;
mod card;
mod error;
mod layout;
mod link;
mod manager;

pub use api::{BeatmapApi, CatboyApi, DEFAULT_BASE_URL, load_beatmap};
pub use card::{Rgb, UNRATED, build_card, star_color, status_badge};
pub use error::{OsuError, OsuResult};
pub use layout::{VIEWPORT_MARGIN, clamp_to_viewport};
pub use link::BeatmapRef;
pub use manager::{CARD_WIDTH, OsuDeps, OsuPanelManager};
