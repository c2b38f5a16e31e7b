//! Core value types shared by the preview crates: content and panel kinds,
//! link handles, geometry, and preview locations.

/// Pixel geometry for panels, links and the viewport.
pub mod geometry;
/// Identifier types for host elements.
pub mod ids;
/// Content classification and panel kinds.
pub mod kind;
/// Preview location preferences.
pub mod location;

pub use geometry::{PanelGeometry, Position, Rect, Size, Viewport};
pub use ids::LinkId;
pub use kind::{ContentKind, PanelKind};
pub use location::PreviewLocation;
