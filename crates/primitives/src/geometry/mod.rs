//! Pixel geometry in host document coordinates.
//!
//! All values are CSS pixels as reported by the host; they are kept as `f64`
//! because pointer and resize notifications carry fractional values.

use serde::{Deserialize, Serialize};

/// A point in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Component-wise difference `self - other`.
	pub fn offset_from(self, other: Position) -> Position {
		Position::new(self.x - other.x, self.y - other.y)
	}
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Clamps each dimension to at least the given minimum.
	pub fn at_least(self, min: Size) -> Size {
		Size::new(self.width.max(min.width), self.height.max(min.height))
	}
}

/// An axis-aligned rectangle, used for link bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self { x, y, width, height }
	}

	pub fn left(&self) -> f64 {
		self.x
	}

	pub fn top(&self) -> f64 {
		self.y
	}

	/// Bottom edge (exclusive).
	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	/// Top-left corner.
	pub fn origin(&self) -> Position {
		Position::new(self.x, self.y)
	}
}

/// Visible area of the host window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Persisted layout of a floating panel: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelGeometry {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl PanelGeometry {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self { x, y, width, height }
	}

	/// Places a panel of `size` directly under `anchor`.
	pub fn anchored_below(anchor: Rect, size: Size) -> Self {
		Self::new(anchor.left(), anchor.bottom(), size.width, size.height)
	}

	pub fn position(&self) -> Position {
		Position::new(self.x, self.y)
	}

	pub fn size(&self) -> Size {
		Size::new(self.width, self.height)
	}

	/// Returns a copy moved to `pos`, keeping the size.
	pub fn with_position(self, pos: Position) -> Self {
		Self { x: pos.x, y: pos.y, ..self }
	}

	/// Returns a copy resized to `size`, keeping the position.
	pub fn with_size(self, size: Size) -> Self {
		Self {
			width: size.width,
			height: size.height,
			..self
		}
	}
}
