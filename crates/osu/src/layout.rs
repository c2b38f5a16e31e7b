use glimpse_primitives::{Position, Size, Viewport};

/// Gap kept between a clamped panel and the viewport edge.
pub const VIEWPORT_MARGIN: f64 = 10.0;

/// Moves a panel at `pos` with `size` back inside `viewport`.
///
/// Overflowing the right or bottom edge shifts the panel left or up so it
/// ends a margin short of that edge; a negative left or top coordinate is
/// then reset to the margin. Panels larger than the viewport stay pinned to
/// the top-left margin.
pub fn clamp_to_viewport(pos: Position, size: Size, viewport: Viewport) -> Position {
	let axis = |start: f64, extent: f64, limit: f64| {
		let mut start = start;
		if start + extent > limit {
			start = limit - extent - VIEWPORT_MARGIN;
		}
		if start < 0.0 {
			start = VIEWPORT_MARGIN;
		}
		start
	};
	Position::new(
		axis(pos.x, size.width, viewport.width),
		axis(pos.y, size.height, viewport.height),
	)
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);
	const CARD: Size = Size::new(300.0, 260.0);

	#[rstest]
	#[case((100.0, 100.0), (100.0, 100.0))]
	#[case((1200.0, 100.0), (970.0, 100.0))]
	#[case((100.0, 600.0), (100.0, 450.0))]
	#[case((1250.0, 700.0), (970.0, 450.0))]
	#[case((-40.0, -5.0), (10.0, 10.0))]
	#[case((980.0, 460.0), (980.0, 460.0))]
	#[case((981.0, 461.0), (970.0, 450.0))]
	fn clamps_into_the_viewport(#[case] pos: (f64, f64), #[case] expected: (f64, f64)) {
		let got = clamp_to_viewport(Position::new(pos.0, pos.1), CARD, VIEWPORT);
		assert_eq!(got, Position::new(expected.0, expected.1));
	}

	#[test]
	fn oversized_panel_sticks_to_the_margin() {
		let got = clamp_to_viewport(Position::new(50.0, 50.0), Size::new(2000.0, 1000.0), VIEWPORT);
		assert_eq!(got, Position::new(VIEWPORT_MARGIN, VIEWPORT_MARGIN));
	}

	#[test]
	fn clamped_panel_stays_inside() {
		for x in (-500..2000).step_by(37) {
			let got = clamp_to_viewport(Position::new(f64::from(x), 0.0), CARD, VIEWPORT);
			assert!(got.x + CARD.width <= VIEWPORT.width);
			assert!(got.x >= 0.0);
		}
	}
}
