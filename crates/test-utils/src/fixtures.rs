//! Common test fixtures for heatmap tests.

use heatmap_common::{Color, ColorRamp, Point};

/// Color ramp fixtures.
pub mod ramps {
    use super::*;

    /// Two entries: white (hottest) then red.
    pub fn white_red() -> ColorRamp {
        ColorRamp::from_colors([Color::WHITE, Color::rgb(255, 0, 0)])
    }

    /// A single opaque color.
    pub fn single(color: Color) -> ColorRamp {
        ColorRamp::from_colors([color])
    }

    /// `len` entries with distinct red channels, useful for reading back
    /// which index a pixel was mapped to. Entry `i` has red `i`.
    pub fn indexed(len: u8) -> ColorRamp {
        ColorRamp::from_colors((0..len).map(|i| Color::rgb(i, 0, 255)))
    }

    pub fn empty() -> ColorRamp {
        ColorRamp::default()
    }
}

/// Point fixtures.
pub mod points {
    use super::*;

    /// Mixed-sign points with a known extent of (-3, 0) .. (10, 7).
    pub const MIXED: [(f64, f64); 3] = [(0.0, 0.0), (10.0, 5.0), (-3.0, 7.0)];

    pub fn mixed() -> Vec<Point> {
        MIXED.iter().copied().map(Point::from).collect()
    }

    /// Single point in the middle of a 20x20 canvas.
    pub fn center_of_20() -> Vec<Point> {
        vec![Point::new(10.0, 10.0)]
    }
}
