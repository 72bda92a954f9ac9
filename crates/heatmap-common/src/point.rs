//! Point and bounding box types.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// A data point to be plotted.
///
/// Coordinates are canvas pixels: `x` grows to the right, `y` grows down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Extent of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Fold a point sequence into its per-axis extrema.
    ///
    /// Returns `HeatmapError::EmptyPoints` when there is nothing to fold.
    pub fn from_points(points: &[Point]) -> HeatmapResult<Self> {
        let first = points.first().ok_or(HeatmapError::EmptyPoints)?;
        let seed = Self::new(first.x, first.y, first.x, first.y);

        Ok(points.iter().fold(seed, |bbox, p| Self {
            min_x: bbox.min_x.min(p.x),
            min_y: bbox.min_y.min(p.y),
            max_x: bbox.max_x.max(p.x),
            max_y: bbox.max_y.max(p.y),
        }))
    }

    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
