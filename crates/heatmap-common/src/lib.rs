//! Common types shared across the heatmap workspace.

pub mod color;
pub mod error;
pub mod point;
pub mod ramp;
pub mod scheme;

pub use color::{Color, Rgba16};
pub use error::{HeatmapError, HeatmapResult};
pub use point::{BoundingBox, Point};
pub use ramp::ColorRamp;
pub use scheme::{SchemeRange, SchemeSpec};
