//! Density heatmap rendering.
//!
//! Turns a set of points into an RGBA image where crowded regions look hot:
//! - Radial falloff stamp, generated once per render
//! - Sequential source-over compositing of one stamp per point
//! - Column-parallel mapping of density onto a color ramp
//! - PNG encoding and ramp previews for output

pub mod colorize;
pub mod density;
pub mod png;
pub mod preview;
pub mod stamp;

use std::time::Instant;

use heatmap_common::{BoundingBox, ColorRamp, HeatmapError, HeatmapResult, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use colorize::{colorize, map_pixel, ZERO_DENSITY_COLOR};
pub use density::{composite_points, DensityBuffer};
pub use png::{encode_png, write_png};
pub use preview::render_ramp_preview;
pub use stamp::Stamp;

/// Rendered heatmap: straight (non-premultiplied) RGBA, row-major.
pub type HeatmapImage = image::RgbaImage;

/// Per-render tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Stamp diameter in pixels.
    #[serde(default = "default_dot_size")]
    pub dot_size: u32,

    /// Global alpha (0-255) applied to every mapped pixel.
    #[serde(default = "default_opacity")]
    pub opacity: u8,
}

fn default_dot_size() -> u32 {
    50
}

fn default_opacity() -> u8 {
    128
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dot_size: default_dot_size(),
            opacity: default_opacity(),
        }
    }
}

/// Check render inputs without doing any work.
pub fn validate(
    width: u32,
    height: u32,
    points: &[Point],
    dot_size: u32,
    ramp: &ColorRamp,
) -> HeatmapResult<()> {
    if width == 0 || height == 0 {
        return Err(HeatmapError::InvalidCanvas { width, height });
    }
    if points.is_empty() {
        return Err(HeatmapError::EmptyPoints);
    }
    if dot_size == 0 {
        return Err(HeatmapError::InvalidDotSize(dot_size));
    }
    if ramp.is_empty() {
        return Err(HeatmapError::EmptyRamp);
    }
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(HeatmapError::NonFinitePoint {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}

/// Render a `width x height` heatmap of `points`.
///
/// Points are canvas pixel coordinates. Each one stamps a `dot_size` wide
/// radial falloff onto a density buffer, and the buffer is then colored
/// through `ramp` (index 0 = densest) with `opacity` scaling the alpha.
///
/// All inputs are validated first; on error nothing is rendered.
pub fn render(
    width: u32,
    height: u32,
    points: &[Point],
    dot_size: u32,
    opacity: u8,
    ramp: &ColorRamp,
) -> HeatmapResult<HeatmapImage> {
    validate(width, height, points, dot_size, ramp)?;
    let started = Instant::now();

    let (bbox, stamp) = rayon::join(
        || BoundingBox::from_points(points),
        || Stamp::new(dot_size),
    );
    let bbox = bbox?;
    debug!(
        min_x = bbox.min_x,
        min_y = bbox.min_y,
        max_x = bbox.max_x,
        max_y = bbox.max_y,
        stamp_size = stamp.size(),
        stamp_coverage = stamp.coverage(),
        "Prepared heatmap inputs"
    );

    let density = composite_points(width, height, points, &stamp, dot_size);
    let image = colorize(&density, opacity, ramp);

    debug!(
        width,
        height,
        points = points.len(),
        ramp_len = ramp.len(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Rendered heatmap"
    );

    Ok(image)
}

/// [`render`] with options bundled in a [`RenderOptions`].
pub fn render_with_options(
    width: u32,
    height: u32,
    points: &[Point],
    options: &RenderOptions,
    ramp: &ColorRamp,
) -> HeatmapResult<HeatmapImage> {
    render(width, height, points, options.dot_size, options.opacity, ramp)
}
