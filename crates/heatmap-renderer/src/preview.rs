//! Color ramp preview strips.

use heatmap_common::{ColorRamp, HeatmapError, HeatmapResult};
use image::{Rgba, RgbaImage};

/// Draw `ramp` as a vertical strip `width` pixels wide.
///
/// Row `i` is ramp entry `i`, so the hottest color sits at the top.
pub fn render_ramp_preview(ramp: &ColorRamp, width: u32) -> HeatmapResult<RgbaImage> {
    if ramp.is_empty() {
        return Err(HeatmapError::EmptyRamp);
    }
    let height = u32::try_from(ramp.len()).map_err(|_| HeatmapError::InvalidCanvas {
        width,
        height: u32::MAX,
    })?;
    if width == 0 {
        return Err(HeatmapError::InvalidCanvas { width, height });
    }

    let rows: Vec<Rgba<u8>> = ramp
        .colors()
        .iter()
        .map(|c| Rgba(c.to_straight().to_array()))
        .collect();

    Ok(RgbaImage::from_fn(width, height, |_, y| rows[y as usize]))
}
