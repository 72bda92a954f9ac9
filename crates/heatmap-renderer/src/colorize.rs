//! Density to color mapping.
//!
//! Each pixel's density alpha selects an entry of the color ramp: the denser
//! the pixel, the closer to index 0 (the hottest color). Pixels without any
//! density get a faint translucent black tint rather than full transparency.
//!
//! Mapping is column-parallel. Every column is an independent rayon task that
//! reads the finished density buffer and returns its own pixels; the columns
//! are scattered into the image once all tasks have joined.

use heatmap_common::{ColorRamp, Rgba16};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::density::DensityBuffer;

/// Color written where no point contributed any density.
pub const ZERO_DENSITY_COLOR: [u8; 4] = [0, 0, 0, 50];

/// Widen an 8-bit alpha to 16 bits and normalize it to `[0, 1]`.
#[inline]
pub fn density_percent(alpha: u8) -> f64 {
    f64::from(u32::from(alpha) * 0x101) / f64::from(0xffff_u32)
}

/// Ramp index for a non-zero density fraction.
///
/// `percent == 1` maps to index 0; smaller fractions walk toward the end of
/// the ramp. The result is clamped to `ramp_len - 1`.
#[inline]
pub fn ramp_index(percent: f64, ramp_len: usize) -> usize {
    let last = ramp_len.saturating_sub(1);
    let index = (last as f64 * (1.0 - percent)) as usize;
    index.min(last)
}

/// Output color for a ramp entry at the given global opacity.
#[inline]
pub fn tint(template: &Rgba16, opacity: u8) -> [u8; 4] {
    let [r, g, b, a] = template.downsample();
    let alpha = (f64::from(a) * (f64::from(opacity) / 256.0)) as u8;
    [r, g, b, alpha]
}

/// Map one density alpha to its output pixel.
///
/// `ramp` must not be empty.
#[inline]
pub fn map_pixel(alpha: u8, opacity: u8, ramp: &ColorRamp) -> [u8; 4] {
    let percent = density_percent(alpha);
    if percent == 0.0 {
        return ZERO_DENSITY_COLOR;
    }

    let colors = ramp.colors();
    let template = &colors[ramp_index(percent, colors.len())];
    tint(template, opacity)
}

/// Map a whole density buffer to an RGBA image, one task per column.
///
/// `ramp` must not be empty; [`crate::render`] checks this before calling.
pub fn colorize(density: &DensityBuffer, opacity: u8, ramp: &ColorRamp) -> RgbaImage {
    let (width, height) = density.dimensions();

    let columns: Vec<Vec<[u8; 4]>> = (0..width)
        .into_par_iter()
        .map(|x| {
            (0..height)
                .map(|y| map_pixel(density.alpha(x, y), opacity, ramp))
                .collect()
        })
        .collect();

    let mut image = RgbaImage::new(width, height);
    for (x, column) in columns.into_iter().enumerate() {
        for (y, pixel) in column.into_iter().enumerate() {
            image.put_pixel(x as u32, y as u32, Rgba(pixel));
        }
    }

    image
}
