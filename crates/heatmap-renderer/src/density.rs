//! Density buffer and sequential stamp compositing.
//!
//! Every point stamps the same black [`Stamp`] onto the buffer with the
//! source-over operator, in input order. Overlapping stamps blend; they do
//! not add up, so a pixel saturates toward full opacity instead of
//! overflowing.

use heatmap_common::Point;
use tracing::debug;

use crate::stamp::Stamp;

/// 16-bit channel maximum used by the fixed-point over operator.
const MAX_16: u32 = 0xffff;

/// Canvas-sized alpha raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityBuffer {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl DensityBuffer {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0u8; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major alpha values.
    ///
    /// Returns `None` if `alpha` does not hold exactly `width * height` values.
    pub fn from_raw(width: u32, height: u32, alpha: Vec<u8>) -> Option<Self> {
        if alpha.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            alpha,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Alpha at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the buffer.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} density buffer",
            x,
            y,
            self.width,
            self.height
        );
        self.alpha[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Alpha at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.alpha[(y as usize) * (self.width as usize) + x as usize])
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.alpha
    }

    /// Largest alpha in the buffer.
    pub fn peak(&self) -> u8 {
        self.alpha.iter().copied().max().unwrap_or(0)
    }

    /// Number of pixels with non-zero density.
    pub fn covered_pixels(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }

    /// Composite `stamp` with its top-left texel at `(origin_x, origin_y)`.
    ///
    /// Texels falling outside the buffer are clipped.
    pub fn composite_stamp(&mut self, stamp: &Stamp, origin_x: i64, origin_y: i64) {
        let size = i64::from(stamp.size());
        let width = i64::from(self.width);
        let height = i64::from(self.height);

        // Clip the stamp rectangle to the canvas.
        let x0 = origin_x.max(0);
        let y0 = origin_y.max(0);
        let x1 = origin_x.saturating_add(size).min(width);
        let y1 = origin_y.saturating_add(size).min(height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let src_row = stamp.row((y - origin_y) as u32);
            let dst_start = (y * width) as usize;
            let src_x0 = (x0 - origin_x) as usize;
            let span = (x1 - x0) as usize;

            let dst = &mut self.alpha[dst_start + x0 as usize..dst_start + x0 as usize + span];
            for (d, &s) in dst.iter_mut().zip(&src_row[src_x0..src_x0 + span]) {
                *d = over(s, *d);
            }
        }
    }
}

/// Source-over for a single alpha channel: `src + dst * (1 - src)`.
///
/// Evaluated in 16-bit fixed point the way 8-bit RGBA draw routines do it,
/// so results match those rasterizers exactly.
#[inline]
pub fn over(src: u8, dst: u8) -> u8 {
    let sa = u64::from(src) * 0x101;
    let k = (u64::from(MAX_16) - sa) * 0x101;
    ((u64::from(dst) * k / u64::from(MAX_16) + sa) >> 8) as u8
}

/// Top-left corner at which `point`'s stamp is placed.
///
/// The point is rounded to the nearest pixel and the stamp centered on it.
pub fn placement_origin(point: &Point, dot_size: u32) -> (i64, i64) {
    let half = i64::from(dot_size / 2);
    (
        (point.x.round() as i64).saturating_sub(half),
        (point.y.round() as i64).saturating_sub(half),
    )
}

/// Stamp every point, in order, onto a fresh `width x height` buffer.
pub fn composite_points(
    width: u32,
    height: u32,
    points: &[Point],
    stamp: &Stamp,
    dot_size: u32,
) -> DensityBuffer {
    let mut buffer = DensityBuffer::new(width, height);

    for point in points {
        let (x, y) = placement_origin(point, dot_size);
        buffer.composite_stamp(stamp, x, y);
    }

    debug!(
        points = points.len(),
        covered = buffer.covered_pixels(),
        peak = buffer.peak(),
        "Composited density buffer"
    );

    buffer
}
