//! Radial falloff stamp applied once per point.

/// Alpha never drops below this offset inside the stamp radius.
const FALLOFF_FLOOR: f64 = 50.0;

/// Alpha span covered between the stamp center and its edge.
const FALLOFF_SPAN: f64 = 200.0;

/// Square alpha mask describing one point's heat footprint.
///
/// Texels are stored row-major. The stamp is black, so only alpha is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    size: u32,
    alpha: Vec<u8>,
}

impl Stamp {
    /// Generate a `size x size` stamp.
    ///
    /// Distances are measured from `(size / 2, size / 2)` to each texel's
    /// integer offset. Texels closer than `0.5 * sqrt(2) * size / 2` fade
    /// linearly from 205 at the center toward 5 at the edge; the rest are
    /// transparent.
    pub fn new(size: u32) -> Self {
        let side = f64::from(size);
        let center = side / 2.0;
        let max_distance = 0.5 * (center.powi(2) + center.powi(2)).sqrt();

        let mut alpha = vec![0u8; (size as usize) * (size as usize)];
        for y in 0..size {
            for x in 0..size {
                let dx = f64::from(x) - center;
                let dy = f64::from(y) - center;
                let distance = (dx * dx + dy * dy).sqrt();

                if distance < max_distance {
                    let falloff = (FALLOFF_SPAN * distance / max_distance + FALLOFF_FLOOR)
                        .clamp(0.0, 255.0) as u8;
                    alpha[(y * size + x) as usize] = 255 - falloff;
                }
            }
        }

        Self { size, alpha }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Alpha at texel `(x, y)`, or `None` outside the stamp.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.alpha.get((y * self.size + x) as usize).copied()
    }

    /// One row of texels.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.size) as usize;
        &self.alpha[start..start + self.size as usize]
    }

    pub fn texels(&self) -> &[u8] {
        &self.alpha
    }

    /// Number of texels with non-zero alpha.
    pub fn coverage(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }
}
