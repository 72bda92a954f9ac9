//! Ordered color ramp consumed by the color mapper.

use crate::color::{Color, Rgba16};

/// Ordered colors from hottest (index 0) to coolest (last index).
///
/// An empty ramp can be constructed; the render entry point rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorRamp {
    colors: Vec<Rgba16>,
}

impl ColorRamp {
    pub fn new(colors: Vec<Rgba16>) -> Self {
        Self { colors }
    }

    /// Build a ramp from straight 8-bit colors.
    pub fn from_colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        Self::new(colors.into_iter().map(Rgba16::from).collect())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rgba16> {
        self.colors.get(index)
    }

    pub fn colors(&self) -> &[Rgba16] {
        &self.colors
    }

    pub fn hottest(&self) -> Option<&Rgba16> {
        self.colors.first()
    }

    pub fn coolest(&self) -> Option<&Rgba16> {
        self.colors.last()
    }
}

impl From<Vec<Rgba16>> for ColorRamp {
    fn from(colors: Vec<Rgba16>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Rgba16> for ColorRamp {
    fn from_iter<T: IntoIterator<Item = Rgba16>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
