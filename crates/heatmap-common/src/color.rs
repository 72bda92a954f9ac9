//! Color types.
//!
//! Two representations are used:
//! - [`Color`]: straight (non-premultiplied) 8-bit RGBA, the form colors are
//!   written in by humans and scheme files.
//! - [`Rgba16`]: 16-bit alpha-premultiplied RGBA, the precision a color ramp
//!   is held at and sampled from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HeatmapError;

/// Largest 16-bit channel value.
pub const MAX_CHANNEL_16: u32 = 0xffff;

/// Straight 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, HeatmapError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || HeatmapError::InvalidColor(hex.to_string());

        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Color {
    type Err = HeatmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = HeatmapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 16-bit alpha-premultiplied RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Drop each channel to its high byte.
    pub fn downsample(&self) -> [u8; 4] {
        [
            (self.r >> 8) as u8,
            (self.g >> 8) as u8,
            (self.b >> 8) as u8,
            (self.a >> 8) as u8,
        ]
    }

    /// Undo premultiplication, returning a straight 8-bit color.
    pub fn to_straight(&self) -> Color {
        match u32::from(self.a) {
            MAX_CHANNEL_16 => {
                let [r, g, b, a] = self.downsample();
                Color::new(r, g, b, a)
            }
            0 => Color::TRANSPARENT,
            a => {
                let unmultiply = |c: u16| ((u32::from(c) * MAX_CHANNEL_16 / a) >> 8) as u8;
                Color::new(
                    unmultiply(self.r),
                    unmultiply(self.g),
                    unmultiply(self.b),
                    (a >> 8) as u8,
                )
            }
        }
    }

    /// Per-channel linear interpolation, truncating toward zero.
    ///
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Rgba16, t: f64) -> Rgba16 {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u16, to: u16| {
            let from = f64::from(from);
            (from + (f64::from(to) - from) * t) as u16
        };

        Rgba16::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl From<Color> for Rgba16 {
    fn from(color: Color) -> Self {
        let a = u32::from(color.a) * 0x101;
        let premultiply = |c: u8| (u32::from(c) * 0x101 * a / MAX_CHANNEL_16) as u16;

        Rgba16::new(
            premultiply(color.r),
            premultiply(color.g),
            premultiply(color.b),
            a as u16,
        )
    }
}
