//! Color scheme definitions.
//!
//! A scheme is a list of color ranges. Each range interpolates from one color
//! to another over a fixed number of steps, and the ranges are concatenated in
//! order to build a [`ColorRamp`]. Schemes can be written as JSON or YAML:
//!
//! ```yaml
//! name: fire
//! ranges:
//!   - { from: "#FFFFFF", to: "#FFFF00", steps: 50 }
//!   - { from: "#FFFF00", to: "#FF0000", steps: 60 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Color, Rgba16};
use crate::error::{HeatmapError, HeatmapResult};
use crate::ramp::ColorRamp;

/// Name of the default built-in scheme.
pub const DEFAULT_SCHEME: &str = "alpha_fire";

/// One interpolated segment of a scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRange {
    pub from: Color,
    pub to: Color,
    pub steps: usize,
}

impl SchemeRange {
    pub fn new(from: Color, to: Color, steps: usize) -> Self {
        Self { from, to, steps }
    }

    /// Colors of this range.
    ///
    /// Step `i` sits at `i / steps` of the way from `from` to `to`, so the
    /// first color is `from` and `to` itself is left to the next range.
    pub fn colors(&self) -> impl Iterator<Item = Rgba16> + '_ {
        let from = Rgba16::from(self.from);
        let to = Rgba16::from(self.to);
        let steps = self.steps as f64;

        (0..self.steps).map(move |i| from.lerp(&to, i as f64 / steps))
    }
}

/// A complete scheme: ordered ranges, hottest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub ranges: Vec<SchemeRange>,
}

impl SchemeSpec {
    pub fn new(name: impl Into<String>, ranges: Vec<SchemeRange>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            ranges,
        }
    }

    /// Parse a scheme from a JSON string.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a scheme from a YAML string.
    pub fn from_yaml(yaml: &str) -> HeatmapResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a scheme file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let mut spec = match extension.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            other => {
                return Err(HeatmapError::SchemeParseError(format!(
                    "unsupported scheme file extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };

        if spec.name.is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                spec.name = stem.to_string();
            }
        }

        debug!(name = %spec.name, ranges = spec.ranges.len(), path = %path.display(), "Loaded scheme");
        Ok(spec)
    }

    /// Look up a built-in scheme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "alpha_fire" => Some(alpha_fire()),
            "classic" => Some(classic()),
            _ => None,
        }
    }

    /// Names accepted by [`SchemeSpec::builtin`].
    pub fn builtin_names() -> &'static [&'static str] {
        &["alpha_fire", "classic"]
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if self.ranges.is_empty() {
            return Err(HeatmapError::InvalidScheme(format!(
                "scheme '{}' has no ranges",
                self.name
            )));
        }

        if let Some(i) = self.ranges.iter().position(|r| r.steps == 0) {
            return Err(HeatmapError::InvalidScheme(format!(
                "range {} of scheme '{}' has zero steps",
                i, self.name
            )));
        }

        Ok(())
    }

    /// Total number of colors the scheme produces.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(|r| r.steps).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the ramp by concatenating every range in order.
    pub fn build(&self) -> ColorRamp {
        self.ranges.iter().flat_map(|r| r.colors()).collect()
    }
}

/// White through yellow and red, fading to grey and then to nothing.
pub fn alpha_fire() -> SchemeSpec {
    let yellow = Color::rgb(255, 255, 0);
    let red = Color::rgb(255, 0, 0);
    let grey = Color::new(128, 128, 128, 220);

    SchemeSpec {
        name: "alpha_fire".to_string(),
        description: "White to yellow to red, fading through grey to transparent".to_string(),
        ranges: vec![
            SchemeRange::new(Color::WHITE, yellow, 50),
            SchemeRange::new(yellow, red, 60),
            SchemeRange::new(red, grey, 100),
            SchemeRange::new(grey, Color::TRANSPARENT, 46),
        ],
    }
}

/// Red through yellow, green and cyan to blue.
pub fn classic() -> SchemeSpec {
    let red = Color::rgb(255, 0, 0);
    let yellow = Color::rgb(255, 255, 0);
    let green = Color::rgb(0, 255, 0);
    let cyan = Color::rgb(0, 255, 255);
    let blue = Color::new(0, 0, 255, 160);

    SchemeSpec {
        name: "classic".to_string(),
        description: "Rainbow from red (hot) to translucent blue (cold)".to_string(),
        ranges: vec![
            SchemeRange::new(red, yellow, 64),
            SchemeRange::new(yellow, green, 64),
            SchemeRange::new(green, cyan, 64),
            SchemeRange::new(cyan, blue, 64),
        ],
    }
}
