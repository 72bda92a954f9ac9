//! Point file loading.
//!
//! Two formats are accepted, chosen by file extension:
//! - `.json`: `[[x, y], ...]` or `[{"x": .., "y": ..}, ...]`
//! - anything else: one `x,y` pair per line; blank lines and lines starting
//!   with `#` are skipped. Whitespace or `;` also separate the coordinates.

use std::path::Path;

use anyhow::{bail, Context, Result};
use heatmap_common::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::debug;

/// Load points from `path`.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read points file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let points = if is_json {
        parse_points_json(&content)
    } else {
        parse_points_text(&content)
    }
    .with_context(|| format!("Invalid points file {}", path.display()))?;

    debug!(path = %path.display(), count = points.len(), "Loaded points");
    Ok(points)
}

/// Parse `x,y` lines.
pub fn parse_points_text(content: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() != 2 {
            bail!(
                "line {}: expected 2 coordinates, found {}",
                number + 1,
                fields.len()
            );
        }

        let x: f64 = fields[0]
            .parse()
            .with_context(|| format!("line {}: invalid x '{}'", number + 1, fields[0]))?;
        let y: f64 = fields[1]
            .parse()
            .with_context(|| format!("line {}: invalid y '{}'", number + 1, fields[1]))?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Pair([f64; 2]),
    Object { x: f64, y: f64 },
}

/// Parse a JSON array of points.
pub fn parse_points_json(content: &str) -> Result<Vec<Point>> {
    let raw: Vec<JsonPoint> = serde_json::from_str(content).context("Failed to parse points JSON")?;

    Ok(raw
        .into_iter()
        .map(|p| match p {
            JsonPoint::Pair([x, y]) => Point::new(x, y),
            JsonPoint::Object { x, y } => Point::new(x, y),
        })
        .collect())
}

/// `count` uniformly distributed points on a `width x height` canvas.
///
/// A fixed `seed` makes the output reproducible.
pub fn random_points(count: usize, width: u32, height: u32, seed: Option<u64>) -> Vec<Point> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..f64::from(width.max(1))),
                rng.gen_range(0.0..f64::from(height.max(1))),
            )
        })
        .collect()
}
