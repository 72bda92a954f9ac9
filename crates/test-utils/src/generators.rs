//! Point cloud generators for tests and benchmarks.
//!
//! Random generators take an explicit seed so failures reproduce.

use heatmap_common::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Points on a regular lattice covering `width x height` with `spacing`
/// pixels between neighbours, starting at `(spacing / 2, spacing / 2)`.
///
/// # Example
///
/// ```
/// use test_utils::create_grid_points;
///
/// let points = create_grid_points(100, 50, 10);
/// assert_eq!(points.len(), 50); // 10 columns * 5 rows
/// assert_eq!(points[0].x, 5.0);
/// ```
pub fn create_grid_points(width: u32, height: u32, spacing: u32) -> Vec<Point> {
    let spacing = spacing.max(1);
    let half = f64::from(spacing / 2);
    let mut points = Vec::new();
    for row in 0..height / spacing {
        for col in 0..width / spacing {
            points.push(Point::new(
                f64::from(col * spacing) + half,
                f64::from(row * spacing) + half,
            ));
        }
    }
    points
}

/// Uniformly distributed points inside `[0, width) x [0, height)`.
pub fn create_random_points(count: usize, width: u32, height: u32, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..f64::from(width.max(1))),
                rng.gen_range(0.0..f64::from(height.max(1))),
            )
        })
        .collect()
}

/// Points scattered around a few hotspots, the typical heatmap input.
///
/// Each point picks one of `centers` and lands within `radius` of it.
pub fn create_clustered_points(
    count: usize,
    centers: &[Point],
    radius: f64,
    seed: u64,
) -> Vec<Point> {
    if centers.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let center = centers[rng.gen_range(0..centers.len())];
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance = rng.gen_range(0.0..radius.max(f64::EPSILON));
            Point::new(
                center.x + angle.cos() * distance,
                center.y + angle.sin() * distance,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_points_layout() {
        let points = create_grid_points(40, 20, 10);
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], Point::new(5.0, 5.0));
        assert_eq!(points[7], Point::new(35.0, 15.0));
    }

    #[test]
    fn test_random_points_are_seeded() {
        let a = create_random_points(32, 64, 64, 7);
        let b = create_random_points(32, 64, 64, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.x >= 0.0 && p.x < 64.0 && p.y >= 0.0 && p.y < 64.0));
    }

    #[test]
    fn test_clustered_points_stay_near_centers() {
        let centers = [Point::new(10.0, 10.0), Point::new(50.0, 40.0)];
        let points = create_clustered_points(100, &centers, 5.0, 1);
        assert_eq!(points.len(), 100);
        for p in &points {
            let near = centers
                .iter()
                .any(|c| ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt() <= 5.0 + 1e-9);
            assert!(near, "{:?} is not near any center", p);
        }
    }

    #[test]
    fn test_clustered_points_without_centers() {
        assert!(create_clustered_points(10, &[], 5.0, 1).is_empty());
    }
}
