//! End-to-end tests for the render entry point.

use heatmap_common::{Color, ColorRamp, HeatmapError, Point};
use heatmap_renderer::{render, render_with_options, validate, RenderOptions, Stamp};
use test_utils::{
    assert_pixel_approx_eq, create_grid_points, create_random_points, points, ramps,
};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_point_white_red() {
    let image = render(20, 20, &points::center_of_20(), 10, 255, &ramps::white_red()).unwrap();
    assert_eq!(image.dimensions(), (20, 20));

    // stamp texel (tx, ty) lands on canvas (tx + 5, ty + 5)
    let stamp = Stamp::new(10);
    for y in 0..20u32 {
        for x in 0..20u32 {
            let texel = if (5..15).contains(&x) && (5..15).contains(&y) {
                stamp.alpha_at(x - 5, y - 5).unwrap()
            } else {
                0
            };
            let pixel = image.get_pixel(x, y).0;

            if texel == 0 {
                assert_eq!(pixel, [0, 0, 0, 50], "({}, {}) should be background", x, y);
            } else {
                assert_eq!(&pixel[..3], &[255, 255, 255], "({}, {}) should be white", x, y);
                assert_eq!(pixel[3], 254);
            }
        }
    }
}

#[test]
fn test_overlapping_points_change_ramp_position() {
    let ramp = ramps::indexed(64);
    let single = render(30, 30, &[Point::new(15.0, 15.0)], 12, 255, &ramp).unwrap();
    let stacked = render(30, 30, &vec![Point::new(15.0, 15.0); 4], 12, 255, &ramp).unwrap();

    // denser centre moves toward index 0 (red channel carries the index)
    let lone = single.get_pixel(15, 15).0[0];
    let dense = stacked.get_pixel(15, 15).0[0];
    assert!(dense < lone, "stacked index {} should be hotter than {}", dense, lone);
}

#[test]
fn test_separated_points_render_identically() {
    // 20px spacing keeps the 10px stamps apart, so every centre matches the
    // lone point scenario.
    let grid = create_grid_points(100, 100, 20);
    assert_eq!(grid.len(), 25);

    let ramp = ramps::white_red();
    let image = render(100, 100, &grid, 10, 255, &ramp).unwrap();
    let lone = render(20, 20, &points::center_of_20(), 10, 255, &ramp).unwrap();
    let expected = lone.get_pixel(10, 10).0;

    for p in &grid {
        let pixel = image.get_pixel(p.x as u32, p.y as u32).0;
        assert_pixel_approx_eq!(pixel, expected, 0);
    }
}

#[test]
fn test_negative_coordinates_clip() {
    let image = render(16, 16, &points::mixed(), 6, 255, &ramps::white_red()).unwrap();

    // (0, 0) keeps the lower-right quarter of its stamp
    assert_ne!(image.get_pixel(0, 0).0, [0, 0, 0, 50]);
    assert_ne!(image.get_pixel(10, 5).0, [0, 0, 0, 50]);
    // (-3, 7) is too far left to reach the canvas
    assert_eq!(image.get_pixel(0, 7).0, [0, 0, 0, 50]);
}

#[test]
fn test_points_outside_canvas_render_background() {
    let points = [Point::new(-50.0, -50.0), Point::new(500.0, 10.0)];
    let image = render(16, 16, &points, 8, 255, &ramps::white_red()).unwrap();
    assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 50]));
}

#[test]
fn test_bounding_box_does_not_rescale_points() {
    // A tight cluster far from the origin stays where it is.
    let points = [Point::new(40.0, 40.0), Point::new(41.0, 40.0)];
    let image = render(64, 64, &points, 6, 255, &ramps::white_red()).unwrap();
    assert_ne!(image.get_pixel(40, 40).0, [0, 0, 0, 50]);
    assert_eq!(image.get_pixel(5, 5).0, [0, 0, 0, 50]);
}

#[test]
fn test_render_is_deterministic() {
    let points = create_random_points(500, 200, 150, 3);
    let ramp = heatmap_common::scheme::alpha_fire().build();
    let a = render(200, 150, &points, 25, 160, &ramp).unwrap();
    let b = render(200, 150, &points, 25, 160, &ramp).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_render_with_options_matches_render() {
    let points = create_random_points(50, 64, 64, 11);
    let ramp = ramps::indexed(16);
    let options = RenderOptions {
        dot_size: 9,
        opacity: 77,
    };
    assert_eq!(
        render_with_options(64, 64, &points, &options, &ramp).unwrap(),
        render(64, 64, &points, 9, 77, &ramp).unwrap()
    );
}

#[test]
fn test_render_options_defaults() {
    let options: RenderOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, RenderOptions::default());
    let options: RenderOptions = serde_json::from_str(r#"{"dot_size": 12}"#).unwrap();
    assert_eq!(options.dot_size, 12);
    assert_eq!(options.opacity, RenderOptions::default().opacity);
}

// ============================================================================
// Precondition violations
// ============================================================================

#[test]
fn test_empty_points_rejected() {
    let err = render(20, 20, &[], 10, 255, &ramps::white_red()).unwrap_err();
    assert!(matches!(err, HeatmapError::EmptyPoints));
    assert!(err.is_precondition_violation());
}

#[test]
fn test_empty_ramp_rejected() {
    let err = render(20, 20, &points::center_of_20(), 10, 255, &ramps::empty()).unwrap_err();
    assert!(matches!(err, HeatmapError::EmptyRamp));
    assert!(err.is_precondition_violation());
}

#[test]
fn test_zero_dot_size_rejected() {
    let err = render(20, 20, &points::center_of_20(), 0, 255, &ramps::white_red()).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidDotSize(0)));
}

#[test]
fn test_zero_canvas_rejected() {
    let ramp = ramps::white_red();
    let pts = points::center_of_20();
    assert!(matches!(
        render(0, 20, &pts, 10, 255, &ramp),
        Err(HeatmapError::InvalidCanvas { width: 0, height: 20 })
    ));
    assert!(matches!(
        render(20, 0, &pts, 10, 255, &ramp),
        Err(HeatmapError::InvalidCanvas { width: 20, height: 0 })
    ));
}

#[test]
fn test_non_finite_point_rejected() {
    let pts = [Point::new(1.0, 1.0), Point::new(f64::NAN, 2.0)];
    let err = render(20, 20, &pts, 10, 255, &ramps::white_red()).unwrap_err();
    assert!(matches!(err, HeatmapError::NonFinitePoint { index: 1, .. }));
}

#[test]
fn test_validate_reports_canvas_before_points() {
    let err = validate(0, 0, &[], 0, &ColorRamp::default()).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidCanvas { .. }));
    assert!(validate(1, 1, &[Point::new(0.0, 0.0)], 1, &ColorRamp::from_colors([Color::WHITE])).is_ok());
}
