//! Tests for density to color mapping.

use heatmap_common::{Color, ColorRamp, Point, Rgba16};
use heatmap_renderer::colorize::{colorize, map_pixel, ramp_index, ZERO_DENSITY_COLOR};
use heatmap_renderer::density::{composite_points, DensityBuffer};
use heatmap_renderer::stamp::Stamp;
use image::RgbaImage;
use test_utils::{create_clustered_points, ramps};

// ============================================================================
// Helper functions
// ============================================================================

/// Every alpha value once, laid out as a 16x16 buffer.
fn alpha_sweep() -> DensityBuffer {
    DensityBuffer::from_raw(16, 16, (0..=255u8).collect()).unwrap()
}

/// Single-threaded reference mapping, visiting columns right to left.
fn reference_colorize(density: &DensityBuffer, opacity: u8, ramp: &ColorRamp) -> RgbaImage {
    let (width, height) = density.dimensions();
    let mut image = RgbaImage::new(width, height);
    for x in (0..width).rev() {
        for y in 0..height {
            let pixel = map_pixel(density.alpha(x, y), opacity, ramp);
            image.put_pixel(x, y, image::Rgba(pixel));
        }
    }
    image
}

// ============================================================================
// Zero density
// ============================================================================

#[test]
fn test_zero_density_is_translucent_black() {
    let density = DensityBuffer::new(7, 5);
    for ramp in [ramps::white_red(), ramps::indexed(200), ramps::single(Color::rgb(9, 9, 9))] {
        for opacity in [0, 1, 128, 255] {
            let image = colorize(&density, opacity, &ramp);
            assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 50]));
        }
    }
}

#[test]
fn test_zero_density_constant() {
    assert_eq!(ZERO_DENSITY_COLOR, [0, 0, 0, 50]);
}

// ============================================================================
// Ramp selection
// ============================================================================

#[test]
fn test_single_entry_ramp_maps_every_density_to_it() {
    let color = Color::rgb(10, 200, 30);
    let ramp = ramps::single(color);
    let image = colorize(&alpha_sweep(), 255, &ramp);

    for (i, pixel) in image.pixels().enumerate() {
        if i == 0 {
            assert_eq!(pixel.0, ZERO_DENSITY_COLOR);
        } else {
            assert_eq!(pixel.0, [10, 200, 30, 254], "alpha {}", i);
        }
    }
}

#[test]
fn test_full_density_selects_hottest_entry() {
    let ramp = ramps::indexed(100);
    assert_eq!(map_pixel(255, 255, &ramp)[0], 0);
}

#[test]
fn test_lower_density_walks_toward_cool_end() {
    let ramp = ramps::indexed(100);
    let mut previous = 0;
    for alpha in (1..=255u8).rev() {
        let red = map_pixel(alpha, 255, &ramp)[0];
        assert!(red >= previous, "index must not decrease as density drops");
        previous = red;
    }
    // alpha 1 is 1/255 of full density: floor(99 * 254/255) = 98
    assert_eq!(map_pixel(1, 255, &ramp)[0], 98);
}

#[test]
fn test_ramp_index_matches_formula() {
    for len in [1usize, 2, 7, 256] {
        for alpha in 1..=255u8 {
            let percent = f64::from(alpha) / 255.0;
            let index = ramp_index(percent, len);
            assert!(index < len);
            assert_eq!(index, ((len - 1) as f64 * (1.0 - percent)) as usize);
        }
    }
}

#[test]
fn test_two_entry_ramp_only_hits_index_zero_below_full() {
    // floor(1 * (1 - p)) is 0 for every p in (0, 1]
    let ramp = ramps::white_red();
    for alpha in 1..=255u8 {
        let [r, g, b, _] = map_pixel(alpha, 200, &ramp);
        assert_eq!([r, g, b], [255, 255, 255]);
    }
}

// ============================================================================
// Alpha and channel precision
// ============================================================================

#[test]
fn test_opacity_scales_template_alpha() {
    let ramp = ramps::single(Color::WHITE);
    assert_eq!(map_pixel(128, 255, &ramp)[3], 254);
    assert_eq!(map_pixel(128, 128, &ramp)[3], 127);
    assert_eq!(map_pixel(128, 64, &ramp)[3], 63);
    assert_eq!(map_pixel(128, 0, &ramp)[3], 0);
}

#[test]
fn test_translucent_template_channels_are_premultiplied() {
    // 16-bit premultiplied grey at alpha 220
    let ramp = ColorRamp::from_colors([Color::new(128, 128, 128, 220)]);
    let template = ramp.hottest().copied().unwrap();
    let [r, g, b, a] = map_pixel(255, 255, &ramp);

    assert_eq!([r, g, b], [(template.r >> 8) as u8; 3]);
    assert!(r < 128);
    assert_eq!(a, (220.0 * (255.0 / 256.0)) as u8);
}

#[test]
fn test_transparent_template_yields_invisible_pixel() {
    let ramp = ColorRamp::new(vec![Rgba16::default()]);
    assert_eq!(map_pixel(90, 255, &ramp), [0, 0, 0, 0]);
}

// ============================================================================
// Parallel mapping
// ============================================================================

#[test]
fn test_parallel_matches_sequential_reference() {
    let centers = [Point::new(40.0, 30.0), Point::new(90.0, 70.0), Point::new(20.0, 90.0)];
    let points = create_clustered_points(400, &centers, 25.0, 99);
    let stamp = Stamp::new(21);
    let density = composite_points(128, 100, &points, &stamp, 21);
    let ramp = heatmap_common::scheme::alpha_fire().build();

    let parallel = colorize(&density, 180, &ramp);
    let sequential = reference_colorize(&density, 180, &ramp);

    assert_eq!(parallel.dimensions(), (128, 100));
    assert_eq!(parallel, sequential);
}

#[test]
fn test_parallel_is_deterministic() {
    let density = alpha_sweep();
    let ramp = ramps::indexed(37);
    let first = colorize(&density, 222, &ramp);
    for _ in 0..10 {
        assert_eq!(colorize(&density, 222, &ramp), first);
    }
}

#[test]
fn test_single_column_and_single_row() {
    let ramp = ramps::white_red();
    let column = DensityBuffer::from_raw(1, 4, vec![0, 10, 200, 255]).unwrap();
    let row = DensityBuffer::from_raw(4, 1, vec![0, 10, 200, 255]).unwrap();

    let a = colorize(&column, 255, &ramp);
    let b = colorize(&row, 255, &ramp);
    for i in 0..4 {
        assert_eq!(a.get_pixel(0, i).0, b.get_pixel(i, 0).0);
    }
}
