//! Shared test utilities for the heatmap workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Point cloud generators
//! - Common color ramp fixtures
//! - Approximate equality macros
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, generators};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert two RGBA pixels match channel by channel within a tolerance.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_pixel_approx_eq;
///
/// assert_pixel_approx_eq!([255, 254, 255, 10], [255, 255, 255, 10], 1);
/// ```
#[macro_export]
macro_rules! assert_pixel_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left: [u8; 4] = $left;
        let right: [u8; 4] = $right;
        let tolerance: i32 = $tolerance as i32;
        for channel in 0..4 {
            let diff = (left[channel] as i32 - right[channel] as i32).abs();
            if diff > tolerance {
                panic!(
                    "assertion failed: pixels differ in channel {}\n  left: `{:?}`,\n right: `{:?}`",
                    channel, left, right
                );
            }
        }
    }};
}
