//! Building blocks of the `heatmap` command-line program.

pub mod points;
pub mod scheme_source;

pub use points::{load_points, random_points};
pub use scheme_source::SchemeSource;
