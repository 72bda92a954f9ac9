//! Error types for heatmap rendering.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Render Preconditions ===
    #[error("Empty point set: at least one point is required")]
    EmptyPoints,

    #[error("Empty color ramp: at least one color is required")]
    EmptyRamp,

    #[error("Invalid dot size: {0} (must be greater than zero)")]
    InvalidDotSize(u32),

    #[error("Invalid canvas size: {width}x{height} (both dimensions must be greater than zero)")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Point {index} has non-finite coordinates ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },

    // === Scheme Errors ===
    #[error("Invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("Invalid scheme: {0}")]
    InvalidScheme(String),

    #[error("Failed to parse scheme: {0}")]
    SchemeParseError(String),

    // === Output Errors ===
    #[error("Image encoding failed: {0}")]
    EncodeError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl HeatmapError {
    /// Whether this error reports invalid input to the render entry point.
    ///
    /// These are detected before any rendering work starts.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            HeatmapError::EmptyPoints
                | HeatmapError::EmptyRamp
                | HeatmapError::InvalidDotSize(_)
                | HeatmapError::InvalidCanvas { .. }
                | HeatmapError::NonFinitePoint { .. }
        )
    }

    /// Short machine-readable error category.
    pub fn kind(&self) -> &'static str {
        match self {
            e if e.is_precondition_violation() => "PreconditionViolation",
            HeatmapError::InvalidColor(_)
            | HeatmapError::InvalidScheme(_)
            | HeatmapError::SchemeParseError(_) => "SchemeError",
            HeatmapError::EncodeError(_) => "EncodeError",
            _ => "IoError",
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::SchemeParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for HeatmapError {
    fn from(err: serde_yaml::Error) -> Self {
        HeatmapError::SchemeParseError(format!("YAML error: {}", err))
    }
}
