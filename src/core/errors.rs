use thiserror::Error;

/// Rejections raised at the navigation/configuration boundary.
///
/// A render is never scheduled for a value that produced one of these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("scale must be greater than zero, got {0}")]
    NonPositiveScale(f64),

    #[error("{field} must be a finite number, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("palette must contain at least one colour")]
    EmptyPalette,

    #[error("resolution must be at least 1x1, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("pan offset ({dx}, {dy}) is outside [-1, 1]")]
    PanOutOfRange { dx: f64, dy: f64 },

    #[error("zooming in would shrink the scale {scale} to zero")]
    ScaleUnderflow { scale: f64 },

    #[error("zooming out would grow the scale {scale} past the largest finite value")]
    ScaleOverflow { scale: f64 },
}
