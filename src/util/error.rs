//! Error types for maskmatch.

use thiserror::Error;

/// Result alias for maskmatch operations.
pub type MaskMatchResult<T> = std::result::Result<T, MaskMatchError>;

/// Errors that can occur while building images, masks or running a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskMatchError {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// A pixel buffer does not hold `width * height` pixels.
    #[error("buffer holds {got} pixels, expected {needed}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A scored window does not have the mask's dimensions.
    #[error("window {width}x{height} does not match mask {mask_width}x{mask_height}")]
    WindowSizeMismatch {
        width: usize,
        height: usize,
        mask_width: usize,
        mask_height: usize,
    },
    /// The match percentage lies outside `0..=100`.
    #[error("match percent {0} is outside 0..=100")]
    InvalidPercent(u32),
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Decoding or encoding an image file failed.
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
