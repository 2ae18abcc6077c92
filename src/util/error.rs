//! Error types for pylongrid.

use thiserror::Error;

/// Result alias for pylongrid operations.
pub type PylonGridResult<T> = std::result::Result<T, PylonGridError>;

/// Errors that can occur when building or running a detector.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PylonGridError {
    /// Image or grid dimensions are zero or overflow.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer does not cover the described image.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Quantile filter parameters are out of range.
    #[error("invalid filter configuration: {reason}")]
    InvalidFilterConfig { reason: &'static str },
    /// The frame does not have the geometry the grid was built for.
    #[error(
        "geometry mismatch: detector built for {expected_width}x{expected_height}, got {width}x{height}"
    )]
    GeometryMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    /// Image decoding failed (only produced with the `image-io` feature).
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
