//! Error types for winscan.

use thiserror::Error;

/// Result alias for winscan operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Errors reported by scan configuration, image views and evaluators.
///
/// Every variant is a configuration-level failure: the affected scale (or the
/// whole call, for ROI validation) is aborted, and the caller decides whether
/// that is fatal for the rest of the scan.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScanError {
    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer does not cover the described image.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A rectangle does not fit inside the image it refers to.
    #[error(
        "roi ({x}, {y}, {width}x{height}) is outside of the {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The template cannot be used for correlation scoring.
    #[error("degenerate template: {reason}")]
    DegenerateTemplate { reason: &'static str },
    /// Loading or decoding an image failed.
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
