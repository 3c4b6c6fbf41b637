//! Error types for the hue-wheel core.
//!
//! The mapping and rendering functions themselves are total; these errors only
//! arise at the fallible edges (raster construction, hex parsing, shading lookup,
//! snapshot I/O).

use thiserror::Error;

/// Errors produced at the fallible edges of the wheel pipeline.
#[derive(Debug, Error)]
pub enum WheelError {
    /// Raster dimensions overflowed or could not be represented by the target.
    #[error("invalid dimensions: width * height must fit in memory and in u32")]
    InvalidDimensions,

    /// A pixel buffer had the wrong number of elements for its dimensions.
    #[error("dimension mismatch: expected {expected} pixels, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A shading policy name was not recognized.
    #[error("unknown shading: {0}")]
    UnknownShading(String),

    /// Writing a snapshot failed.
    #[error("i/o error: {0}")]
    Io(String),
}
