//! Errors from image construction and pixel access

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is zero
    #[error("image must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the image
    #[error("coordinate {index} is outside 0..{len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two images that must match in size do not
    #[error("size mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// The operation is not defined at this depth
    #[error("operation not supported at {0} bpp")]
    UnsupportedDepth(u32),

    /// Raw sample buffer does not match the image geometry
    #[error("sample buffer length {actual} does not match expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
