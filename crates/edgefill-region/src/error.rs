//! Region errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error(transparent)]
    Core(#[from] edgefill_core::Error),

    #[error("region fill needs a {expected} image, got {actual} bpp")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Seed coordinate outside the image
    #[error("seed ({x}, {y}) is outside the image")]
    InvalidSeed { x: u32, y: u32 },

    /// Visited mask and image differ in size
    #[error("visited mask is {mask_w}x{mask_h}, image is {width}x{height}")]
    MaskMismatch {
        mask_w: u32,
        mask_h: u32,
        width: u32,
        height: u32,
    },
}

pub type RegionResult<T> = Result<T, RegionError>;
