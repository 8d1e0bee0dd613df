//! Filter errors
//!
//! The filters are total over well-formed buffers; these errors only
//! report inputs of the wrong depth or size.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Core(#[from] edgefill_core::Error),

    #[error("filter needs a {expected} image, got {actual} bpp")]
    UnsupportedDepth {
        expected: &'static str,
        actual: u32,
    },
}

pub type FilterResult<T> = Result<T, FilterError>;
