//! Codec errors
//!
//! [`IoError::Io`] means the file itself could not be opened, read or
//! written. The other variants mean the bytes were not a usable PNG, or
//! the image could not be expressed as one.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The decoder produced a frame that does not match its header
    #[error("malformed image data: {0}")]
    InvalidData(String),

    #[error("cannot decode PNG: {0}")]
    DecodeError(String),

    #[error("cannot encode PNG: {0}")]
    EncodeError(String),

    #[error(transparent)]
    Core(#[from] edgefill_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
