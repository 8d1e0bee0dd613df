//! Errors raised by the regression helpers

use edgefill_io::IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while saving a display-mode image
#[derive(Debug, Error)]
pub enum TestError {
    /// The output directory could not be created
    #[error("cannot create {}: {source}", dir.display())]
    OutputDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image could not be encoded or written
    #[error("cannot save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}

pub type TestResult<T> = Result<T, TestError>;
