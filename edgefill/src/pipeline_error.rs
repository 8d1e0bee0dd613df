//! Error type for pipeline stages
//!
//! Codec failures carry the path they concern. Filter and region errors
//! only occur when a stage is handed a buffer of the wrong depth.

use edgefill_filter::FilterError;
use edgefill_io::IoError;
use edgefill_region::RegionError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from running a pipeline stage
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input image could not be read or decoded
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The output image could not be encoded or written
    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// Edge extraction error
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Segmentation error
    #[error("region error: {0}")]
    Region(#[from] RegionError),
}

/// Result type for pipeline stages
pub type PipelineResult<T> = Result<T, PipelineError>;
