//! edgefill - Outline extraction and region posterization
//!
//! Turns a photograph into a posterized image in two stages:
//!
//! 1. **Outlines** - grayscale, Sobel gradient magnitude, and reassembly
//!    as RGBA with strong edges snapped to pure white
//! 2. **Regions** - every 4-connected pure-white region is flood filled
//!    with the next color of a deterministic palette
//!
//! The `extract-edges` and `fill-regions` binaries run the stages on fixed
//! file names (`test.png` -> `test2.png` -> `test4.png`).
//!
//! # Example
//!
//! ```
//! use edgefill::{EdgeOptions, FillOptions, Pix, PixelDepth, color, run_pipeline};
//!
//! let pix = Pix::new(16, 16, PixelDepth::Bit32).unwrap();
//! let mut pm = pix.into_mut();
//! pm.set_all_arbitrary(color::compose_rgb(40, 40, 40));
//!
//! let (out, seg) = run_pipeline(pm.into(), &EdgeOptions::default(), &FillOptions::default())
//!     .unwrap();
//! assert_eq!(out.width(), 16);
//! assert_eq!(seg.region_count(), 0);
//! ```

pub mod config;
pub mod pipeline;
mod pipeline_error;

// Re-export core types (primary data structures used everywhere)
pub use edgefill_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use edgefill_filter as filter;
pub use edgefill_io as io;
pub use edgefill_region as region;

pub use config::{EDGE_INPUT, EDGE_OUTPUT, EdgeOptions, FILL_OUTPUT, FillOptions, StageConfig};
pub use pipeline::{
    extract_outlines, posterize_regions, run_edge_stage, run_fill_stage, run_pipeline,
};
pub use pipeline_error::{PipelineError, PipelineResult};

use std::process::ExitCode;

/// Finish a command: log a failure once, with its whole cause chain, and
/// map the outcome to the process exit status.
pub fn exit_with<T>(result: anyhow::Result<T>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// `context: cause: cause ...` on one line.
pub fn failure_message(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// Initialize `env_logger` for the command entry points.
///
/// Defaults to `info`; `RUST_LOG` overrides it.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_failure_message_carries_whole_chain() {
        let cfg = StageConfig::new("/nonexistent/in.png", "/nonexistent/out.png");
        let err = run_edge_stage(&cfg, &EdgeOptions::default())
            .context("outline extraction failed")
            .unwrap_err();
        let msg = failure_message(&err);
        assert!(msg.starts_with("outline extraction failed: "));
        assert!(msg.contains("/nonexistent/in.png"));
        assert_eq!(msg.matches("outline extraction failed").count(), 1);
    }
}
