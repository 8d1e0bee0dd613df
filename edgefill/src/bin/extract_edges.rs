//! Stage 1: `test.png` -> `test2.png`

use anyhow::Context;
use edgefill::{EdgeOptions, StageConfig};
use std::process::ExitCode;

fn run() -> anyhow::Result<()> {
    let cfg = StageConfig::edge_stage();
    edgefill::run_edge_stage(&cfg, &EdgeOptions::default())
        .context("outline extraction failed")
}

fn main() -> ExitCode {
    edgefill::init_logger();
    edgefill::exit_with(run())
}
