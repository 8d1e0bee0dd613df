//! Stage 2: `test2.png` -> `test4.png`

use anyhow::Context;
use edgefill::{FillOptions, StageConfig};
use std::process::ExitCode;

fn run() -> anyhow::Result<()> {
    let cfg = StageConfig::fill_stage();
    let seg = edgefill::run_fill_stage(&cfg, &FillOptions::default())
        .context("region fill failed")?;
    if let Some(largest) = seg.largest() {
        log::info!(
            "largest region #{} at ({}, {}): {} pixels",
            largest.index,
            largest.seed.0,
            largest.seed.1,
            largest.area
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    edgefill::init_logger();
    edgefill::exit_with(run())
}
