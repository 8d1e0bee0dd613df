//! The two pipeline stages, in memory and file to file
//!
//! Stage 1 turns a photograph into an outline image: grayscale, Sobel,
//! then back to RGBA with strong edges snapped to pure white. Stage 2
//! paints every pure-white region of such an image with its own color.
//! Each stage finishes with its input before the next one starts.

use crate::config::{EdgeOptions, FillOptions, StageConfig};
use crate::pipeline_error::{PipelineError, PipelineResult};
use edgefill_core::Pix;
use edgefill_filter::{convert_to_gray, gray_to_rgba_snapped_into, sobel_edge};
use edgefill_region::{Segmentation, segment_regions};

/// Stage 1 in memory: photograph to outline image.
///
/// The RGBA storage of `pix` is reused for the output when it is not
/// shared. Output pixels are opaque gray `(v, v, v, 255)` or pure white.
pub fn extract_outlines(pix: Pix, opts: &EdgeOptions) -> PipelineResult<Pix> {
    let edges = {
        let gray = convert_to_gray(&pix, opts.weighting)?;
        sobel_edge(&gray)?
    };

    let mut out = pix.into_mut();
    let snapped = gray_to_rgba_snapped_into(&edges, &mut out, opts.white_threshold)?;
    log::debug!(
        "outlines: {} edge pixels at or above {}",
        snapped,
        opts.white_threshold
    );
    Ok(out.into())
}

/// Stage 2 in memory: paint each pure-white region of `pix`.
pub fn posterize_regions(pix: Pix, opts: &FillOptions) -> PipelineResult<(Pix, Segmentation)> {
    let mut pm = pix.into_mut();
    let seg = segment_regions(&mut pm, opts.palette)?;
    Ok((pm.into(), seg))
}

/// Both stages back to back, without the intermediate file.
pub fn run_pipeline(
    pix: Pix,
    edge: &EdgeOptions,
    fill: &FillOptions,
) -> PipelineResult<(Pix, Segmentation)> {
    let outlines = extract_outlines(pix, edge)?;
    posterize_regions(outlines, fill)
}

fn read(cfg: &StageConfig) -> PipelineResult<Pix> {
    edgefill_io::read_image(&cfg.input).map_err(|source| PipelineError::Read {
        path: cfg.input.clone(),
        source,
    })
}

fn write(cfg: &StageConfig, pix: &Pix) -> PipelineResult<()> {
    edgefill_io::write_image(pix, &cfg.output).map_err(|source| PipelineError::Write {
        path: cfg.output.clone(),
        source,
    })
}

/// Stage 1 file to file.
pub fn run_edge_stage(cfg: &StageConfig, opts: &EdgeOptions) -> PipelineResult<()> {
    let pix = read(cfg)?;
    let (w, h) = (pix.width(), pix.height());
    let outlines = extract_outlines(pix, opts)?;
    write(cfg, &outlines)?;
    log::info!(
        "extracted outlines {} -> {} ({}x{})",
        cfg.input.display(),
        cfg.output.display(),
        w,
        h
    );
    Ok(())
}

/// Stage 2 file to file. Returns the segmentation summary.
pub fn run_fill_stage(cfg: &StageConfig, opts: &FillOptions) -> PipelineResult<Segmentation> {
    let pix = read(cfg)?;
    let (posterized, seg) = posterize_regions(pix, opts)?;
    write(cfg, &posterized)?;
    log::info!(
        "filled {} regions ({} pixels) {} -> {}",
        seg.region_count(),
        seg.filled,
        cfg.input.display(),
        cfg.output.display()
    );
    Ok(seg)
}
