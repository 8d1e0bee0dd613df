//! Stage configuration
//!
//! Each stage has an options struct with the documented defaults and
//! `with_*` setters. The command entry points use the defaults as-is.

use edgefill_filter::{GrayWeighting, WHITE_THRESHOLD};
use edgefill_region::PaletteCursor;
use std::path::PathBuf;

/// Photograph read by the edge stage.
pub const EDGE_INPUT: &str = "test.png";
/// Edge image written by the edge stage and read by the fill stage.
pub const EDGE_OUTPUT: &str = "test2.png";
/// Posterized image written by the fill stage.
pub const FILL_OUTPUT: &str = "test4.png";

/// Options for outline extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOptions {
    /// How RGB is reduced to intensity before the Sobel pass
    pub weighting: GrayWeighting,
    /// Edge intensity at or above which a pixel becomes pure white
    pub white_threshold: u8,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            weighting: GrayWeighting::default(),
            white_threshold: WHITE_THRESHOLD,
        }
    }
}

impl EdgeOptions {
    /// Set the grayscale weighting
    pub fn with_weighting(mut self, weighting: GrayWeighting) -> Self {
        self.weighting = weighting;
        self
    }
}

/// Options for region posterization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillOptions {
    /// Palette the first region starts from
    pub palette: PaletteCursor,
}

impl FillOptions {
    /// Set the palette
    pub fn with_palette(mut self, palette: PaletteCursor) -> Self {
        self.palette = palette;
        self
    }
}

/// Input and output files of one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageConfig {
    /// Image to read
    pub input: PathBuf,
    /// Image to write
    pub output: PathBuf,
}

impl StageConfig {
    /// Create a stage configuration for arbitrary paths
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// `test.png` -> `test2.png`
    pub fn edge_stage() -> Self {
        Self::new(EDGE_INPUT, EDGE_OUTPUT)
    }

    /// `test2.png` -> `test4.png`
    pub fn fill_stage() -> Self {
        Self::new(EDGE_OUTPUT, FILL_OUTPUT)
    }
}
