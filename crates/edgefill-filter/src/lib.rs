//! edgefill-filter - Outline extraction filters
//!
//! This crate provides the first pipeline stage:
//!
//! - Grayscale conversion from RGBA
//! - Sobel edge magnitude with zeroed borders
//! - Reassembly of the edge image as RGBA with strong edges snapped to
//!   pure white

pub mod convert;
pub mod edge;
mod error;
pub mod kernel;
pub mod threshold;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convert::{GrayWeighting, LUMA_WEIGHTS, convert_to_gray};
pub use edge::sobel_edge;
pub use threshold::{
    WHITE_THRESHOLD, gray_to_rgba_snapped, gray_to_rgba_snapped_into, snap_intensity,
};
