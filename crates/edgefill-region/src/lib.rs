//! edgefill-region - Region posterization for edgefill
//!
//! This crate provides the second pipeline stage:
//!
//! - **Flood fill** - Iterative 4-connected fill over pure-white pixels
//! - **Segmentation** - Scan-order discovery of every pure-white region,
//!   each painted with the next [`PaletteCursor`] color
//!
//! # Examples
//!
//! ```
//! use edgefill_core::{Pix, PixelDepth, color};
//! use edgefill_region::{PaletteCursor, segment_regions};
//!
//! let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
//! let mut pm = pix.into_mut();
//! pm.set_all_arbitrary(color::PURE_WHITE);
//!
//! let seg = segment_regions(&mut pm, PaletteCursor::default()).unwrap();
//! assert_eq!(seg.region_count(), 1);
//! assert_eq!(pm.get_rgb(3, 3), Some((0, 150, 0)));
//! ```

pub mod error;
pub mod mask;
pub mod palette;
pub mod seedfill;
pub mod segment;

pub use edgefill_core;

pub use error::{RegionError, RegionResult};
pub use mask::VisitedMask;
pub use palette::{DEFAULT_START, DEFAULT_STEP, PaletteCursor};
pub use seedfill::{FillStats, floodfill_color};
pub use segment::{Region, Segmentation, count_pure_white, segment_regions};
