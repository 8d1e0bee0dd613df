//! Region segmentation and posterization
//!
//! Partitions the pure-white pixels of an RGBA image into maximal
//! 4-connected regions and paints each with the next palette color.
//! Regions are discovered in row-major scan order (outer y, inner x),
//! so the color a region receives depends only on how many regions
//! start before it in that order.

use crate::error::RegionResult;
use crate::mask::VisitedMask;
use crate::palette::PaletteCursor;
use crate::seedfill::{check_fill_args, fill_region};
use edgefill_core::{Bounds, Pix, PixMut, color};

/// One filled region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Zero-based position in scan order
    pub index: u32,
    /// First pixel of the region met by the scan
    pub seed: (u32, u32),
    /// Fill color applied to the region
    pub color: (u8, u8, u8),
    /// Number of pixels in the region
    pub area: u32,
    /// Bounding box of the region
    pub bounds: Bounds,
}

/// Result of one segmentation run
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Regions in scan order
    pub regions: Vec<Region>,
    /// Pixels filled across all regions
    pub filled: u64,
    /// Visited flags at the end of the run
    pub visited: VisitedMask,
    /// Palette position after the last region
    pub next_color: (u8, u8, u8),
}

impl Segmentation {
    /// Number of regions found.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// The largest region by area, first in scan order on ties.
    pub fn largest(&self) -> Option<&Region> {
        self.regions
            .iter()
            .reduce(|best, r| if r.area > best.area { r } else { best })
    }
}

/// Count pixels whose R, G and B are all 255.
pub fn count_pure_white(pix: &Pix) -> u64 {
    pix.count_pixels_where(color::is_pure_white)
}

/// Segment and recolor the pure-white regions of `pix` in place.
///
/// Each unvisited pure-white pixel met by the row-major scan seeds a
/// flood fill with the cursor's current color; the cursor advances once
/// per region. Pixels that are not pure white are left untouched.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`](crate::RegionError) if
/// `pix` is not 32 bpp.
pub fn segment_regions(
    pix: &mut PixMut,
    mut palette: PaletteCursor,
) -> RegionResult<Segmentation> {
    let width = pix.width();
    let height = pix.height();
    let mut visited = VisitedMask::new(width, height);
    check_fill_args(pix, &visited)?;

    let mut regions = Vec::new();
    let mut filled = 0u64;

    for y in 0..height {
        for x in 0..width {
            if visited.is_visited(x, y) {
                continue;
            }
            if !color::is_pure_white(pix.get_pixel_unchecked(x, y)) {
                continue;
            }
            let rgb = palette.current();
            let stats = fill_region(pix, &mut visited, x, y, rgb);
            let region = Region {
                index: regions.len() as u32,
                seed: (x, y),
                color: rgb,
                area: stats.area,
                bounds: stats.bounds,
            };
            log::trace!(
                "region {} seed=({}, {}) area={} color={:?}",
                region.index,
                x,
                y,
                region.area,
                rgb
            );
            filled += u64::from(stats.area);
            regions.push(region);
            palette.advance();
        }
    }

    log::debug!(
        "segmented {}x{}: {} regions, {} pixels filled",
        width,
        height,
        regions.len(),
        filled
    );

    Ok(Segmentation {
        regions,
        filled,
        visited,
        next_color: palette.current(),
    })
}
