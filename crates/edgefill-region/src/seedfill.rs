//! Stack-based flood fill over pure-white pixels
//!
//! The traversal keeps its own LIFO of candidate coordinates instead of
//! recursing, so region size is bounded only by heap memory. All four
//! neighbors of an accepted pixel are pushed as-is; bounds, the visited
//! flag and the pure-white test are checked when a candidate is popped.
//! The stack is a growable `Vec` because a pixel can be pushed more than
//! once before it is accepted.

use crate::error::{RegionError, RegionResult};
use crate::mask::VisitedMask;
use edgefill_core::{Bounds, PixMut, PixelDepth, color};

/// Outcome of filling one 4-connected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillStats {
    /// Number of pixels recolored
    pub area: u32,
    /// Smallest rectangle containing every recolored pixel
    pub bounds: Bounds,
}

/// Flood fill the pure-white region containing (seed_x, seed_y).
///
/// Every pixel reachable from the seed through 4-connected pure-white
/// pixels gets its R, G and B replaced by `rgb` (alpha is kept) and is
/// marked in `visited`. Non-white pixels act as walls. A seed that is
/// already visited or not pure white fills nothing.
///
/// # Returns
///
/// The number of pixels that were filled.
///
/// # Errors
///
/// Returns an error if `pix` is not 32 bpp, if `visited` has a different
/// size, or if the seed is out of bounds.
pub fn floodfill_color(
    pix: &mut PixMut,
    visited: &mut VisitedMask,
    seed_x: u32,
    seed_y: u32,
    rgb: (u8, u8, u8),
) -> RegionResult<u32> {
    check_fill_args(pix, visited)?;
    if seed_x >= pix.width() || seed_y >= pix.height() {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    }
    Ok(fill_region(pix, visited, seed_x, seed_y, rgb).area)
}

pub(crate) fn check_fill_args(pix: &PixMut, visited: &VisitedMask) -> RegionResult<()> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit RGBA",
            actual: pix.depth().bits(),
        });
    }
    if visited.width() != pix.width() || visited.height() != pix.height() {
        return Err(RegionError::MaskMismatch {
            mask_w: visited.width(),
            mask_h: visited.height(),
            width: pix.width(),
            height: pix.height(),
        });
    }
    Ok(())
}

/// Fill without argument checks. The seed must lie inside the image and
/// `visited` must match its size.
pub(crate) fn fill_region(
    pix: &mut PixMut,
    visited: &mut VisitedMask,
    seed_x: u32,
    seed_y: u32,
    (r, g, b): (u8, u8, u8),
) -> FillStats {
    let width = i64::from(pix.width());
    let height = i64::from(pix.height());

    let mut area = 0u32;
    let mut bounds = Bounds::default();
    let mut stack: Vec<(i64, i64)> = vec![(i64::from(seed_x), i64::from(seed_y))];

    while let Some((cx, cy)) = stack.pop() {
        if cx < 0 || cx >= width || cy < 0 || cy >= height {
            continue;
        }
        let (x, y) = (cx as u32, cy as u32);
        if visited.is_visited(x, y) {
            continue;
        }
        let px = pix.get_pixel_unchecked(x, y);
        if !color::is_pure_white(px) {
            continue;
        }

        pix.set_pixel_unchecked(x, y, color::with_rgb(px, r, g, b));
        visited.mark(x, y);
        area += 1;
        bounds.include(x, y);

        stack.push((cx + 1, cy));
        stack.push((cx - 1, cy));
        stack.push((cx, cy + 1));
        stack.push((cx, cy - 1));
    }

    FillStats { area, bounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgefill_core::Pix;

    fn white(w: u32, h: u32) -> PixMut {
        let mut pm = Pix::new(w, h, PixelDepth::Bit32).unwrap().into_mut();
        pm.set_all_arbitrary(color::PURE_WHITE);
        pm
    }

    #[test]
    fn test_fill_entire_white_image() {
        let mut pm = white(10, 10);
        let mut visited = VisitedMask::new(10, 10);
        let n = floodfill_color(&mut pm, &mut visited, 5, 5, (1, 2, 3)).unwrap();
        assert_eq!(n, 100);
        assert_eq!(visited.count(), 100);
        assert_eq!(pm.get_rgb(0, 9), Some((1, 2, 3)));
    }

    #[test]
    fn test_wall_blocks_fill() {
        let mut pm = white(5, 3);
        for y in 0..3 {
            pm.set_rgb(2, y, 0, 0, 0).unwrap();
        }
        let mut visited = VisitedMask::new(5, 3);
        let n = floodfill_color(&mut pm, &mut visited, 0, 0, (9, 9, 9)).unwrap();
        assert_eq!(n, 6);
        assert_eq!(pm.get_rgb(1, 2), Some((9, 9, 9)));
        assert_eq!(pm.get_rgb(2, 1), Some((0, 0, 0)));
        assert_eq!(pm.get_rgb(3, 0), Some((255, 255, 255)));
        assert!(!visited.is_visited(3, 0));
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        let mut pm = Pix::new(2, 2, PixelDepth::Bit32).unwrap().into_mut();
        pm.set_pixel(0, 0, color::PURE_WHITE).unwrap();
        pm.set_pixel(1, 1, color::PURE_WHITE).unwrap();
        let mut visited = VisitedMask::new(2, 2);
        let n = floodfill_color(&mut pm, &mut visited, 0, 0, (5, 5, 5)).unwrap();
        assert_eq!(n, 1);
        assert_eq!(pm.get_pixel(1, 1), Some(color::PURE_WHITE));
    }

    #[test]
    fn test_alpha_is_preserved() {
        let mut pm = Pix::new(1, 1, PixelDepth::Bit32).unwrap().into_mut();
        pm.set_rgba(0, 0, 255, 255, 255, 80).unwrap();
        let mut visited = VisitedMask::new(1, 1);
        floodfill_color(&mut pm, &mut visited, 0, 0, (7, 8, 9)).unwrap();
        assert_eq!(
            pm.get_pixel(0, 0).map(color::extract_rgba),
            Some((7, 8, 9, 80))
        );
    }

    #[test]
    fn test_non_white_or_visited_seed_fills_nothing() {
        let mut pm = white(3, 3);
        pm.set_rgb(1, 1, 254, 255, 255).unwrap();
        let mut visited = VisitedMask::new(3, 3);
        assert_eq!(
            floodfill_color(&mut pm, &mut visited, 1, 1, (0, 0, 0)).unwrap(),
            0
        );
        visited.mark(0, 0);
        assert_eq!(
            floodfill_color(&mut pm, &mut visited, 0, 0, (0, 0, 0)).unwrap(),
            0
        );
    }

    #[test]
    fn test_fill_color_that_is_white_terminates() {
        let mut pm = white(4, 4);
        let mut visited = VisitedMask::new(4, 4);
        let n = floodfill_color(&mut pm, &mut visited, 0, 0, (255, 255, 255)).unwrap();
        assert_eq!(n, 16);
    }

    #[test]
    fn test_large_region_does_not_overflow() {
        let mut pm = white(1000, 1000);
        let mut visited = VisitedMask::new(1000, 1000);
        let n = floodfill_color(&mut pm, &mut visited, 999, 999, (1, 1, 1)).unwrap();
        assert_eq!(n, 1_000_000);
    }

    #[test]
    fn test_bounds_of_l_shape() {
        let mut pm = Pix::new(6, 6, PixelDepth::Bit32).unwrap().into_mut();
        for y in 1..5 {
            pm.set_pixel(1, y, color::PURE_WHITE).unwrap();
        }
        for x in 1..4 {
            pm.set_pixel(x, 4, color::PURE_WHITE).unwrap();
        }
        let mut visited = VisitedMask::new(6, 6);
        let stats = fill_region(&mut pm, &mut visited, 1, 1, (0, 0, 1));
        assert_eq!(stats.area, 6);
        assert_eq!(stats.bounds, Bounds::new(1, 1, 3, 4));
    }

    #[test]
    fn test_argument_errors() {
        let mut pm = white(3, 3);
        let mut visited = VisitedMask::new(3, 3);
        assert!(matches!(
            floodfill_color(&mut pm, &mut visited, 3, 0, (0, 0, 0)),
            Err(RegionError::InvalidSeed { x: 3, y: 0 })
        ));

        let mut small = VisitedMask::new(2, 3);
        assert!(matches!(
            floodfill_color(&mut pm, &mut small, 0, 0, (0, 0, 0)),
            Err(RegionError::MaskMismatch { .. })
        ));

        let mut gray = Pix::new(3, 3, PixelDepth::Bit8).unwrap().into_mut();
        assert!(matches!(
            floodfill_color(&mut gray, &mut visited, 0, 0, (0, 0, 0)),
            Err(RegionError::UnsupportedDepth { .. })
        ));
    }
}
