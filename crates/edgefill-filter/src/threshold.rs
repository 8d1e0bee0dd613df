//! Reassemble an edge image as RGBA, snapping strong edges to white
//!
//! Segmentation seeds only on exact pure white, so anything at or above
//! the threshold is written as `(255, 255, 255, 255)` and everything else
//! as an opaque gray `(v, v, v, 255)`.

use crate::{FilterError, FilterResult};
use edgefill_core::{Pix, PixMut, PixelDepth, color};

/// Edge intensity at or above which a pixel becomes pure white.
pub const WHITE_THRESHOLD: u8 = 200;

/// RGBA value for one edge intensity.
#[inline]
pub fn snap_intensity(v: u8, threshold: u8) -> u32 {
    if v >= threshold {
        color::PURE_WHITE
    } else {
        color::compose_rgb(v, v, v)
    }
}

/// Expand an 8 bpp edge image into a new 32 bpp RGBA image.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedDepth`] if `gray` is not 8 bpp.
pub fn gray_to_rgba_snapped(gray: &Pix, threshold: u8) -> FilterResult<Pix> {
    let mut out = gray.create_template_with_depth(PixelDepth::Bit32).into_mut();
    gray_to_rgba_snapped_into(gray, &mut out, threshold)?;
    Ok(out.into())
}

/// Expand an 8 bpp edge image into an existing 32 bpp buffer of the same
/// size, overwriting every pixel. Returns the number of pixels snapped to
/// white.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedDepth`] for wrong depths and
/// [`FilterError::Core`] if the sizes differ.
pub fn gray_to_rgba_snapped_into(
    gray: &Pix,
    dest: &mut PixMut,
    threshold: u8,
) -> FilterResult<u64> {
    if gray.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8-bit grayscale",
            actual: gray.depth().bits(),
        });
    }
    if dest.depth() != PixelDepth::Bit32 {
        return Err(FilterError::UnsupportedDepth {
            expected: "32-bit RGBA",
            actual: dest.depth().bits(),
        });
    }
    if gray.width() != dest.width() || gray.height() != dest.height() {
        return Err(edgefill_core::Error::DimensionMismatch {
            expected: (gray.width(), gray.height()),
            actual: (dest.width(), dest.height()),
        }
        .into());
    }

    dest.set_spp(4);
    let mut snapped = 0u64;
    for y in 0..gray.height() {
        for x in 0..gray.width() {
            let v = gray.get_pixel_unchecked(x, y) as u8;
            if v >= threshold {
                snapped += 1;
            }
            dest.set_pixel_unchecked(x, y, snap_intensity(v, threshold));
        }
    }
    log::debug!(
        "snapped {} of {} pixels to white (threshold {})",
        snapped,
        u64::from(gray.width()) * u64::from(gray.height()),
        threshold
    );
    Ok(snapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_intensity() {
        assert_eq!(snap_intensity(0, WHITE_THRESHOLD), color::compose_rgb(0, 0, 0));
        assert_eq!(
            snap_intensity(WHITE_THRESHOLD - 1, WHITE_THRESHOLD),
            color::compose_rgb(199, 199, 199)
        );
        assert_eq!(snap_intensity(WHITE_THRESHOLD, WHITE_THRESHOLD), color::PURE_WHITE);
        assert_eq!(snap_intensity(255, WHITE_THRESHOLD), color::PURE_WHITE);
    }

    #[test]
    fn test_full_intensity_stays_white_for_any_threshold() {
        for t in [0u8, 1, 128, 254, 255] {
            assert_eq!(snap_intensity(255, t), color::PURE_WHITE);
        }
    }

    #[test]
    fn test_into_overwrites_dest_and_counts() {
        let mut gm = Pix::new(3, 1, PixelDepth::Bit8).unwrap().into_mut();
        gm.set_pixel(0, 0, 10).unwrap();
        gm.set_pixel(1, 0, 220).unwrap();
        gm.set_pixel(2, 0, 255).unwrap();
        let gray: Pix = gm.into();

        let mut dest = Pix::new(3, 1, PixelDepth::Bit32).unwrap().into_mut();
        dest.set_all_arbitrary(color::compose_rgba(1, 2, 3, 4));
        let n = gray_to_rgba_snapped_into(&gray, &mut dest, WHITE_THRESHOLD).unwrap();
        assert_eq!(n, 2);
        let out: Pix = dest.into();
        assert_eq!(out.get_rgba(0, 0), Some((10, 10, 10, 255)));
        assert_eq!(out.get_rgba(1, 0), Some((255, 255, 255, 255)));
        assert_eq!(out.get_rgba(2, 0), Some((255, 255, 255, 255)));
    }

    #[test]
    fn test_size_mismatch() {
        let gray = Pix::new(3, 1, PixelDepth::Bit8).unwrap();
        let mut dest = Pix::new(1, 3, PixelDepth::Bit32).unwrap().into_mut();
        assert!(matches!(
            gray_to_rgba_snapped_into(&gray, &mut dest, WHITE_THRESHOLD),
            Err(FilterError::Core(_))
        ));
    }
}
