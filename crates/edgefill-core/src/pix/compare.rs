//! Whole-image comparisons and pixel counts

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

impl Pix {
    /// Check whether two images have identical size, depth and pixels.
    pub fn equals(&self, other: &Pix) -> bool {
        if !self.sizes_equal(other) || self.depth() != other.depth() {
            return false;
        }
        (0..self.height()).all(|y| {
            (0..self.width())
                .all(|x| self.get_pixel_unchecked(x, y) == other.get_pixel_unchecked(x, y))
        })
    }

    /// Number of positions where the two images hold different values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] or [`Error::UnsupportedDepth`]
    /// when the images cannot be compared pixel for pixel.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<u64> {
        self.check_same_size(other)?;
        if self.depth() != other.depth() {
            return Err(Error::UnsupportedDepth(other.depth().bits()));
        }
        let mut n_diff = 0u64;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get_pixel_unchecked(x, y) != other.get_pixel_unchecked(x, y) {
                    n_diff += 1;
                }
            }
        }
        Ok(n_diff)
    }

    /// Count the pixels whose value satisfies `pred`.
    pub fn count_pixels_where(&self, mut pred: impl FnMut(u32) -> bool) -> u64 {
        let mut count = 0u64;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if pred(self.get_pixel_unchecked(x, y)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count nonzero pixels of an 8 bpp image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for 32 bpp images.
    pub fn count_nonzero_gray(&self) -> Result<u64> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        Ok(self.count_pixels_where(|v| v != 0))
    }
}
