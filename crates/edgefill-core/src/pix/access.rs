//! Reading and writing single pixels
//!
//! Values are returned as `u32` whatever the depth: the gray level at
//! 8 bpp, the packed `0xRRGGBBAA` word at 32 bpp. At 8 bpp, pixel 0 of a
//! row is bits 31..24 of its first word.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

#[inline]
fn read_word(line: &[u32], depth: PixelDepth, x: u32) -> u32 {
    match depth {
        PixelDepth::Bit8 => get_data_byte(line, x),
        PixelDepth::Bit32 => line[x as usize],
    }
}

#[inline]
fn write_word(line: &mut [u32], depth: PixelDepth, x: u32, val: u32) {
    match depth {
        PixelDepth::Bit8 => set_data_byte(line, x, val),
        PixelDepth::Bit32 => line[x as usize] = val,
    }
}

impl Pix {
    /// Pixel at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Pixel at (x, y). Panics outside the image.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read_word(self.row_data(y), self.depth(), x)
    }

    /// Color channels at (x, y); `None` outside the image or at 8 bpp.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Color and alpha at (x, y); `None` outside the image or at 8 bpp.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl PixMut {
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read_word(self.row_data(y), self.depth(), x)
    }

    /// Color channels at (x, y); `None` outside the image or at 8 bpp.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Store `val`, truncated to the depth. Panics outside the image.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let depth = self.depth();
        write_word(self.row_data_mut(y), depth, x, val & depth.max_value());
    }

    /// Store an opaque color. 32 bpp only.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_rgba(x, y, r, g, b, 255)
    }

    /// Store a color with alpha. 32 bpp only.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        for (index, len) in [(x, self.width()), (y, self.height())] {
            if index >= len {
                return Err(Error::IndexOutOfBounds {
                    index: index as usize,
                    len: len as usize,
                });
            }
        }
        Ok(())
    }
}

/// Byte `x` of an 8 bpp row.
#[inline]
pub fn get_data_byte(line: &[u32], x: u32) -> u32 {
    let word = line[(x >> 2) as usize];
    let shift = 24 - 8 * (x & 3);
    (word >> shift) & 0xff
}

/// Overwrite byte `x` of an 8 bpp row with the low byte of `val`.
#[inline]
pub fn set_data_byte(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 2) as usize];
    let shift = 24 - 8 * (x & 3);
    *word = (*word & !(0xff << shift)) | ((val & 0xff) << shift);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_packing_msb_first() {
        let mut line = [0u32; 2];
        set_data_byte(&mut line, 0, 0x11);
        set_data_byte(&mut line, 3, 0x44);
        set_data_byte(&mut line, 5, 0xab);
        assert_eq!(line[0], 0x1100_0044);
        assert_eq!(line[1], 0x00ab_0000);
        assert_eq!(get_data_byte(&line, 5), 0xab);
        set_data_byte(&mut line, 0, 0x22);
        assert_eq!(get_data_byte(&line, 0), 0x22);
        assert_eq!(get_data_byte(&line, 3), 0x44);
    }

    #[test]
    fn test_gray_get_set() {
        let mut pm = Pix::new(5, 3, PixelDepth::Bit8).unwrap().into_mut();
        pm.set_pixel(4, 2, 200).unwrap();
        pm.set_pixel(1, 0, 0x1ff).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(4, 2), Some(200));
        assert_eq!(pix.get_pixel(1, 0), Some(0xff));
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(5, 0), None);
        assert_eq!(pix.get_rgb(0, 0), None);
    }

    #[test]
    fn test_rgba_get_set() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit32).unwrap().into_mut();
        pm.set_rgb(2, 1, 10, 20, 30).unwrap();
        pm.set_rgba(0, 2, 1, 2, 3, 4).unwrap();
        assert!(pm.set_rgb(3, 0, 0, 0, 0).is_err());
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgba(2, 1), Some((10, 20, 30, 255)));
        assert_eq!(pix.get_rgba(0, 2), Some((1, 2, 3, 4)));
    }

    #[test]
    fn test_set_rgb_on_gray_fails() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit8).unwrap().into_mut();
        assert!(matches!(
            pm.set_rgb(0, 0, 1, 1, 1),
            Err(Error::UnsupportedDepth(8))
        ));
    }
}
