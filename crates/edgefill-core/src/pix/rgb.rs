//! Conversion between `Pix` and interleaved 8-bit RGBA sample buffers
//!
//! Codecs work on byte rows; the pipeline works on packed words. These
//! two functions are the only crossing point.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Build a 32 bpp RGBA image from interleaved `R, G, B, A` bytes in
    /// row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty image and
    /// [`Error::BufferLength`] if `samples` is not `width * height * 4`
    /// bytes long.
    pub fn from_rgba_bytes(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        let pix = Pix::new(width, height, PixelDepth::Bit32)?;
        let expected = pix.pixel_count() as usize * 4;
        if samples.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: samples.len(),
            });
        }

        let mut pm: PixMut = pix.into_mut();
        for (word, px) in pm.data_mut().iter_mut().zip(samples.chunks_exact(4)) {
            *word = color::compose_rgba(px[0], px[1], px[2], px[3]);
        }
        Ok(pm.into())
    }

    /// Flatten a 32 bpp image into interleaved `R, G, B, A` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for 8 bpp images.
    pub fn to_rgba_bytes(&self) -> Result<Vec<u8>> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        Ok(self.data().iter().flat_map(|w| w.to_be_bytes()).collect())
    }
}
