//! Image buffers
//!
//! Every stage reads and writes [`Pix`] values of one of two depths:
//! 8 bpp for intensity and edge maps, 32 bpp RGBA for photographs and
//! posterized output.
//!
//! Pixels live in one `Vec<u32>`. A row occupies `wpl` consecutive words
//! and never shares a word with the next row. At 8 bpp the leftmost pixel
//! of a word is its most significant byte; at 32 bpp a word is one pixel
//! laid out as `0xRRGGBBAA`.
//!
//! A `Pix` is a cheap `Arc` handle and cannot be written. Writing goes
//! through the uniquely owned [`PixMut`], obtained with
//! [`Pix::try_into_mut`], [`Pix::into_mut`] or [`Pix::to_mut`], and turned
//! back into a `Pix` with `Into<Pix>`.

mod access;
pub mod compare;
mod rgb;

pub use access::{get_data_byte, set_data_byte};

use crate::error::{Error, Result};
use std::ops::Range;
use std::sync::Arc;

/// Bits per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// Single-channel intensity
    Bit8 = 8,
    /// RGBA, one byte per channel
    Bit32 = 32,
}

impl PixelDepth {
    #[inline]
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Largest value a pixel of this depth can hold.
    #[inline]
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit8 => 0xff,
            PixelDepth::Bit32 => u32::MAX,
        }
    }

    /// Pixels packed into one 32-bit word.
    #[inline]
    fn per_word(self) -> u32 {
        32 / self.bits()
    }

    #[inline]
    fn samples(self) -> u32 {
        match self {
            PixelDepth::Bit8 => 1,
            PixelDepth::Bit32 => 4,
        }
    }
}

#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    spp: u32,
    wpl: u32,
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32, depth: PixelDepth) -> Self {
        let wpl = width.div_ceil(depth.per_word());
        Self {
            width,
            height,
            depth,
            spp: depth.samples(),
            wpl,
            data: vec![0; wpl as usize * height as usize],
        }
    }

    /// Word range of row `y`. Slicing with it panics if `y >= height`.
    #[inline]
    fn row_range(&self, y: u32) -> Range<usize> {
        let start = y as usize * self.wpl as usize;
        start..start + self.wpl as usize
    }
}

/// Shared, read-only image
///
/// # Examples
///
/// ```
/// use edgefill_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(320, 200, PixelDepth::Bit32).unwrap();
/// assert_eq!((pix.width(), pix.height(), pix.spp()), (320, 200, 4));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Allocate an all-zero image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] when either side is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self::from_data(PixData::zeroed(width, height, depth)))
    }

    fn from_data(data: PixData) -> Self {
        Pix {
            inner: Arc::new(data),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Samples per pixel: 1 for gray, 4 for RGBA.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// 32-bit words per row.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.inner.width) * u64::from(self.inner.height)
    }

    /// All rows, packed.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Words of row `y`.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row_range(y)]
    }

    /// All-zero image of the same size at `depth`.
    pub fn create_template_with_depth(&self, depth: PixelDepth) -> Self {
        Self::from_data(PixData::zeroed(self.width(), self.height(), depth))
    }

    /// All-zero image of the same size and depth.
    pub fn create_template(&self) -> Self {
        self.create_template_with_depth(self.depth())
    }

    pub fn sizes_equal(&self, other: &Pix) -> bool {
        (self.width(), self.height()) == (other.width(), other.height())
    }

    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] when `other` differs in width or height.
    pub fn check_same_size(&self, other: &Pix) -> Result<()> {
        if self.sizes_equal(other) {
            return Ok(());
        }
        Err(Error::DimensionMismatch {
            expected: (self.width(), self.height()),
            actual: (other.width(), other.height()),
        })
    }

    /// A new `Pix` with its own copy of the pixels.
    pub fn deep_clone(&self) -> Self {
        Self::from_data(PixData::clone(&self.inner))
    }

    /// Take the buffer for writing if no other handle shares it;
    /// otherwise hand `self` back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        Arc::try_unwrap(self.inner)
            .map(|inner| PixMut { inner })
            .map_err(|inner| Pix { inner })
    }

    /// Take the buffer for writing, copying it only when it is shared.
    pub fn into_mut(self) -> PixMut {
        self.try_into_mut().unwrap_or_else(|shared| shared.to_mut())
    }

    /// Writable copy; `self` is left untouched.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData::clone(&self.inner),
        }
    }
}

/// Uniquely owned, writable image
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    pub fn set_spp(&mut self, spp: u32) {
        self.inner.spp = spp;
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Words of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row_range(y)]
    }

    /// Writable words of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let range = self.inner.row_range(y);
        &mut self.inner.data[range]
    }

    /// Fill every word with `val`. At 32 bpp this paints every pixel.
    pub fn set_all_arbitrary(&mut self, val: u32) {
        self.inner.data.fill(val);
    }

    /// Paint every pixel of an 8 bpp image with `grayval`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedDepth`] at 32 bpp.
    pub fn set_all_gray(&mut self, grayval: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.inner.data.fill(u32::from_ne_bytes([grayval; 4]));
        Ok(())
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix::from_data(pm.inner)
    }
}
