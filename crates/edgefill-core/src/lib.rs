//! edgefill-core - Image buffers shared by the edgefill crates
//!
//! - [`Pix`] and [`PixMut`]: read-only and writable views of one buffer
//! - [`PixelDepth`]: 8 bpp intensity or 32 bpp RGBA
//! - [`Bounds`]: the rectangle a filled region covers
//! - [`color`]: packing of 32 bpp pixel words

pub mod bounds;
pub mod error;
pub mod pix;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth};

/// Packing of 32 bpp pixels.
///
/// A pixel word is `0xRRGGBBAA`: red in the most significant byte, alpha
/// in the least. All helpers work on that layout regardless of host
/// endianness.
pub mod color {
    /// Opaque white as stored in a 32 bpp image.
    pub const PURE_WHITE: u32 = 0xffff_ffff;

    /// The R, G and B bytes of a pixel word.
    pub const RGB_MASK: u32 = 0xffff_ff00;

    #[inline]
    pub fn red(pixel: u32) -> u8 {
        pixel.to_be_bytes()[0]
    }

    #[inline]
    pub fn green(pixel: u32) -> u8 {
        pixel.to_be_bytes()[1]
    }

    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        pixel.to_be_bytes()[2]
    }

    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        pixel.to_be_bytes()[3]
    }

    /// Opaque pixel from its color channels.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 0xff)
    }

    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([r, g, b, a])
    }

    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        let [r, g, b, _] = pixel.to_be_bytes();
        (r, g, b)
    }

    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = pixel.to_be_bytes();
        (r, g, b, a)
    }

    /// `pixel` recolored to `(r, g, b)` with its alpha byte unchanged.
    #[inline]
    pub fn with_rgb(pixel: u32, r: u8, g: u8, b: u8) -> u32 {
        (compose_rgba(r, g, b, 0) & RGB_MASK) | (pixel & !RGB_MASK)
    }

    /// R, G and B are all 255, whatever the alpha.
    #[inline]
    pub fn is_pure_white(pixel: u32) -> bool {
        pixel & RGB_MASK == RGB_MASK
    }

}
