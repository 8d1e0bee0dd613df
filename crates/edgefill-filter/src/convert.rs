//! RGBA to grayscale conversion

use crate::{FilterError, FilterResult};
use edgefill_core::{Pix, PixelDepth, color};

/// Luma coefficients for red, green and blue.
pub const LUMA_WEIGHTS: (f64, f64, f64) = (0.299, 0.587, 0.114);

/// How the three luma terms are fed.
///
/// `RedOnly` applies all three coefficients to the red channel, so the
/// result tracks red alone and can land one below it after truncation
/// (e.g. red 1 gives 0). This is the behavior the outline extractor was
/// tuned against and it is the default. `Luma` is the conventional
/// weighted sum of R, G and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayWeighting {
    #[default]
    RedOnly,
    Luma,
}

impl GrayWeighting {
    /// Intensity of one RGB triple, truncated toward zero.
    #[inline]
    pub fn intensity(self, r: u8, g: u8, b: u8) -> u8 {
        let (wr, wg, wb) = LUMA_WEIGHTS;
        let (r, g, b) = match self {
            GrayWeighting::RedOnly => (r, r, r),
            GrayWeighting::Luma => (r, g, b),
        };
        let v = wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b);
        v as u8
    }
}

/// Convert a 32 bpp image to an 8 bpp intensity image of the same size.
///
/// Alpha is ignored.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedDepth`] if `pix` is not 32 bpp.
pub fn convert_to_gray(pix: &Pix, weighting: GrayWeighting) -> FilterResult<Pix> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(FilterError::UnsupportedDepth {
            expected: "32-bit RGBA",
            actual: pix.depth().bits(),
        });
    }

    let mut out = pix.create_template_with_depth(PixelDepth::Bit8).into_mut();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
            out.set_pixel_unchecked(x, y, u32::from(weighting.intensity(r, g, b)));
        }
    }
    Ok(out.into())
}
