//! Sobel edge magnitude
//!
//! Every interior pixel gets `min(255, round(sqrt(gx² + gy²)))` from the
//! 3x3 Sobel pair. Pixels on the outermost rows and columns are never
//! used as kernel centers and are written as 0.

use crate::kernel::Kernel;
use crate::{FilterError, FilterResult};
use edgefill_core::{Pix, PixelDepth};

/// Apply Sobel edge detection to an 8 bpp image.
///
/// The output has the same dimensions as the input. Images narrower or
/// shorter than 3 pixels have no interior and come back all zero.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedDepth`] if `pix` is not 8 bpp.
pub fn sobel_edge(pix: &Pix) -> FilterResult<Pix> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8-bit grayscale",
            actual: pix.depth().bits(),
        });
    }

    let kx = Kernel::sobel_x();
    let ky = Kernel::sobel_y();
    let (w, h) = (pix.width(), pix.height());
    let (cx, cy) = kx.center();
    // Pixels closer to an edge than the kernel reaches stay 0
    let (right, bottom) = (kx.width() - cx - 1, kx.height() - cy - 1);

    let mut out = pix.create_template().into_mut();
    if w <= cx + right || h <= cy + bottom {
        return Ok(out.into());
    }

    for y in cy..h - bottom {
        for x in cx..w - right {
            let gx = response(pix, &kx, x, y);
            let gy = response(pix, &ky, x, y);
            out.set_pixel_unchecked(x, y, magnitude(gx, gy));
        }
    }

    Ok(out.into())
}

/// Correlation of `kernel` with the image, kernel center on (x, y).
///
/// The caller guarantees the whole kernel footprint is inside the image.
#[inline]
fn response(pix: &Pix, kernel: &Kernel, x: u32, y: u32) -> i32 {
    let (cx, cy) = kernel.center();
    let mut acc = 0i32;
    for j in 0..kernel.height() {
        for i in 0..kernel.width() {
            if let Some(k) = kernel.get(i, j) {
                let v = pix.get_pixel_unchecked(x + i - cx, y + j - cy) as i32;
                acc += v * k;
            }
        }
    }
    acc
}

#[inline]
fn magnitude(gx: i32, gy: i32) -> u32 {
    let sq = f64::from(gx * gx + gy * gy);
    sq.sqrt().round().min(255.0) as u32
}
