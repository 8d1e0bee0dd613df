//! edgefill-test - Shared helpers for the `tests/*_reg.rs` files
//!
//! [`RegParams`] numbers and collects checks; the `make_*` builders draw
//! small synthetic images. With `REGTEST_MODE=display` the images handed
//! to [`RegParams::write_pix`] are saved under `tests/regout/` at the
//! workspace root for inspection.
//!
//! ```
//! use edgefill_test::{RegParams, make_from_ascii};
//!
//! let mut rp = RegParams::new("segment");
//! let pix = make_from_ascii(&["W.W", "W.W"]);
//! rp.compare_values(6.0, pix.pixel_count() as f64, 0.0);
//! let whites = pix.count_pixels_where(edgefill_core::color::is_pure_white);
//! rp.compare_values(4.0, whites as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use edgefill_core::{Pix, PixelDepth, color};

/// `tests/regout` under the workspace root (two levels above this crate)
pub fn regout_dir() -> String {
    format!("{}/../../tests/regout", env!("CARGO_MANIFEST_DIR"))
}

/// Create a uniform 32 bpp opaque image
pub fn make_uniform_rgb(w: u32, h: u32, r: u8, g: u8, b: u8) -> Pix {
    let mut pm = Pix::new(w, h, PixelDepth::Bit32).unwrap().into_mut();
    pm.set_all_arbitrary(color::compose_rgb(r, g, b));
    pm.into()
}

/// Create a uniform 8 bpp image
pub fn make_uniform_gray(w: u32, h: u32, val: u8) -> Pix {
    let mut pm = Pix::new(w, h, PixelDepth::Bit8).unwrap().into_mut();
    pm.set_all_gray(val).unwrap();
    pm.into()
}

/// Create a 32 bpp image with `fill` inside `[x0,x1) × [y0,y1)` and
/// `background` everywhere else
pub fn make_rect_rgb(
    w: u32,
    h: u32,
    (x0, y0, x1, y1): (u32, u32, u32, u32),
    fill: u32,
    background: u32,
) -> Pix {
    let mut pm = Pix::new(w, h, PixelDepth::Bit32).unwrap().into_mut();
    pm.set_all_arbitrary(background);
    for y in y0..y1 {
        for x in x0..x1 {
            pm.set_pixel_unchecked(x, y, fill);
        }
    }
    pm.into()
}

/// Build a 32 bpp image from rows of text: `W` is pure white, `.` is
/// black, `g` is mid gray. All rows must have the same length.
pub fn make_from_ascii(rows: &[&str]) -> Pix {
    let h = rows.len() as u32;
    let w = rows[0].len() as u32;
    let mut pm = Pix::new(w, h, PixelDepth::Bit32).unwrap().into_mut();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as u32, w, "ragged ascii image");
        for (x, ch) in row.chars().enumerate() {
            let px = match ch {
                'W' => color::PURE_WHITE,
                'g' => color::compose_rgb(128, 128, 128),
                _ => color::compose_rgb(0, 0, 0),
            };
            pm.set_pixel_unchecked(x as u32, y as u32, px);
        }
    }
    pm.into()
}
