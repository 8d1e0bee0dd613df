//! Deterministic fill-color sequence
//!
//! The cursor starts at a fixed color and adds a fixed step to each
//! channel after every region, wrapping modulo 256. Colors therefore
//! depend only on how many regions came before in scan order.

/// Starting color of the default palette.
pub const DEFAULT_START: (u8, u8, u8) = (0, 150, 0);

/// Per-region step of the default palette.
pub const DEFAULT_STEP: (u8, u8, u8) = (100, 0, 20);

/// Produces the fill color for each successive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteCursor {
    current: (u8, u8, u8),
    step: (u8, u8, u8),
}

impl Default for PaletteCursor {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_STEP)
    }
}

impl PaletteCursor {
    /// Create a cursor at `start` that advances by `step`.
    pub fn new(start: (u8, u8, u8), step: (u8, u8, u8)) -> Self {
        Self {
            current: start,
            step,
        }
    }

    /// Color for the next region.
    #[inline]
    pub fn current(&self) -> (u8, u8, u8) {
        self.current
    }

    /// Move to the following color.
    pub fn advance(&mut self) {
        let (r, g, b) = self.current;
        let (dr, dg, db) = self.step;
        self.current = (r.wrapping_add(dr), g.wrapping_add(dg), b.wrapping_add(db));
    }
}

impl Iterator for PaletteCursor {
    type Item = (u8, u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.current;
        self.advance();
        Some(c)
    }
}
