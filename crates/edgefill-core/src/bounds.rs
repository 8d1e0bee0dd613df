//! Axis-aligned pixel rectangles

/// A rectangle of pixels, `[x, x + w) × [y, y + h)`.
///
/// A small `Copy` type since it is frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Bounds {
    /// Create a new rectangle
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// The 1x1 rectangle covering a single pixel
    pub const fn point(x: u32, y: u32) -> Self {
        Self { x, y, w: 1, h: 1 }
    }

    /// Grow to cover pixel (x, y).
    pub fn include(&mut self, x: u32, y: u32) {
        if self.w == 0 || self.h == 0 {
            *self = Self::point(x, y);
            return;
        }
        let right = self.right().max(x + 1);
        let bottom = self.bottom().max(y + 1);
        self.x = self.x.min(x);
        self.y = self.y.min(y);
        self.w = right - self.x;
        self.h = bottom - self.y;
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}
