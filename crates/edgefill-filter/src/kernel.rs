//! Convolution kernels
//!
//! Integer kernels with an explicit center, stored row-major. Only the
//! Sobel pair used by edge detection is built here.

/// A 2D integer convolution kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    width: u32,
    height: u32,
    /// Center column
    cx: u32,
    /// Center row
    cy: u32,
    /// Row-major coefficients
    data: Vec<i32>,
}

impl Kernel {
    fn fixed3(data: [i32; 9]) -> Self {
        Self {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: data.to_vec(),
        }
    }

    /// Sobel kernel responding to horizontal intensity change (Gx).
    pub fn sobel_x() -> Self {
        Self::fixed3([-1, 0, 1, -2, 0, 2, -1, 0, 1])
    }

    /// Sobel kernel responding to vertical intensity change (Gy).
    pub fn sobel_y() -> Self {
        Self::fixed3([-1, -2, -1, 0, 0, 0, 1, 2, 1])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center as (column, row).
    #[inline]
    pub fn center(&self) -> (u32, u32) {
        (self.cx, self.cy)
    }

    /// Coefficient at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }
}
