//! Visited-pixel bookkeeping for one segmentation run

/// One flag per pixel, stored in a single row-major arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMask {
    width: u32,
    height: u32,
    flags: Vec<bool>,
}

impl VisitedMask {
    /// Create an all-unvisited mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            flags: vec![false; width as usize * height as usize],
        }
    }

    /// Mask width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Whether (x, y) has been visited.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the mask.
    #[inline]
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.flags[self.index(x, y)]
    }

    /// Mark (x, y) visited.
    #[inline]
    pub fn mark(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.flags[i] = true;
    }

    /// Number of visited pixels.
    pub fn count(&self) -> u64 {
        self.flags.iter().filter(|&&v| v).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_count() {
        let mut m = VisitedMask::new(4, 3);
        assert_eq!(m.count(), 0);
        m.mark(3, 2);
        m.mark(0, 1);
        m.mark(0, 1);
        assert!(m.is_visited(3, 2));
        assert!(m.is_visited(0, 1));
        assert!(!m.is_visited(1, 0));
        assert_eq!(m.count(), 2);
    }
}
