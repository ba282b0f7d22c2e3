/// Shelf-packing allocator for a square glyph atlas.
///
/// Glyphs are placed left-to-right along a shelf row; when one doesn't fit
/// horizontally the cursor wraps to a new row below the tallest glyph of the
/// current one. There is no reclamation — once the atlas is full it stays
/// full for the renderer's lifetime.
#[derive(Debug)]
pub(super) struct AtlasAllocator {
    size: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl AtlasAllocator {
    pub(super) fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            full: false,
        }
    }

    pub(super) fn is_full(&self) -> bool {
        self.full
    }

    /// Reserves a `w × h` region, returning its top-left corner.
    ///
    /// Returns `None` once the atlas cannot fit the region; the allocator is
    /// then marked full so later, smaller requests on lower rows don't
    /// interleave with skipped ones.
    pub(super) fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + self.padding > self.size {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }

        if self.cursor_y + h + self.padding > self.size || self.cursor_x + w + self.padding > self.size {
            self.full = true;
            return None;
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + self.padding;
        self.row_height = self.row_height.max(h);
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_left_to_right() {
        let mut atlas = AtlasAllocator::new(64, 1);
        assert_eq!(atlas.place(10, 10), Some((1, 1)));
        assert_eq!(atlas.place(10, 10), Some((12, 1)));
    }

    #[test]
    fn wraps_to_next_shelf() {
        let mut atlas = AtlasAllocator::new(32, 1);
        assert_eq!(atlas.place(20, 8), Some((1, 1)));
        // 20 more doesn't fit beside it; new shelf below row height 8.
        assert_eq!(atlas.place(20, 8), Some((1, 10)));
    }

    #[test]
    fn shelf_height_tracks_tallest_glyph() {
        let mut atlas = AtlasAllocator::new(64, 1);
        atlas.place(10, 4).unwrap();
        atlas.place(10, 12).unwrap();
        atlas.place(50, 10).unwrap(); // wraps
        assert_eq!(atlas.place(1, 1), Some((52, 14)));
    }

    #[test]
    fn fills_up_and_stays_full() {
        let mut atlas = AtlasAllocator::new(16, 1);
        assert!(atlas.place(14, 14).is_some());
        assert!(atlas.place(14, 14).is_none());
        assert!(atlas.is_full());
        // Even a tiny region is refused after saturation.
        assert!(atlas.place(1, 1).is_none());
    }

    #[test]
    fn oversized_region_is_rejected() {
        let mut atlas = AtlasAllocator::new(32, 1);
        assert!(atlas.place(40, 4).is_none());
        assert!(atlas.is_full());
    }
}
