//! Rectangular blocks of the working raster and their quadtree split
//!
//! Blocks are plain pixel rectangles. Splitting halves each side with floor
//! division and hands the odd remainder to the right and bottom quadrants, so
//! the four children always tile the parent exactly.

/// A rectangle `[x, x + width) × [y, y + height)` in working-raster pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Block {
    /// Create a block from its origin and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Length of the longer side
    pub const fn longest_side(&self) -> u32 {
        if self.width > self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the pixel `(px, py)` lies inside the block
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Column range `[start, end)` of the block clipped to `limit` columns
    pub fn column_span(&self, limit: usize) -> (usize, usize) {
        let start = (self.x as usize).min(limit);
        let end = (self.right() as usize).min(limit);
        (start, end)
    }

    /// Row range `[start, end)` of the block clipped to `limit` rows
    pub fn row_span(&self, limit: usize) -> (usize, usize) {
        let start = (self.y as usize).min(limit);
        let end = (self.bottom() as usize).min(limit);
        (start, end)
    }

    /// Split into four quadrants: top-left, top-right, bottom-left, bottom-right
    ///
    /// Returns `None` when halving either side would produce an empty quadrant.
    pub const fn quadrants(&self) -> Option<[Self; 4]> {
        let half_width = self.width / 2;
        let half_height = self.height / 2;
        if half_width == 0 || half_height == 0 {
            return None;
        }

        let rest_width = self.width - half_width;
        let rest_height = self.height - half_height;
        let mid_x = self.x + half_width;
        let mid_y = self.y + half_height;

        Some([
            Self::new(self.x, self.y, half_width, half_height),
            Self::new(mid_x, self.y, rest_width, half_height),
            Self::new(self.x, mid_y, half_width, rest_height),
            Self::new(mid_x, mid_y, rest_width, rest_height),
        ])
    }
}

/// Row-major grid of top-level blocks covering a `width × height` raster
///
/// The last block of each row and column is clipped to the raster edge.
#[derive(Debug, Clone)]
pub struct BlockGrid {
    width: u32,
    height: u32,
    block_size: u32,
    next_x: u32,
    next_y: u32,
}

impl BlockGrid {
    /// Create a grid with square cells of side `block_size`
    ///
    /// A zero block size is treated as 1 so the grid always terminates.
    pub fn new(width: u32, height: u32, block_size: u32) -> Self {
        Self {
            width,
            height,
            block_size: block_size.max(1),
            next_x: 0,
            next_y: 0,
        }
    }

    /// Number of columns of blocks
    pub const fn columns(&self) -> u32 {
        self.width.div_ceil(self.block_size)
    }

    /// Number of rows of blocks
    pub const fn rows(&self) -> u32 {
        self.height.div_ceil(self.block_size)
    }
}

impl Iterator for BlockGrid {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.width == 0 || self.next_y >= self.height {
            return None;
        }

        let block = Block::new(
            self.next_x,
            self.next_y,
            self.block_size.min(self.width - self.next_x),
            self.block_size.min(self.height - self.next_y),
        );

        self.next_x = self.next_x.saturating_add(self.block_size);
        if self.next_x >= self.width {
            self.next_x = 0;
            self.next_y = self.next_y.saturating_add(self.block_size);
        }

        Some(block)
    }
}
