//! Painting terminal blocks into the output raster

use crate::algorithm::decomposer::{BlockFill, TerminalBlock};
use crate::algorithm::parameters::RenderParams;
use crate::io::configuration::{SPECKLE_AREA_DIVISOR, SPECKLE_MIN_SIDE};
use crate::spatial::block::Block;
use image::{Rgba, RgbaImage};
use rand::Rng;

/// Rectangle actually filled for a block once the gap inset is removed
///
/// The inset is `floor(side * gap_percent)` clamped to `side - 1`, split
/// between both sides with the odd pixel going to the right and bottom. The
/// result is never empty and always lies inside the block.
pub fn drawn_rect(block: &Block, gap_percent: f64) -> Block {
    let inset = |side: u32| -> u32 {
        let gap = (f64::from(side) * gap_percent).floor().max(0.0) as u32;
        gap.min(side.saturating_sub(1))
    };

    let gap_x = inset(block.width);
    let gap_y = inset(block.height);

    Block::new(
        block.x + gap_x / 2,
        block.y + gap_y / 2,
        block.width.saturating_sub(gap_x).max(1),
        block.height.saturating_sub(gap_y).max(1),
    )
}

/// Number of speckle dots a foreground block receives
pub const fn speckle_count(block: &Block) -> u64 {
    if block.width > SPECKLE_MIN_SIDE || block.height > SPECKLE_MIN_SIDE {
        block.area() / SPECKLE_AREA_DIVISOR as u64
    } else {
        0
    }
}

/// Writes terminal blocks into an output raster
pub struct Painter<'a> {
    canvas: &'a mut RgbaImage,
    foreground: Rgba<u8>,
    background: Rgba<u8>,
    gap_percent: f64,
}

impl<'a> Painter<'a> {
    /// Create a painter over `canvas` using the colors and gap of `params`
    pub const fn new(canvas: &'a mut RgbaImage, params: &RenderParams) -> Self {
        Self {
            canvas,
            foreground: params.foreground_pixel(),
            background: params.background_pixel(),
            gap_percent: params.gap_percent,
        }
    }

    /// Fill the whole canvas with the background color
    pub fn clear(&mut self) {
        let background = self.background;
        for pixel in self.canvas.pixels_mut() {
            *pixel = background;
        }
    }

    /// Paint one terminal block and return how many speckles landed on the canvas
    ///
    /// Foreground blocks larger than the speckle minimum get background dots
    /// at random positions inside their drawn rectangle.
    pub fn paint<R: Rng>(&mut self, terminal: &TerminalBlock, rng: &mut R) -> u64 {
        let drawn = drawn_rect(&terminal.block, self.gap_percent);

        let color = match terminal.fill {
            BlockFill::Foreground => self.foreground,
            BlockFill::Background => self.background,
        };
        self.fill_rect(&drawn, color);

        if !terminal.fill.is_foreground() {
            return 0;
        }

        let (width, height) = self.canvas.dimensions();
        let mut drawn_dots = 0;
        for _ in 0..speckle_count(&terminal.block) {
            let x = drawn.x + rng.random_range(0..drawn.width);
            let y = drawn.y + rng.random_range(0..drawn.height);
            if x < width && y < height {
                self.canvas.put_pixel(x, y, self.background);
                drawn_dots += 1;
            }
        }
        drawn_dots
    }

    fn fill_rect(&mut self, rect: &Block, color: Rgba<u8>) {
        let (width, height) = self.canvas.dimensions();
        for y in rect.y..rect.bottom().min(height) {
            for x in rect.x..rect.right().min(width) {
                self.canvas.put_pixel(x, y, color);
            }
        }
    }
}
