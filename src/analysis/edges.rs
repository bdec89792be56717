//! Gradient magnitude map computed with a 3x3 Sobel kernel pair
//!
//! Neighbor lookups past the raster border replicate the nearest edge pixel,
//! so border magnitudes describe the actual content rather than a dark frame.

use crate::spatial::block::Block;
use ndarray::{Array2, s};

/// Dense per-pixel gradient magnitudes of a luminance plane
#[derive(Debug, Clone)]
pub struct EdgeMap {
    magnitudes: Array2<f64>,
}

impl EdgeMap {
    /// Compute the gradient magnitude of every pixel of a luminance plane
    pub fn from_luminance(plane: &Array2<f64>) -> Self {
        let (height, width) = plane.dim();

        let sample = |x: isize, y: isize| -> f64 {
            let cx = x.clamp(0, width as isize - 1) as usize;
            let cy = y.clamp(0, height as isize - 1) as usize;
            plane.get((cy, cx)).copied().unwrap_or(0.0)
        };

        let magnitudes = Array2::from_shape_fn((height, width), |(row, col)| {
            let (x, y) = (col as isize, row as isize);

            let top_left = sample(x - 1, y - 1);
            let top = sample(x, y - 1);
            let top_right = sample(x + 1, y - 1);
            let left = sample(x - 1, y);
            let right = sample(x + 1, y);
            let bottom_left = sample(x - 1, y + 1);
            let bottom = sample(x, y + 1);
            let bottom_right = sample(x + 1, y + 1);

            let gx = -top_left + top_right - 2.0 * left + 2.0 * right - bottom_left + bottom_right;
            let gy = -top_left - 2.0 * top - top_right + bottom_left + 2.0 * bottom + bottom_right;

            gx.hypot(gy)
        });

        Self { magnitudes }
    }

    /// Raster width covered by the map
    pub fn width(&self) -> usize {
        self.magnitudes.ncols()
    }

    /// Raster height covered by the map
    pub fn height(&self) -> usize {
        self.magnitudes.nrows()
    }

    /// Magnitude at a pixel, if it lies inside the map
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        self.magnitudes.get((y, x)).copied()
    }

    /// Largest magnitude within a block, clipped to the map; 0 for an empty region
    pub fn max_in(&self, block: &Block) -> f64 {
        let (x0, x1) = block.column_span(self.width());
        let (y0, y1) = block.row_span(self.height());
        if x0 >= x1 || y0 >= y1 {
            return 0.0;
        }

        self.magnitudes
            .slice(s![y0..y1, x0..x1])
            .iter()
            .fold(0.0, |max, &m| f64::max(max, m))
    }

    /// Borrow the underlying `[y, x]` array
    pub const fn magnitudes(&self) -> &Array2<f64> {
        &self.magnitudes
    }
}
