//! Luminance mean and variance over raster regions

use crate::spatial::block::Block;
use ndarray::{Array2, s};

/// Mean and population variance of luminance over a region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionStatistics {
    /// Mean luminance
    pub mean: f64,
    /// Population variance of luminance, `E[L²] - E[L]²`
    pub variance: f64,
    /// Number of pixels that contributed
    pub count: usize,
}

impl RegionStatistics {
    /// Statistics of the pixels of `plane` covered by `block`
    ///
    /// The block is clipped to the plane. A region without pixels has a mean
    /// and variance of zero.
    #[allow(clippy::suboptimal_flops)]
    pub fn of_block(plane: &Array2<f64>, block: &Block) -> Self {
        let (height, width) = plane.dim();
        let (x0, x1) = block.column_span(width);
        let (y0, y1) = block.row_span(height);
        if x0 >= x1 || y0 >= y1 {
            return Self::default();
        }

        let (sum, sum_sq, count) = plane
            .slice(s![y0..y1, x0..x1])
            .iter()
            .fold((0.0, 0.0, 0_usize), |(sum, sum_sq, count), &l| {
                (sum + l, sum_sq + l * l, count + 1)
            });

        let n = count as f64;
        let mean = sum / n;
        // Cancellation can leave a tiny negative residue on flat regions
        let variance = (sum_sq / n - mean * mean).max(0.0);

        Self {
            mean,
            variance,
            count,
        }
    }
}

/// Mean luminance of a whole plane; 0 for an empty plane
pub fn global_mean(plane: &Array2<f64>) -> f64 {
    let total: f64 = plane.iter().sum();
    total / plane.len().max(1) as f64
}
