//! Render pass orchestration
//!
//! A pass resamples the source into the working raster, measures it once
//! (luminance plane, global mean, edge map), clears the output to the
//! background color and decomposes the raster block by block in row-major
//! order. The pass is synchronous and only ever reads the source.

use crate::algorithm::decomposer::{Decomposer, TerminalBlock};
use crate::algorithm::painter::Painter;
use crate::algorithm::parameters::RenderParams;
use crate::analysis::edges::EdgeMap;
use crate::analysis::luminance::luminance_plane;
use crate::analysis::statistics::global_mean;
use crate::io::configuration::MAX_WORKING_DIMENSION;
use crate::spatial::block::BlockGrid;
use crate::spatial::scaling::to_working_raster;
use image::{DynamicImage, RgbaImage};
use rand::Rng;

/// Counters collected during a render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Blocks of the base grid
    pub top_level_blocks: usize,
    /// Blocks that were painted
    pub terminal_blocks: usize,
    /// Painted blocks classified as foreground
    pub foreground_blocks: usize,
    /// Speckle dots drawn
    pub speckles: u64,
    /// Deepest subdivision level reached
    pub max_depth: u32,
}

impl RenderStats {
    fn record(&mut self, terminal: &TerminalBlock, speckles: u64) {
        self.terminal_blocks += 1;
        if terminal.fill.is_foreground() {
            self.foreground_blocks += 1;
        }
        self.speckles += speckles;
        self.max_depth = self.max_depth.max(terminal.depth);
    }
}

/// Output of a render pass
#[derive(Debug, Clone)]
pub struct Rendering {
    /// The rendered raster, sized like the working raster
    pub image: RgbaImage,
    /// Counters describing the pass
    pub stats: RenderStats,
}

/// Render a decoded image with speckles drawn from the thread-local generator
pub fn render(source: &DynamicImage, params: &RenderParams) -> RgbaImage {
    render_with_rng(source, params, &mut rand::rng()).image
}

/// Render a decoded image using `rng` for speckle placement
pub fn render_with_rng<R: Rng>(
    source: &DynamicImage,
    params: &RenderParams,
    rng: &mut R,
) -> Rendering {
    let working = to_working_raster(source, MAX_WORKING_DIMENSION);
    render_scaled(&working, params, rng)
}

/// Render an already-scaled working raster
pub fn render_scaled<R: Rng>(working: &RgbaImage, params: &RenderParams, rng: &mut R) -> Rendering {
    let (width, height) = working.dimensions();

    let plane = luminance_plane(working);
    let mean = global_mean(&plane);
    let edges = EdgeMap::from_luminance(&plane);

    let mut image = RgbaImage::new(width, height);
    let mut stats = RenderStats::default();

    let decomposer = Decomposer::new(&plane, &edges, params, mean);
    let mut painter = Painter::new(&mut image, params);
    painter.clear();

    for root in BlockGrid::new(width, height, params.block_size) {
        stats.top_level_blocks += 1;
        decomposer.decompose(root, |terminal| {
            let speckles = painter.paint(&terminal, &mut *rng);
            stats.record(&terminal, speckles);
        });
    }

    log::debug!(
        "rendered {width}x{height}: {} top-level, {} terminal ({} foreground), {} speckles, depth {}",
        stats.top_level_blocks,
        stats.terminal_blocks,
        stats.foreground_blocks,
        stats.speckles,
        stats.max_depth
    );

    Rendering { image, stats }
}
