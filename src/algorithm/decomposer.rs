//! Variance-driven quadtree decomposition and block classification
//!
//! Each block is measured (luminance mean and variance, strongest edge) and
//! classified against a threshold blending global and local brightness. Blocks
//! with enough variance that are still larger than the minimum size split into
//! four quadrants; the rest are terminal and handed to the caller for painting.
//!
//! Work is kept on an explicit stack rather than the call stack. Quadrants are
//! pushed in reverse so they are visited top-left, top-right, bottom-left,
//! bottom-right, depth first.

use crate::algorithm::parameters::RenderParams;
use crate::analysis::edges::EdgeMap;
use crate::analysis::statistics::RegionStatistics;
use crate::spatial::block::Block;
use ndarray::Array2;

/// Which color a terminal block is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFill {
    /// Painted with the foreground color (and speckled when large enough)
    Foreground,
    /// Painted with the background color
    Background,
}

impl BlockFill {
    /// Map a foreground decision to a fill
    pub const fn from_foreground(use_foreground: bool) -> Self {
        if use_foreground {
            Self::Foreground
        } else {
            Self::Background
        }
    }

    /// Whether this is the foreground fill
    pub const fn is_foreground(self) -> bool {
        matches!(self, Self::Foreground)
    }

    /// The opposite fill
    pub const fn inverted(self) -> Self {
        match self {
            Self::Foreground => Self::Background,
            Self::Background => Self::Foreground,
        }
    }
}

/// Measurements and classification of a single block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockEvaluation {
    /// Luminance statistics of the block
    pub stats: RegionStatistics,
    /// Brightness threshold the block mean is compared against
    pub threshold: f64,
    /// Strongest gradient magnitude inside the block
    pub max_edge: f64,
    /// Resulting classification, inversion already applied
    pub fill: BlockFill,
}

/// A block that was not subdivided, ready to be painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalBlock {
    /// Footprint of the block
    pub block: Block,
    /// Classification of the block
    pub fill: BlockFill,
    /// Number of subdivisions between the top-level block and this one
    pub depth: u32,
}

/// Decomposes top-level blocks over a precomputed luminance plane and edge map
pub struct Decomposer<'a> {
    plane: &'a Array2<f64>,
    edges: &'a EdgeMap,
    params: &'a RenderParams,
    global_mean: f64,
}

impl<'a> Decomposer<'a> {
    /// Create a decomposer for one render pass
    ///
    /// `global_mean` is the mean luminance of the whole working raster and is
    /// reused for every block.
    pub const fn new(
        plane: &'a Array2<f64>,
        edges: &'a EdgeMap,
        params: &'a RenderParams,
        global_mean: f64,
    ) -> Self {
        Self {
            plane,
            edges,
            params,
            global_mean,
        }
    }

    /// Classification threshold for a block with the given mean
    #[allow(clippy::suboptimal_flops)]
    pub fn threshold(&self, local_mean: f64) -> f64 {
        let local = self.params.local_factor;
        self.global_mean * (1.0 - local) + local_mean * local + self.params.brightness_bias
    }

    /// Measure and classify a block
    ///
    /// A block is foreground when its mean is strictly below the threshold or
    /// when any edge inside it exceeds the edge boost. Equality with the
    /// threshold classifies as background.
    pub fn evaluate(&self, block: &Block) -> BlockEvaluation {
        let stats = RegionStatistics::of_block(self.plane, block);
        let threshold = self.threshold(stats.mean);
        let max_edge = self.edges.max_in(block);

        let fill =
            BlockFill::from_foreground(stats.mean < threshold || max_edge > self.params.edge_boost);
        let fill = if self.params.invert {
            fill.inverted()
        } else {
            fill
        };

        BlockEvaluation {
            stats,
            threshold,
            max_edge,
            fill,
        }
    }

    /// Quadrants to descend into, or `None` when the block is terminal
    pub fn split(&self, block: &Block, evaluation: &BlockEvaluation) -> Option<[Block; 4]> {
        if evaluation.stats.variance > self.params.variance_threshold
            && block.longest_side() > self.params.min_block_size
        {
            block.quadrants()
        } else {
            None
        }
    }

    /// Decompose `root`, calling `visit` once per terminal block
    pub fn decompose<F>(&self, root: Block, mut visit: F)
    where
        F: FnMut(TerminalBlock),
    {
        let mut pending = vec![(root, 0_u32)];

        while let Some((block, depth)) = pending.pop() {
            let evaluation = self.evaluate(&block);

            if let Some(quadrants) = self.split(&block, &evaluation) {
                pending.extend(quadrants.into_iter().rev().map(|q| (q, depth + 1)));
                continue;
            }

            visit(TerminalBlock {
                block,
                fill: evaluation.fill,
                depth,
            });
        }
    }

    /// Collect the terminal blocks of `root` in visiting order
    pub fn terminal_blocks(&self, root: Block) -> Vec<TerminalBlock> {
        let mut terminals = Vec::new();
        self.decompose(root, |terminal| terminals.push(terminal));
        terminals
    }

    /// Mean luminance of the whole working raster used for every threshold
    pub const fn global_mean(&self) -> f64 {
        self.global_mean
    }
}
