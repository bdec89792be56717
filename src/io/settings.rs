//! User-facing render settings and the clamping contract into render parameters
//!
//! Settings are expressed in the units a user adjusts (pixels, whole
//! percentages, raw thresholds). [`RenderSettings::snapshot`] clamps them into
//! the ranges the render pass relies on and freezes them for one pass.

use crate::algorithm::parameters::RenderParams;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_BLOCK_SIZE, DEFAULT_BRIGHTNESS_BIAS, DEFAULT_EDGE_BOOST,
    DEFAULT_FOREGROUND, DEFAULT_GAP_PERCENT, DEFAULT_LOCAL_PERCENT, DEFAULT_MIN_BLOCK_SIZE,
    DEFAULT_VARIANCE_THRESHOLD, MAX_GAP_FRACTION, MIN_BLOCK_FLOOR,
};
use image::Rgb;

/// Adjustable settings before clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Base block size in pixels
    pub block_size: u32,
    /// Gap between blocks in percent of the block side
    pub gap_percent: u32,
    /// Weight of local over global brightness in percent
    pub local_percent: u32,
    /// Edge strength forcing a block to foreground
    pub edge_boost: f64,
    /// Variance above which blocks subdivide
    pub variance_threshold: f64,
    /// Smallest block size in pixels
    pub min_block_size: u32,
    /// Offset added to the brightness threshold
    pub brightness_bias: f64,
    /// Swap foreground and background
    pub invert: bool,
    /// Foreground color
    pub foreground: Rgb<u8>,
    /// Background color
    pub background: Rgb<u8>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            gap_percent: DEFAULT_GAP_PERCENT,
            local_percent: DEFAULT_LOCAL_PERCENT,
            edge_boost: DEFAULT_EDGE_BOOST,
            variance_threshold: DEFAULT_VARIANCE_THRESHOLD,
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            brightness_bias: DEFAULT_BRIGHTNESS_BIAS,
            invert: false,
            foreground: Rgb(DEFAULT_FOREGROUND),
            background: Rgb(DEFAULT_BACKGROUND),
        }
    }
}

impl RenderSettings {
    /// Restore every setting to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp the settings into render parameters for one pass
    ///
    /// Block sizes are floored at 2, the gap is limited to half a block, the
    /// local weight to `[0, 1]` and thresholds to non-negative values.
    pub fn snapshot(&self) -> RenderParams {
        RenderParams {
            block_size: self.block_size.max(MIN_BLOCK_FLOOR),
            gap_percent: (f64::from(self.gap_percent) / 100.0).clamp(0.0, MAX_GAP_FRACTION),
            local_factor: (f64::from(self.local_percent) / 100.0).clamp(0.0, 1.0),
            edge_boost: non_negative(self.edge_boost),
            variance_threshold: non_negative(self.variance_threshold),
            min_block_size: self.min_block_size.max(MIN_BLOCK_FLOOR),
            brightness_bias: nan_to_zero(self.brightness_bias),
            invert: self.invert,
            foreground: self.foreground,
            background: self.background,
        }
    }
}

fn non_negative(value: f64) -> f64 {
    nan_to_zero(value).max(0.0)
}

const fn nan_to_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}
