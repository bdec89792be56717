//! Immutable parameter snapshot shared by every stage of a render pass

use crate::io::settings::RenderSettings;
use image::{Rgb, Rgba};

/// Parameters of one render pass
///
/// Values are expected to be pre-clamped (see [`RenderSettings::snapshot`]);
/// the render pass does not validate them again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Side of the top-level blocks, at least 2
    pub block_size: u32,
    /// Fraction of each block side left as gap, in `[0, 0.5]`
    pub gap_percent: f64,
    /// Blend between global (0) and local (1) mean brightness
    pub local_factor: f64,
    /// Gradient magnitude above which a block is painted foreground
    pub edge_boost: f64,
    /// Luminance variance above which a block subdivides
    pub variance_threshold: f64,
    /// Blocks whose longer side does not exceed this never subdivide
    pub min_block_size: u32,
    /// Offset added to the classification threshold
    pub brightness_bias: f64,
    /// Swap foreground and background classification
    pub invert: bool,
    /// Color of foreground blocks
    pub foreground: Rgb<u8>,
    /// Color of the canvas, background blocks and speckles
    pub background: Rgb<u8>,
}

impl RenderParams {
    /// Opaque RGBA pixel of the foreground color
    pub const fn foreground_pixel(&self) -> Rgba<u8> {
        opaque(self.foreground)
    }

    /// Opaque RGBA pixel of the background color
    pub const fn background_pixel(&self) -> Rgba<u8> {
        opaque(self.background)
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        RenderSettings::default().snapshot()
    }
}

const fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    let [r, g, b] = color.0;
    Rgba([r, g, b, u8::MAX])
}
