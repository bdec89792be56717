//! Adaptive pixel-block stylization of raster images
//!
//! An image is cut into a grid of square blocks, each block is recursively
//! split while its luminance variance stays high, and every remaining block is
//! painted in a foreground or background color depending on local brightness
//! and edge strength.

#![deny(unsafe_code)]

/// Quadtree decomposition, painting and render pass orchestration
pub mod algorithm;
/// Luminance, edge and region measurements
pub mod analysis;
/// Input/output, settings, logging and error handling
pub mod io;
/// Block geometry and working-raster scaling
pub mod spatial;

pub use algorithm::parameters::RenderParams;
pub use algorithm::renderer::{Rendering, render, render_with_rng};
pub use io::error::{RenderError, Result};
pub use io::settings::RenderSettings;
