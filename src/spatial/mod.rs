//! Spatial primitives of the working raster
//!
//! This module contains:
//! - Block rectangles, their quadtree split and the top-level block grid
//! - Working-raster dimension resolution and resampling

/// Block rectangles and top-level grid iteration
pub mod block;
/// Aspect-preserving downscaling of source images
pub mod scaling;

pub use block::{Block, BlockGrid};
