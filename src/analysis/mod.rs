//! Per-pixel and per-region measurements of the working raster

/// Sobel gradient magnitude map
pub mod edges;
/// RGB to luminance conversion
pub mod luminance;
/// Region mean and variance
pub mod statistics;
