//! Working-raster dimensions and resampling
//!
//! Sources are never upscaled. Anything larger than the cap is shrunk so its
//! longer side equals the cap, preserving aspect ratio.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// Scale factor applied to a `width × height` source under a `max_dimension` cap
pub fn scale_ratio(width: u32, height: u32, max_dimension: u32) -> f64 {
    let longest = width.max(height);
    if longest == 0 {
        return 1.0;
    }
    (f64::from(max_dimension) / f64::from(longest)).min(1.0)
}

/// Working dimensions for a source, each rounded and at least 1
pub fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let ratio = scale_ratio(width, height, max_dimension);
    let scale = |dim: u32| ((f64::from(dim) * ratio).round() as u32).max(1);
    (scale(width), scale(height))
}

/// Resample a decoded image into the RGBA working raster
pub fn to_working_raster(source: &DynamicImage, max_dimension: u32) -> RgbaImage {
    let rgba = source.to_rgba8();
    let (width, height) = rgba.dimensions();
    let (target_width, target_height) = scaled_dimensions(width, height, max_dimension);

    if width == 0 || height == 0 || (target_width, target_height) == (width, height) {
        return rgba;
    }

    log::debug!("scaling {width}x{height} source to {target_width}x{target_height}");
    image::imageops::resize(&rgba, target_width, target_height, FilterType::Triangle)
}
