//! Perceptual brightness of RGB pixels

use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// Weight of the red channel
pub const RED_WEIGHT: f64 = 0.2126;
/// Weight of the green channel
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Weight of the blue channel
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Luminance of a single RGB triple, in the 0–255 range
// Fused multiply-add would change results in the last bit between hosts
#[allow(clippy::suboptimal_flops)]
pub fn luminance(red: u8, green: u8, blue: u8) -> f64 {
    RED_WEIGHT * f64::from(red) + GREEN_WEIGHT * f64::from(green) + BLUE_WEIGHT * f64::from(blue)
}

/// Luminance of an RGBA pixel; alpha is ignored
pub fn pixel_luminance(pixel: &Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    luminance(r, g, b)
}

/// Luminance of every pixel of a raster, indexed `[y, x]`
pub fn luminance_plane(raster: &RgbaImage) -> Array2<f64> {
    let (width, height) = raster.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        pixel_luminance(raster.get_pixel(x as u32, y as u32))
    })
}
