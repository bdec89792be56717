//! Source image loading and PNG export of rendered rasters

use crate::io::error::{RenderError, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Decode an image file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a decodable image
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| RenderError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a rendered raster as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(raster: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    raster
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| RenderError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
