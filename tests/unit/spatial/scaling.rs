//! Tests for aspect-preserving working-raster dimensions and resampling

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgba, RgbaImage};
    use pixblock::io::configuration::MAX_WORKING_DIMENSION;
    use pixblock::spatial::scaling::{scale_ratio, scaled_dimensions, to_working_raster};

    // Tests sources within the cap keep their size
    #[test]
    fn test_small_sources_are_not_upscaled() {
        assert_eq!(scaled_dimensions(640, 480, 1200), (640, 480));
        assert_eq!(scaled_dimensions(1200, 1200, 1200), (1200, 1200));
        assert!((scale_ratio(10, 10, 1200) - 1.0).abs() < f64::EPSILON);
    }

    // Tests the longer side is brought down to the cap
    #[test]
    fn test_large_sources_scale_to_cap() {
        assert_eq!(scaled_dimensions(2400, 1200, 1200), (1200, 600));
        assert_eq!(scaled_dimensions(1200, 1800, 1200), (800, 1200));
        assert_eq!(scaled_dimensions(1800, 1200, 1200), (1200, 800));
    }

    // Tests rounding and the one-pixel floor on extreme aspect ratios
    #[test]
    fn test_rounding_and_floor() {
        assert_eq!(scaled_dimensions(3000, 1, 1200), (1200, 1));
        assert_eq!(scaled_dimensions(2401, 3, 1200), (1200, 1));
        assert_eq!(scaled_dimensions(0, 0, 1200), (1, 1));
    }

    // Tests the ratio never exceeds one
    #[test]
    fn test_ratio_is_capped() {
        for (w, h) in [(1, 1), (100, 5000), (5000, 100), (1199, 1201)] {
            let ratio = scale_ratio(w, h, MAX_WORKING_DIMENSION);
            assert!(ratio > 0.0 && ratio <= 1.0);
        }
    }

    // Tests small images pass through pixel for pixel
    #[test]
    fn test_working_raster_passthrough() {
        let mut raster = RgbaImage::from_pixel(5, 3, Rgba([9, 8, 7, 255]));
        raster.put_pixel(4, 2, Rgba([1, 2, 3, 255]));
        let source = DynamicImage::ImageRgba8(raster.clone());

        let working = to_working_raster(&source, MAX_WORKING_DIMENSION);
        assert_eq!(working, raster);
    }

    // Tests oversize images are resampled to the scaled dimensions
    #[test]
    fn test_working_raster_downscales() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2400,
            100,
            Rgba([200, 100, 50, 255]),
        ));

        let working = to_working_raster(&source, MAX_WORKING_DIMENSION);
        assert_eq!(working.dimensions(), (1200, 50));
        assert_eq!(working.get_pixel(600, 25), &Rgba([200, 100, 50, 255]));
    }
}
