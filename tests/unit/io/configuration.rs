//! Tests for rendering constants and defaults

#[cfg(test)]
mod tests {
    use image::Rgb;
    use pixblock::io::color::parse_hex_color;
    use pixblock::io::configuration::{
        DEFAULT_BACKGROUND, DEFAULT_BACKGROUND_HEX, DEFAULT_FOREGROUND, DEFAULT_FOREGROUND_HEX,
        DEFAULT_GAP_PERCENT, DEFAULT_MIN_BLOCK_SIZE, MAX_GAP_FRACTION, MAX_WORKING_DIMENSION,
        MIN_BLOCK_FLOOR, OUTPUT_EXTENSION, OUTPUT_SUFFIX, SPECKLE_AREA_DIVISOR, SPECKLE_MIN_SIDE,
        SUPPORTED_EXTENSIONS,
    };

    // Tests the working raster cap
    #[test]
    fn test_max_working_dimension() {
        assert_eq!(MAX_WORKING_DIMENSION, 1200);
    }

    // Tests hex and byte forms of the default colors agree
    #[test]
    fn test_default_colors_agree() {
        assert!(matches!(parse_hex_color(DEFAULT_FOREGROUND_HEX), Ok(c) if c == Rgb(DEFAULT_FOREGROUND)));
        assert!(matches!(parse_hex_color(DEFAULT_BACKGROUND_HEX), Ok(c) if c == Rgb(DEFAULT_BACKGROUND)));
    }

    // Tests defaults already satisfy the clamping contract
    #[test]
    fn test_defaults_within_clamps() {
        assert!(DEFAULT_MIN_BLOCK_SIZE >= MIN_BLOCK_FLOOR);
        assert!(f64::from(DEFAULT_GAP_PERCENT) / 100.0 <= MAX_GAP_FRACTION);
        assert_eq!(MIN_BLOCK_FLOOR, 2);
    }

    // Tests speckle density settings
    #[test]
    fn test_speckle_constants() {
        assert_eq!(SPECKLE_AREA_DIVISOR, 60);
        assert_eq!(SPECKLE_MIN_SIDE, 4);
    }

    // Tests output naming is filesystem safe
    #[test]
    fn test_output_naming() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        assert!(
            OUTPUT_SUFFIX
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
        );
        assert_eq!(OUTPUT_EXTENSION, "png");
    }

    // Tests supported extensions are lowercase and include the output format
    #[test]
    fn test_supported_extensions() {
        assert!(SUPPORTED_EXTENSIONS.contains(&OUTPUT_EXTENSION));
        assert!(
            SUPPORTED_EXTENSIONS
                .iter()
                .all(|ext| ext.chars().all(|c| c.is_ascii_lowercase()))
        );
    }
}
