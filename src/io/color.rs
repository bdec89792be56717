//! Hex color parsing and formatting for user-supplied colors

use crate::io::configuration::FALLBACK_FOREGROUND;
use crate::io::error::{Result, invalid_parameter};
use image::Rgb;

/// Parse a hex color string such as `#ff5a00`, `ff5a00`, `#f50` or `f50`
///
/// An empty string (or a lone `#`) yields the fallback foreground color.
///
/// # Errors
///
/// Returns an error if the string is not 3 or 6 hexadecimal digits
pub fn parse_hex_color(input: &str) -> Result<Rgb<u8>> {
    let digits = input.trim().trim_start_matches('#');

    if digits.is_empty() {
        return Ok(Rgb(FALLBACK_FOREGROUND));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => {
            return Err(invalid_parameter(
                "color",
                &input,
                &"expected 3 or 6 hexadecimal digits",
            ));
        }
    };

    let value = u32::from_str_radix(&expanded, 16)
        .map_err(|e| invalid_parameter("color", &input, &e))?;

    Ok(Rgb([
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ]))
}

/// Format a color as lowercase `#rrggbb`
pub fn to_hex(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}
