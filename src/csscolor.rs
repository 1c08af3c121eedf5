//! This file implements parsing for the CSS-style color notation the crate's types print
//! themselves in: `rgb(r, g, b)` and `hsv(h, s%, v%)` functional notation, plus six-digit hex
//! strings. The grammar here is deliberately narrower than the W3 color spec: components are
//! whole numbers only (an optional sign is allowed), and there is no arithmetic and no
//! floats. Out-of-range components are not errors: channels and percents clamp to their range and
//! hues wrap around the wheel, matching what the conversion math would do with them anyway. The
//! `FromStr` impls that consume these functions live with their respective types.

use std::error::Error;
use std::fmt;

use regex::Regex;

lazy_static! {
    static ref RGB_FN: Regex =
        Regex::new(r"^rgb\(\s*([+-]?\d+)\s*,\s*([+-]?\d+)\s*,\s*([+-]?\d+)\s*\)$").unwrap();
    static ref HSV_FN: Regex =
        Regex::new(r"^hsv\(\s*([+-]?\d+)\s*,\s*([+-]?\d+)%\s*,\s*([+-]?\d+)%\s*\)$").unwrap();
    static ref HEX: Regex = Regex::new(r"^#([0-9a-fA-F]{6})$").unwrap();
}

/// An error in parsing a color string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum CSSParseError {
    /// This indicates a general color syntax error: the string is not `rgb()` or `hsv()`
    /// functional notation or a six-digit hex color, such as mismatched parentheses, a missing
    /// `%`, or uninterpretable tokens.
    InvalidColorSyntax,
    /// This indicates a component that is numeric but absurdly large, beyond what a 64-bit
    /// integer can hold.
    InvalidNumericSyntax,
}

impl fmt::Display for CSSParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CSSParseError::InvalidColorSyntax => write!(f, "Invalid color syntax"),
            CSSParseError::InvalidNumericSyntax => write!(f, "Invalid numeric syntax"),
        }
    }
}

impl Error for CSSParseError {}

/// Parses a captured signed integer, mapping overflow to the appropriate error.
fn parse_component(num: &str) -> Result<i64, CSSParseError> {
    num.parse().map_err(|_| CSSParseError::InvalidNumericSyntax)
}

/// Clamps a parsed component to an RGB channel, so "300" maps to 255 and "-4" to 0.
fn clamp_channel(num: i64) -> u8 {
    if num <= 0 {
        0
    } else if num >= 255 {
        255
    } else {
        num as u8
    }
}

/// Clamps a parsed component to a percentage, so "1000%" maps to 100%.
fn clamp_percent(num: i64) -> u8 {
    if num <= 0 {
        0
    } else if num >= 100 {
        100
    } else {
        num as u8
    }
}

/// Parses a string of the form `rgb(r, g, b)`, where r, g, and b are integers, returning a tuple
/// of `u8`s for the three components with out-of-range values clamped. Gives a `CSSParseError` on
/// invalid input.
pub(crate) fn parse_rgb_str(s: &str) -> Result<(u8, u8, u8), CSSParseError> {
    let caps = RGB_FN
        .captures(s)
        .ok_or(CSSParseError::InvalidColorSyntax)?;
    let r = clamp_channel(parse_component(&caps[1])?);
    let g = clamp_channel(parse_component(&caps[2])?);
    let b = clamp_channel(parse_component(&caps[3])?);
    Ok((r, g, b))
}

/// Parses a string of the form `hsv(h, s%, v%)`, returning a tuple of hue, saturation, and
/// value. The percents clamp to 0-100; the hue wraps onto the wheel, so -90 becomes 270.
pub(crate) fn parse_hsv_str(s: &str) -> Result<(u16, u8, u8), CSSParseError> {
    let caps = HSV_FN
        .captures(s)
        .ok_or(CSSParseError::InvalidColorSyntax)?;
    let h = parse_component(&caps[1])?.rem_euclid(360) as u16;
    let sat = clamp_percent(parse_component(&caps[2])?);
    let v = clamp_percent(parse_component(&caps[3])?);
    Ok((h, sat, v))
}

/// Parses a six-digit hex color such as `#6E66EC` (case-insensitive) into its three channels.
pub(crate) fn parse_hex_str(s: &str) -> Result<(u8, u8, u8), CSSParseError> {
    let caps = HEX.captures(s).ok_or(CSSParseError::InvalidColorSyntax)?;
    let digits = &caps[1];
    // the regex guarantees six hex digits, so these can't fail
    let r = u8::from_str_radix(&digits[0..2], 16).unwrap();
    let g = u8::from_str_radix(&digits[2..4], 16).unwrap();
    let b = u8::from_str_radix(&digits[4..6], 16).unwrap();
    Ok((r, g, b))
}
