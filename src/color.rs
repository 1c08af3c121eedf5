//! This module implements the RGB color type that the rest of the crate revolves around. This is
//! 8-bit-per-channel sRGB as it appears in CSS functional notation: whole numbers from 0 to 255,
//! no alpha, no awareness of wider gamuts. Everything decorative that this crate does (hue
//! complements, biased random accents) starts and ends here, with HSV only ever appearing as an
//! intermediate representation.

use std::fmt;
use std::str::FromStr;

use colors::HSVColor;
use csscolor::{parse_hex_str, parse_rgb_str, CSSParseError};

/// An RGB color with three integer channels in the range 0-255. This is a plain value object:
/// construct it directly, copy it freely, and throw it away when the derived style strings have
/// been produced. Channel values are always in range by construction because the fields are `u8`.
/// # Example
/// The complement of pure red is pure cyan, its opposite on the hue wheel.
///
/// ```
/// # use cinnabar::prelude::*;
/// let red = RGBColor { r: 255, g: 0, b: 0 };
/// assert_eq!(red.complement().to_string(), "rgb(0, 255, 255)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0-255.
    pub r: u8,
    /// The green channel, 0-255.
    pub g: u8,
    /// The blue channel, 0-255.
    pub b: u8,
}

impl RGBColor {
    /// Converts to HSV, quantizing hue to whole degrees and saturation and value to whole
    /// percents. The conversion is the standard hexagonal one: value is the largest channel,
    /// saturation is chroma relative to value, and hue is the position along the hexagon edge
    /// determined by which channel is largest. Ties for the largest channel are broken in the
    /// order red, green, blue.
    ///
    /// Because of the integer quantization this is lossy: converting back with
    /// [`HSVColor::to_rgb`] can move each channel by a unit or two. Colors so close to gray that
    /// their saturation rounds to 0 report a hue of 0, the same as true grays.
    ///
    /// [`HSVColor::to_rgb`]: ../colors/hsvcolor/struct.HSVColor.html#method.to_rgb
    /// # Example
    /// ```
    /// # use cinnabar::prelude::*;
    /// let red = RGBColor { r: 255, g: 0, b: 0 };
    /// let hsv = red.to_hsv();
    /// assert_eq!((hsv.h, hsv.s, hsv.v), (0, 100, 100));
    /// ```
    pub fn to_hsv(&self) -> HSVColor {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        let value = (f64::from(max) * 100.0 / 255.0).round() as u8;
        // saturation is chroma over value; a black input would divide by zero, and is gray anyway
        let saturation = if max == 0 {
            0
        } else {
            (100.0 * f64::from(max - min) / f64::from(max)).round() as u8
        };

        // hue is undefined at zero saturation: grays sit on the axis of the cylinder, so just
        // use 0. This keys off the quantized integer, so a near-gray whose saturation rounds
        // down to 0 also reports hue 0; nonzero integer saturation implies nonzero chroma, so
        // the division below is safe.
        let hue = if saturation == 0 {
            0
        } else {
            let chroma = f64::from(max - min);
            let degrees = if self.r == max {
                // red sector: green pulls the hue up the hexagon, blue pulls it down
                60.0 * (f64::from(self.g) - f64::from(self.b)) / chroma
            } else if self.g == max {
                120.0 + 60.0 * (f64::from(self.b) - f64::from(self.r)) / chroma
            } else {
                240.0 + 60.0 * (f64::from(self.r) - f64::from(self.g)) / chroma
            };
            let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
            // rounding can land exactly on 360 (e.g. rgb(255, 0, 1)); fold it back to 0
            (degrees.round() as u16) % 360
        };

        HSVColor {
            h: hue,
            s: saturation,
            v: value,
        }
    }

    /// Returns the hue complement of this color: the color 180 degrees opposite on the HSV hue
    /// wheel, with the same saturation and value. This round-trips through HSV, so the result is
    /// subject to the quantization described on [`to_hsv`]: applying `complement` twice gets back
    /// within a unit or two per channel of the original, not necessarily the exact color.
    ///
    /// [`to_hsv`]: #method.to_hsv
    pub fn complement(&self) -> RGBColor {
        self.to_hsv().complement().to_rgb()
    }

    /// Returns this color as an uppercase hex string, such as `#FF8000`.
    /// # Example
    /// ```
    /// # use cinnabar::prelude::*;
    /// let orange = RGBColor { r: 255, g: 128, b: 0 };
    /// assert_eq!(orange.to_hex_string(), "#FF8000");
    /// ```
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl Into<(u8, u8, u8)> for RGBColor {
    fn into(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Formats the color in CSS functional notation, e.g. `rgb(255, 128, 0)`, ready to hand to a
/// styling layer.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = CSSParseError;

    /// Parses either CSS functional notation (`rgb(255, 128, 0)`) or a six-digit hex string
    /// (`#FF8000`). Functional-notation channels outside 0-255 are clamped rather than rejected.
    fn from_str(s: &str) -> Result<RGBColor, CSSParseError> {
        let (r, g, b) = if s.starts_with('#') {
            parse_hex_str(s)?
        } else {
            parse_rgb_str(s)?
        };
        Ok(RGBColor { r, g, b })
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_to_hsv_primaries() {
        let red = RGBColor { r: 255, g: 0, b: 0 }.to_hsv();
        assert_eq!((red.h, red.s, red.v), (0, 100, 100));
        let green = RGBColor { r: 0, g: 255, b: 0 }.to_hsv();
        assert_eq!((green.h, green.s, green.v), (120, 100, 100));
        let blue = RGBColor { r: 0, g: 0, b: 255 }.to_hsv();
        assert_eq!((blue.h, blue.s, blue.v), (240, 100, 100));
    }

    #[test]
    fn test_to_hsv_grayscale() {
        // grays have no chroma: saturation and hue are both pinned to 0
        let gray = RGBColor { r: 128, g: 128, b: 128 }.to_hsv();
        assert_eq!((gray.h, gray.s, gray.v), (0, 0, 50));
        let black = RGBColor { r: 0, g: 0, b: 0 }.to_hsv();
        assert_eq!((black.h, black.s, black.v), (0, 0, 0));
        let white = RGBColor { r: 255, g: 255, b: 255 }.to_hsv();
        assert_eq!((white.h, white.s, white.v), (0, 0, 100));
    }

    #[test]
    fn test_to_hsv_near_gray_quantizes_to_hueless() {
        // one unit of blue chroma rounds to 0% saturation, and zero saturation pins the hue too
        let near_white = RGBColor { r: 255, g: 255, b: 254 }.to_hsv();
        assert_eq!((near_white.h, near_white.s), (0, 0));
        // the next step of chroma rounds to 1% and keeps its computed hue
        let barely_yellow = RGBColor { r: 255, g: 255, b: 252 }.to_hsv();
        assert_eq!((barely_yellow.h, barely_yellow.s), (60, 1));
    }

    #[test]
    fn test_to_hsv_ranges() {
        // a coarse sweep of the cube: every output must stay in its documented range
        let mut c = 0u16;
        while c < 256 * 3 {
            let color = RGBColor {
                r: (c % 256) as u8,
                g: ((c * 7) % 256) as u8,
                b: ((c * 31) % 256) as u8,
            };
            let hsv = color.to_hsv();
            assert!(hsv.h < 360, "hue {} out of range for {:?}", hsv.h, color);
            assert!(hsv.s <= 100, "saturation {} out of range for {:?}", hsv.s, color);
            assert!(hsv.v <= 100, "value {} out of range for {:?}", hsv.v, color);
            c += 1;
        }
    }

    #[test]
    fn test_hue_rounding_folds_to_zero() {
        // 60 * (0 - 1) / 255 is -0.235 degrees, which rounds to 360 before the fold
        let nearly_red = RGBColor { r: 255, g: 0, b: 1 }.to_hsv();
        assert_eq!(nearly_red.h, 0);
    }

    #[test]
    fn test_complement_fixtures() {
        let red = RGBColor { r: 255, g: 0, b: 0 };
        assert_eq!(red.complement(), RGBColor { r: 0, g: 255, b: 255 });
        // complementing pure cyan gets red back exactly: the quantization is exact at primaries
        assert_eq!(red.complement().complement(), red);
        let green = RGBColor { r: 0, g: 255, b: 0 };
        assert_eq!(green.complement(), RGBColor { r: 255, g: 0, b: 255 });
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(RGBColor { r: 0, g: 0, b: 0 }.to_hex_string(), "#000000");
        assert_eq!(RGBColor { r: 110, g: 102, b: 236 }.to_hex_string(), "#6E66EC");
    }

    #[test]
    fn test_display() {
        let c = RGBColor { r: 12, g: 0, b: 255 };
        assert_eq!(c.to_string(), "rgb(12, 0, 255)");
    }

    #[test]
    fn test_from_str() {
        let c: RGBColor = "rgb(12, 0, 255)".parse().unwrap();
        assert_eq!(c, RGBColor { r: 12, g: 0, b: 255 });
        let c: RGBColor = "#6E66EC".parse().unwrap();
        assert_eq!(c, RGBColor { r: 110, g: 102, b: 236 });
        assert!("rgB(12, 0, 255)".parse::<RGBColor>().is_err());
    }

    #[test]
    fn test_tuple_conversion() {
        let c = RGBColor::from((1, 2, 3));
        let tup: (u8, u8, u8) = c.into();
        assert_eq!(tup, (1, 2, 3));
    }
}
