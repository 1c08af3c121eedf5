//! This module implements the HSV color space, the cylindrical cousin of RGB. Its one real virtue
//! for this crate is that hue lives on a wheel: rotating a color to its complement is a single
//! wrapping addition of 180 degrees, something that has no pleasant expression in RGB. Like
//! everything else here, the components are integers matching CSS-style notation: whole degrees
//! for hue, whole percents for saturation and value. This makes HSV a quantized, lossy waypoint
//! between two RGB colors rather than a faithful second representation, which is all the accent
//! math needs.

use std::fmt;
use std::str::FromStr;

use color::RGBColor;
use csscolor::{parse_hsv_str, CSSParseError};

/// Normalizes `hue + degrees` into the range 0-359 by repeatedly wrapping at the ends of the
/// wheel. `degrees` may be negative or larger than a full turn.
/// # Example
/// ```
/// # use cinnabar::prelude::*;
/// assert_eq!(shift_hue(350, 180), 170);
/// assert_eq!(shift_hue(10, 180), 190);
/// assert_eq!(shift_hue(0, 360), 0);
/// assert_eq!(shift_hue(10, -30), 340);
/// ```
pub fn shift_hue(hue: u16, degrees: i32) -> u16 {
    let mut shifted = i32::from(hue) + degrees;
    while shifted >= 360 {
        shifted -= 360;
    }
    while shifted < 0 {
        shifted += 360;
    }
    shifted as u16
}

/// An HSV color with integer components: hue in whole degrees from 0 to 359, saturation and value
/// in whole percents from 0 to 100. Transient by design: these are produced from an [`RGBColor`],
/// rotated, and converted straight back.
///
/// [`RGBColor`]: ../../color/struct.RGBColor.html
/// # Example
/// ```
/// # use cinnabar::prelude::*;
/// let teal = HSVColor { h: 180, s: 100, v: 100 };
/// assert_eq!(teal.to_rgb(), RGBColor { r: 0, g: 255, b: 255 });
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, an angle in whole degrees ranging from 0 to 359. Values of 360 or more *may* not
    /// break, but they shouldn't be treated as valid.
    pub h: u16,
    /// The saturation as a whole percent, 0-100: the distance from the equivalent-value gray.
    pub s: u8,
    /// The value as a whole percent, 0-100: the largest RGB channel, scaled. Note that this is
    /// intensity, not luminance: dark purple and white can share a value.
    pub v: u8,
}

impl HSVColor {
    /// Converts back to RGB using the standard sector decomposition: the hue picks one of six
    /// 60-degree sectors of the wheel, and the fractional position inside the sector blends the
    /// middle channel between the two intermediates. Channels are rounded to the nearest integer
    /// at the end, so this does not exactly invert [`RGBColor::to_hsv`].
    ///
    /// [`RGBColor::to_hsv`]: ../../color/struct.RGBColor.html#method.to_hsv
    pub fn to_rgb(&self) -> RGBColor {
        if self.s == 0 {
            // zero saturation is gray: every channel is just the value
            let gray = (f64::from(self.v) * 2.55).round() as u8;
            return RGBColor {
                r: gray,
                g: gray,
                b: gray,
            };
        }
        let sector = f64::from(self.h) / 60.0;
        let i = sector.floor();
        let f = sector - i;
        let s = f64::from(self.s) / 100.0;
        let v = f64::from(self.v) / 100.0;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        // an in-range hue always gives a sector of 0-5; anything larger falls into the last arm
        let (r, g, b) = match i as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        RGBColor {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }

    /// Returns a color with the hue rotated by `degrees` (wrapping per [`shift_hue`]) and the
    /// saturation and value untouched.
    ///
    /// [`shift_hue`]: fn.shift_hue.html
    pub fn shift_hue(self, degrees: i32) -> HSVColor {
        HSVColor {
            h: shift_hue(self.h, degrees),
            ..self
        }
    }

    /// Returns the color half a turn away on the hue wheel: the complement.
    /// # Example
    /// ```
    /// # use cinnabar::prelude::*;
    /// let rose = HSVColor { h: 330, s: 80, v: 90 };
    /// assert_eq!(rose.complement().h, 150);
    /// ```
    pub fn complement(self) -> HSVColor {
        self.shift_hue(180)
    }
}

/// Formats the color in `hsv()` functional notation, e.g. `hsv(180, 100%, 50%)`.
impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

impl FromStr for HSVColor {
    type Err = CSSParseError;

    /// Parses `hsv()` functional notation such as `hsv(250, 40%, 100%)`. Out-of-range percents
    /// are clamped; out-of-range hues are wrapped onto the wheel, so `hsv(-90, ...)` means a hue
    /// of 270.
    fn from_str(s: &str) -> Result<HSVColor, CSSParseError> {
        let (h, s, v) = parse_hsv_str(s)?;
        Ok(HSVColor { h, s, v })
    }
}
