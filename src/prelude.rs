//! This module simply brings the most common Cinnabar functionality under a single namespace, to
//! prevent excessive imports: the two color types, the hue-shift helper, the random accent
//! generators, and the parse error type.

pub use color::RGBColor;
pub use colors::hsvcolor::shift_hue;
pub use colors::HSVColor;
pub use csscolor::CSSParseError;
pub use random::{accent_pair, random_accent_pair, random_color};
