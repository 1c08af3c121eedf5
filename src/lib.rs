//! Cinnabar is a small library for picking pairs of *accent colors*: a base color and the color
//! 180 degrees opposite it on the HSV hue wheel, conventionally the most contrasting choice
//! available. The underlying philosophy is that decorative color choices should be cheap and
//! reproducible: a caller asks for a themed pair once per interaction, gets two plain value
//! objects back, and formats them however its styling layer wants. The conversions deliberately
//! quantize to the integer ranges used by CSS-style notation (0-255 channels, whole-degree hues,
//! whole-percent saturation and value), so round-tripping a color through HSV is lossy by a unit
//! or two per channel. That loss is part of the contract, not an accident: it matches the
//! precision of the notation these colors are written in.

// we don't mess around with documentation
#![deny(missing_docs)]

extern crate rand;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod color;
pub mod colors;
mod csscolor;
pub mod prelude;
pub mod random;

pub use csscolor::CSSParseError;
