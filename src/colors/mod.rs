//! This module contains color spaces other than RGB. There is exactly one: HSV, the cylindrical
//! respelling of RGB that makes hue rotation a single addition. For convenience, its main type is
//! imported into this module's namespace directly.

pub mod hsvcolor;

// for convenience, use this namespace for the color objects
pub use self::hsvcolor::HSVColor;
