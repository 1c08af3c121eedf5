//! This module draws the random accent colors themselves. A uniform draw over the RGB cube is a
//! poor source of accents: most of the cube is muddy, desaturated filler. The generator here
//! biases hard toward vivid colors instead, by drawing a uniform candidate and then forcing two
//! of its channels to the extremes so that one hue family dominates while the untouched channel
//! keeps some variety within that family. Every function takes the generator as an argument so
//! callers (and tests) can supply a seeded one; the one convenience wrapper seeds from the OS.

use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use color::RGBColor;

/// Draws a random vivid color, biased toward saturated two-channel-dominant hues. Three uniform
/// channels are drawn first, then one of six equally likely overrides pins one channel to 255 and
/// another to 0; the remaining channel keeps its uniform draw. Every color this returns therefore
/// has full saturation and full value, with one channel at 255 and another at 0.
///
/// The six overrides cover only five distinct hue families: two of them force blue/cyan, so pure
/// green-dominant draws come up half as often as the rest.
/// # Example
/// ```
/// # extern crate rand;
/// # use cinnabar::prelude::*;
/// # use rand::SeedableRng;
/// # use rand::rngs::SmallRng;
/// let mut rng = SmallRng::seed_from_u64(7);
/// let accent = random_color(&mut rng);
/// let hsv = accent.to_hsv();
/// assert_eq!((hsv.s, hsv.v), (100, 100));
/// ```
pub fn random_color<R: Rng>(rng: &mut R) -> RGBColor {
    let mut r: u8 = rng.random_range(0..=255);
    let mut g: u8 = rng.random_range(0..=255);
    let mut b: u8 = rng.random_range(0..=255);
    match rng.random_range(0..6u8) {
        0 => {
            // green family: blue keeps its draw
            g = 255;
            r = 0;
        }
        1 => {
            // red through magenta
            r = 255;
            g = 0;
        }
        2 => {
            // red through yellow
            r = 255;
            b = 0;
        }
        3 => {
            // blue through magenta
            b = 255;
            r = 0;
        }
        4 => {
            // blue through cyan
            b = 255;
            g = 0;
        }
        _ => {
            // also blue through cyan: the sixth draw repeats the fifth
            b = 255;
            g = 0;
        }
    }
    RGBColor { r, g, b }
}

/// Draws a random accent color and pairs it with its hue complement, in that order. This is the
/// usual way to consume this crate: one call per interaction, two related theme colors back.
/// # Example
/// ```
/// # extern crate rand;
/// # use cinnabar::prelude::*;
/// # use rand::SeedableRng;
/// # use rand::rngs::SmallRng;
/// let mut rng = SmallRng::seed_from_u64(7);
/// let (base, contrast) = accent_pair(&mut rng);
/// assert_eq!(base.complement(), contrast);
/// ```
pub fn accent_pair<R: Rng>(rng: &mut R) -> (RGBColor, RGBColor) {
    let base = random_color(rng);
    (base, base.complement())
}

/// Like [`accent_pair`], but with a generator freshly seeded from the OS, for callers that don't
/// care about reproducibility.
///
/// [`accent_pair`]: fn.accent_pair.html
pub fn random_accent_pair() -> (RGBColor, RGBColor) {
    let mut rng = SmallRng::from_os_rng();
    accent_pair(&mut rng)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    /// The five override patterns: in each, one channel is pinned to 255 and another to 0.
    fn is_forced_vivid(c: RGBColor) -> bool {
        (c.g == 255 && c.r == 0)
            || (c.r == 255 && c.g == 0)
            || (c.r == 255 && c.b == 0)
            || (c.b == 255 && c.r == 0)
            || (c.b == 255 && c.g == 0)
    }

    #[test]
    fn test_random_color_always_forced() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let c = random_color(&mut rng);
            assert!(is_forced_vivid(c), "unforced color {:?}", c);
        }
    }

    #[test]
    fn test_random_color_full_saturation_and_value() {
        // one channel at 255 and one at 0 means max = 255 and min = 0, always
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let hsv = random_color(&mut rng).to_hsv();
            assert_eq!((hsv.s, hsv.v), (100, 100));
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut rng1 = SmallRng::seed_from_u64(1234);
        let mut rng2 = SmallRng::seed_from_u64(1234);
        for _ in 0..50 {
            assert_eq!(random_color(&mut rng1), random_color(&mut rng2));
        }
    }

    #[test]
    fn test_accent_pair_is_base_plus_complement() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..50 {
            let (base, contrast) = accent_pair(&mut rng);
            assert_eq!(contrast, base.complement());
        }
    }

    #[test]
    fn test_double_complement_stays_close() {
        // the HSV round trip quantizes, so complementing twice drifts by at most a couple of
        // units in the free channel; the forced channels are exact
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = random_color(&mut rng);
            let back = c.complement().complement();
            let dr = (i16::from(c.r) - i16::from(back.r)).abs();
            let dg = (i16::from(c.g) - i16::from(back.g)).abs();
            let db = (i16::from(c.b) - i16::from(back.b)).abs();
            assert!(
                dr <= 2 && dg <= 2 && db <= 2,
                "{:?} came back as {:?}",
                c,
                back
            );
        }
    }

    #[test]
    fn test_random_accent_pair_is_vivid() {
        let (base, contrast) = random_accent_pair();
        assert!(is_forced_vivid(base));
        assert_eq!(contrast, base.complement());
    }
}
