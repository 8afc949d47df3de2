//! Mode-aware random colors.
//!
//! Hue is uniform over whole degrees [0, 360). Saturation and value are uniform
//! whole percents inside the mode's envelope:
//!
//! | mode   | saturation | value     |
//! |--------|------------|-----------|
//! | normal | 0..=100    | 0..=100   |
//! | pastel | 45..=75    | 75..=95   |
//! | vivid  | 60..=100   | 50..=100  |
//!
//! The sampled HSV goes through [`ColorValue::from_hsv`], the same assembly
//! path manual edits use.

use crate::color::Hsv;
use crate::mode::{ColorMode, ModeRange, Range};
use crate::prng::RandomSource;
use crate::value::ColorValue;

fn sample_percent<R: RandomSource + ?Sized>(range: Range, rng: &mut R) -> u8 {
    rng.next_inclusive(u32::from(range.min), u32::from(range.max)) as u8
}

/// Samples an opaque color whose saturation and value fall inside `range`.
pub fn generate_in_range<R: RandomSource + ?Sized>(range: ModeRange, rng: &mut R) -> ColorValue {
    let h = rng.next_below(360) as u16;
    let s = sample_percent(range.saturation, rng);
    let v = sample_percent(range.value, rng);
    ColorValue::from_hsv(Hsv { h, s, v }, 1.0)
}

/// Samples an opaque color in `mode`'s envelope.
pub fn generate_random_color<R: RandomSource + ?Sized>(mode: ColorMode, rng: &mut R) -> ColorValue {
    generate_in_range(mode.range(), rng)
}
