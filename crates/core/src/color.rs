//! Color types and conversion functions for the picker.
//!
//! Provides integer color types (`Rgb`, `Hsv`, `Hsl`) plus alpha-carrying
//! views (`Rgba`, `Hsva`) and pure conversion functions between them and
//! `#rrggbb` hex strings.
//!
//! Every conversion rounds at its boundary through the helpers in this module:
//! channels to [0, 255], hue to whole degrees in [0, 360), saturation, value and
//! lightness to whole percent. Nothing is carried as a float between calls, so
//! a round trip through HSV or HSL may drift by a few channel units. The drift
//! bounds are [`ROUND_TRIP_TOLERANCE`] and [`HSL_ROUND_TRIP_TOLERANCE`].

use std::fmt;
use std::str::FromStr;

use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// Maximum per-channel difference between `rgb` and `hsv_to_rgb(rgb_to_hsv(rgb))`.
///
/// Whole-percent saturation/value and whole-degree hue quantize the color more
/// coarsely than 8-bit channels do.
pub const ROUND_TRIP_TOLERANCE: u8 = 3;

/// Maximum per-channel difference between `rgb` and `hsl_to_rgb(rgb_to_hsl(rgb))`.
pub const HSL_ROUND_TRIP_TOLERANCE: u8 = 5;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSV color: hue in whole degrees [0, 360), saturation and value in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// HSL color: hue in whole degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// RGB with alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// HSV with alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: u16,
    pub s: u8,
    pub v: u8,
    pub a: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl Hsv {
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    pub fn with_alpha(self, a: f64) -> Hsva {
        Hsva {
            h: self.h,
            s: self.s,
            v: self.v,
            a,
        }
    }
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

// -- Rounding --

/// Quantizes a unit-interval intensity to an 8-bit channel.
pub fn round_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Quantizes a unit-interval fraction to whole percent.
pub fn round_percent(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Rounds an angle to whole degrees in [0, 360). 359.5 and above wrap to 0.
pub fn round_degrees(deg: f64) -> u16 {
    (deg.round() as i64).rem_euclid(360) as u16
}

/// Wraps a whole-degree hue into [0, 360).
pub fn normalize_hue(h: u16) -> u16 {
    h % 360
}

fn channel_unit(c: u8) -> f64 {
    f64::from(c) / 255.0
}

fn percent_unit(p: u8) -> f64 {
    f64::from(p.min(100)) / 100.0
}

// -- Hex --

/// Parses `#rrggbb` or `rrggbb` (case insensitive).
///
/// Returns `None` for anything else. The UI treats `None` as black.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Strict form of [`hex_to_rgb`] that reports why the input was rejected.
pub fn parse_hex(hex: &str) -> Result<Rgb, PickerError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(PickerError::InvalidColor(format!(
            "expected 6 hex digits, got {} in {hex:?}",
            digits.len()
        )));
    }
    hex_to_rgb(digits)
        .ok_or_else(|| PickerError::InvalidColor(format!("non-hex digit in {hex:?}")))
}

/// Formats channels as lowercase, zero-padded `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

// -- HSV / HSL --

/// Hue in degrees (unrounded) from unit channels. Achromatic colors get 0.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    }
}

/// Converts RGB to HSV. Gray, white and black yield hue 0 and saturation 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = (channel_unit(rgb.r), channel_unit(rgb.g), channel_unit(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv {
        h: round_degrees(hue_degrees(r, g, b, max, delta)),
        s: round_percent(s),
        v: round_percent(max),
    }
}

/// Converts HSV to RGB using six half-open 60° sectors.
///
/// Hue is wrapped into [0, 360) first; saturation and value above 100 are
/// treated as 100.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = f64::from(normalize_hue(hsv.h)) / 60.0;
    let s = percent_unit(hsv.s);
    let v = percent_unit(hsv.v);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb {
        r: round_channel(r),
        g: round_channel(g),
        b: round_channel(b),
    }
}

/// Converts RGB to HSL. Gray, white and black yield hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = (channel_unit(rgb.r), channel_unit(rgb.g), channel_unit(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    Hsl {
        h: round_degrees(hue_degrees(r, g, b, max, delta)),
        s: round_percent(s),
        l: round_percent(l),
    }
}

/// Converts HSL to RGB via chroma and the intermediate hue sector.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(normalize_hue(hsl.h)) / 60.0;
    let s = percent_unit(hsl.s);
    let l = percent_unit(hsl.l);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h.floor() as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Rgb {
        r: round_channel(r + m),
        g: round_channel(g + m),
        b: round_channel(b + m),
    }
}
