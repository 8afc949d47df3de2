//! The `ColorValue` snapshot shared by every picker control.
//!
//! A `ColorValue` carries one color in three redundant encodings (hex, RGB,
//! HSV) plus a single alpha. Values are immutable; every edit returns a new
//! snapshot.
//!
//! Snapshots built from hex or RGB hold exactly `rgb_to_hsv(rgb)`. Snapshots
//! produced by an HSV edit keep the edited HSV as given and derive RGB and hex
//! from it, so editing hue never disturbs saturation or value (and hue
//! survives on gray colors, where RGB alone cannot carry it).

use crate::color::{hex_to_rgb, hsv_to_rgb, normalize_hue, rgb_to_hsv, round_percent};
use crate::color::{Hsv, Hsva, Rgb, Rgba};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorValue {
    hex: String,
    rgb: Rgb,
    alpha: f64,
    hsv: Hsv,
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

impl ColorValue {
    /// Builds a snapshot from `#rrggbb` / `rrggbb`.
    ///
    /// Malformed hex yields black at the given alpha. Callers that must tell
    /// bad input apart from a real black check [`hex_to_rgb`] first.
    pub fn from_hex(hex: &str, alpha: f64) -> Self {
        let rgb = hex_to_rgb(hex).unwrap_or_else(|| {
            log::debug!("malformed hex {hex:?}, falling back to black");
            Rgb::BLACK
        });
        Self::from_rgb(rgb, alpha)
    }

    pub fn from_rgb(rgb: Rgb, alpha: f64) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            alpha: clamp_alpha(alpha),
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Builds a snapshot with `hsv` authoritative. Hue is wrapped into [0, 360)
    /// and saturation/value capped at 100.
    pub fn from_hsv(hsv: Hsv, alpha: f64) -> Self {
        let hsv = Hsv {
            h: normalize_hue(hsv.h),
            s: hsv.s.min(100),
            v: hsv.v.min(100),
        };
        let rgb = hsv_to_rgb(hsv);
        Self {
            hex: rgb.to_hex(),
            rgb,
            alpha: clamp_alpha(alpha),
            hsv,
        }
    }

    /// New hue, same saturation, value and alpha.
    pub fn with_hue_change(&self, hue: u16) -> Self {
        Self::from_hsv(Hsv { h: hue, ..self.hsv }, self.alpha)
    }

    /// New saturation and value (percent, rounded), same hue and alpha.
    pub fn with_saturation_value_change(&self, s: f64, v: f64) -> Self {
        let hsv = Hsv {
            h: self.hsv.h,
            s: round_percent(s / 100.0),
            v: round_percent(v / 100.0),
        };
        Self::from_hsv(hsv, self.alpha)
    }

    /// New alpha given in percent [0, 100]; colors untouched.
    pub fn with_alpha_change(&self, alpha_percent: f64) -> Self {
        Self {
            alpha: clamp_alpha(alpha_percent / 100.0),
            ..self.clone()
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Alpha as a whole percent, for the alpha slider.
    pub fn alpha_percent(&self) -> u8 {
        round_percent(self.alpha)
    }

    pub fn rgba(&self) -> Rgba {
        self.rgb.with_alpha(self.alpha)
    }

    pub fn hsva(&self) -> Hsva {
        self.hsv.with_alpha(self.alpha)
    }
}
