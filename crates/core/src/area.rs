//! The color area (2-D saturation/value canvas) and the hue slider.
//!
//! Pointer coordinates arrive as fractions of the control's extent, so the
//! mapping is independent of pixel size. x grows with saturation; y grows
//! downward, so the top edge is full value and the bottom edge is black.
//! Unlike the color bar, the area maps every (s, v) pair losslessly.

use crate::bar::SatValue;
use serde::{Deserialize, Serialize};

/// A point inside a control, each axis a fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaPoint {
    pub x: f64,
    pub y: f64,
}

fn unit(f: f64) -> f64 {
    if f.is_nan() {
        0.0
    } else {
        f.clamp(0.0, 1.0)
    }
}

/// Saturation/value under a pointer at fractional `(x, y)`. Outside points clamp to the edge.
pub fn sat_value_from_area(x: f64, y: f64) -> SatValue {
    SatValue {
        s: unit(x) * 100.0,
        v: (1.0 - unit(y)) * 100.0,
    }
}

/// Where the area's thumb sits for a saturation/value pair.
pub fn area_from_sat_value(s: f64, v: f64) -> AreaPoint {
    AreaPoint {
        x: unit(s / 100.0),
        y: 1.0 - unit(v / 100.0),
    }
}

/// Hue for a fraction along the hue slider, in whole degrees [0, 360).
///
/// The right end (1.0) is 360°, reported as 0.
pub fn hue_from_slider(fraction: f64) -> u16 {
    crate::color::round_degrees(unit(fraction) * 360.0)
}

/// Fraction along the hue slider for a hue. Hues of 360 and above wrap first.
pub fn slider_from_hue(h: u16) -> f64 {
    f64::from(crate::color::normalize_hue(h)) / 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_corners() {
        assert_eq!(sat_value_from_area(0.0, 0.0), SatValue { s: 0.0, v: 100.0 });
        assert_eq!(sat_value_from_area(1.0, 0.0), SatValue { s: 100.0, v: 100.0 });
        assert_eq!(sat_value_from_area(1.0, 1.0), SatValue { s: 100.0, v: 0.0 });
        assert_eq!(sat_value_from_area(0.0, 1.0), SatValue { s: 0.0, v: 0.0 });
    }

    #[test]
    fn area_clamps_points_outside_the_canvas() {
        assert_eq!(sat_value_from_area(-0.5, 2.0), SatValue { s: 0.0, v: 0.0 });
        assert_eq!(sat_value_from_area(f64::NAN, f64::NAN), SatValue { s: 0.0, v: 100.0 });
    }

    #[test]
    fn area_thumb_for_pure_hue_is_top_right() {
        assert_eq!(area_from_sat_value(100.0, 100.0), AreaPoint { x: 1.0, y: 0.0 });
    }

    #[test]
    fn hue_slider_ends() {
        assert_eq!(hue_from_slider(0.0), 0);
        assert_eq!(hue_from_slider(0.5), 180);
        assert_eq!(hue_from_slider(1.0), 0);
        assert_eq!(hue_from_slider(0.998), 359);
    }

    #[test]
    fn slider_from_hue_wraps() {
        assert_eq!(slider_from_hue(0), 0.0);
        assert_eq!(slider_from_hue(180), 0.5);
        assert_eq!(slider_from_hue(540), 0.5);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn area_mapping_is_lossless(s in 0.0_f64..=100.0, v in 0.0_f64..=100.0) {
                let p = area_from_sat_value(s, v);
                let back = sat_value_from_area(p.x, p.y);
                prop_assert!((back.s - s).abs() < 1e-9, "s {s} -> {}", back.s);
                prop_assert!((back.v - v).abs() < 1e-9, "v {v} -> {}", back.v);
            }

            #[test]
            fn hue_slider_round_trips(h in 0u16..360) {
                prop_assert_eq!(hue_from_slider(slider_from_hue(h)), h);
            }
        }
    }
}
