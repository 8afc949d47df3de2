//! The color bar: a 1-D white → pure hue → black axis over HSV saturation/value.
//!
//! Position 0 is white, 50 is the pure hue, 100 is black. The bar is a lossy
//! projection of the 2-D saturation/value plane: a position only ever maps
//! back to the ridge (s ∈ [0,100], v = 100) ∪ (s = 100, v ∈ [0,100]). The two
//! functions below are deliberately one-way; only the left half (positions
//! 0..=50) survives a position → (s, v) → position trip. Use the color area
//! for arbitrary (s, v).

use serde::{Deserialize, Serialize};

/// Saturation and value in percent, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SatValue {
    pub s: f64,
    pub v: f64,
}

pub const BAR_MIN: f64 = 0.0;
pub const BAR_HUE: f64 = 50.0;
pub const BAR_MAX: f64 = 100.0;

fn percent(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 100.0)
    }
}

/// Bar position in [0, 100] for a saturation/value pair.
///
/// - `v == 0` is black (100) whatever the saturation.
/// - `s == 0` is white (0) whatever the value.
/// - In the bright half (`v >= 50`) the position is `s / 2`.
/// - In the dark half the position moves from the hue point toward black
///   as `v` falls from 50 to 0.
///
/// Inputs are clamped to [0, 100] first; a NaN saturation or value counts as 0.
pub fn position_from_sat_value(s: f64, v: f64) -> f64 {
    let s = percent(s);
    let v = percent(v);
    if v <= 0.0 {
        return BAR_MAX;
    }
    if s <= 0.0 {
        return BAR_MIN;
    }
    let hue_position = s * 0.5;
    let position = if v >= 50.0 {
        hue_position
    } else {
        let normalized_v = v / 50.0;
        hue_position + (1.0 - normalized_v) * (BAR_MAX - hue_position)
    };
    position.clamp(BAR_MIN, BAR_MAX)
}

/// Saturation/value for a bar position. Positions outside [0, 100] are clamped.
///
/// The left half keeps full value and raises saturation; the right half keeps
/// full saturation and lowers value.
pub fn sat_value_from_position(position: f64) -> SatValue {
    let position = percent(position);
    if position == BAR_MIN {
        SatValue { s: 0.0, v: 100.0 }
    } else if position <= BAR_HUE {
        SatValue {
            s: position * 2.0,
            v: 100.0,
        }
    } else {
        SatValue {
            s: 100.0,
            v: 100.0 - (position - BAR_HUE) * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Forward --

    #[test]
    fn forward_boundaries() {
        assert_eq!(position_from_sat_value(0.0, 100.0), 0.0);
        assert_eq!(position_from_sat_value(100.0, 100.0), 50.0);
        assert_eq!(position_from_sat_value(100.0, 0.0), 100.0);
    }

    #[test]
    fn forward_zero_value_is_black_for_any_saturation() {
        assert_eq!(position_from_sat_value(50.0, 0.0), 100.0);
        assert_eq!(position_from_sat_value(0.0, 0.0), 100.0);
    }

    #[test]
    fn forward_zero_saturation_is_white_for_any_value() {
        assert_eq!(position_from_sat_value(0.0, 30.0), 0.0);
        assert_eq!(position_from_sat_value(0.0, 75.0), 0.0);
    }

    #[test]
    fn forward_bright_half_is_half_saturation() {
        assert!(approx_eq(position_from_sat_value(40.0, 80.0), 20.0));
        assert!(approx_eq(position_from_sat_value(60.0, 50.0), 30.0));
    }

    #[test]
    fn forward_dark_half_interpolates_toward_black() {
        // Hue point at 25; v = 30 is 40% of the way down to black.
        let p = position_from_sat_value(50.0, 30.0);
        assert!(approx_eq(p, 25.0 + 0.4 * 75.0), "got {p}");
        let p = position_from_sat_value(100.0, 25.0);
        assert!(approx_eq(p, 75.0), "got {p}");
    }

    #[test]
    fn forward_nan_inputs_land_on_bar() {
        assert_eq!(position_from_sat_value(f64::NAN, 50.0), 0.0);
        assert_eq!(position_from_sat_value(50.0, f64::NAN), 100.0);
        assert_eq!(position_from_sat_value(f64::NAN, f64::NAN), 100.0);
    }

    #[test]
    fn forward_clamps_out_of_range_inputs() {
        assert_eq!(position_from_sat_value(250.0, 100.0), 50.0);
        assert_eq!(position_from_sat_value(-5.0, 80.0), 0.0);
        assert_eq!(position_from_sat_value(100.0, -1.0), 100.0);
        assert!(approx_eq(position_from_sat_value(400.0, 10.0), 90.0));
        assert!(approx_eq(position_from_sat_value(f64::INFINITY, 10.0), 90.0));
    }

    // -- Inverse --

    #[test]
    fn inverse_boundaries() {
        assert_eq!(sat_value_from_position(0.0), SatValue { s: 0.0, v: 100.0 });
        assert_eq!(sat_value_from_position(50.0), SatValue { s: 100.0, v: 100.0 });
        assert_eq!(sat_value_from_position(100.0), SatValue { s: 100.0, v: 0.0 });
    }

    #[test]
    fn inverse_left_half_keeps_full_value() {
        assert_eq!(sat_value_from_position(20.0), SatValue { s: 40.0, v: 100.0 });
    }

    #[test]
    fn inverse_right_half_keeps_full_saturation() {
        assert_eq!(sat_value_from_position(80.0), SatValue { s: 100.0, v: 40.0 });
    }

    #[test]
    fn inverse_clamps_out_of_range_positions() {
        assert_eq!(sat_value_from_position(-10.0), sat_value_from_position(0.0));
        assert_eq!(sat_value_from_position(140.0), sat_value_from_position(100.0));
        assert_eq!(sat_value_from_position(f64::NAN), sat_value_from_position(0.0));
    }

    #[test]
    fn dark_point_does_not_round_trip() {
        let p = position_from_sat_value(50.0, 30.0);
        assert!(approx_eq(p, 55.0), "got {p}");
        let back = sat_value_from_position(p);
        assert!(approx_eq(back.s, 100.0));
        assert!(approx_eq(back.v, 90.0));
    }

    #[test]
    fn right_half_does_not_round_trip() {
        // (100, 80) is in the bright half, so it projects onto the hue point.
        let sv = sat_value_from_position(60.0);
        assert_eq!(sv, SatValue { s: 100.0, v: 80.0 });
        assert_eq!(position_from_sat_value(sv.s, sv.v), 50.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn forward_stays_on_bar(s in 0.0_f64..=100.0, v in 0.0_f64..=100.0) {
                let p = position_from_sat_value(s, v);
                prop_assert!((BAR_MIN..=BAR_MAX).contains(&p), "{p} for s={s} v={v}");
            }

            #[test]
            fn forward_stays_on_bar_for_any_input(
                s in prop_oneof![-500.0_f64..500.0, Just(f64::NAN), Just(f64::INFINITY)],
                v in prop_oneof![-500.0_f64..500.0, Just(f64::NAN), Just(f64::NEG_INFINITY)],
            ) {
                let p = position_from_sat_value(s, v);
                prop_assert!((BAR_MIN..=BAR_MAX).contains(&p), "{p} for s={s} v={v}");
            }

            #[test]
            fn left_half_round_trips(p in 0.0_f64..=50.0) {
                let sv = sat_value_from_position(p);
                let back = position_from_sat_value(sv.s, sv.v);
                prop_assert!((back - p).abs() < 1e-9, "{p} -> {sv:?} -> {back}");
            }

            #[test]
            fn inverse_lands_on_ridge(p in -20.0_f64..120.0) {
                let sv = sat_value_from_position(p);
                prop_assert!(sv.v == 100.0 || sv.s == 100.0, "{sv:?}");
                prop_assert!((0.0..=100.0).contains(&sv.s));
                prop_assert!((0.0..=100.0).contains(&sv.v));
            }
        }
    }
}
