//! Edit pipeline from a control interaction to the next `ColorValue`.
//!
//! Color area and color bar edits run: spatial mapping → constraint gate →
//! optional clamp into the mode envelope → HSV update. The gate is evaluated
//! on every call from the configuration passed in. Hue and alpha edits never
//! pass through the gate.

use crate::area::{hue_from_slider, sat_value_from_area};
use crate::bar::{sat_value_from_position, SatValue};
use crate::config::{PickerConfig, SliderVisibility};
use crate::mode::{should_apply_constraints, ModeTable};
use crate::value::ColorValue;

fn gated(sv: SatValue, config: &PickerConfig) -> SatValue {
    if should_apply_constraints(config.mode, config.sliders) {
        let constrained = config.mode.constrain(sv.s, sv.v);
        log::debug!(
            "{} constraint: s {} -> {}, v {} -> {}",
            config.mode,
            sv.s,
            constrained.s,
            sv.v,
            constrained.v
        );
        constrained
    } else {
        sv
    }
}

/// Applies a raw saturation/value pick (percent) from the color area.
pub fn edit_from_sat_value(current: &ColorValue, s: f64, v: f64, config: &PickerConfig) -> ColorValue {
    let sv = gated(SatValue { s, v }, config);
    current.with_saturation_value_change(sv.s, sv.v)
}

/// Applies a pointer at fractional `(x, y)` inside the color area.
pub fn edit_from_area(current: &ColorValue, x: f64, y: f64, config: &PickerConfig) -> ColorValue {
    let sv = sat_value_from_area(x, y);
    edit_from_sat_value(current, sv.s, sv.v, config)
}

/// Applies a color bar position in [0, 100].
pub fn edit_from_bar(current: &ColorValue, position: f64, config: &PickerConfig) -> ColorValue {
    let sv = sat_value_from_position(position);
    edit_from_sat_value(current, sv.s, sv.v, config)
}

/// Applies a raw saturation/value pick under a mode key resolved in `table`.
///
/// `PickerConfig::mode` only names built-in modes; this is the path for modes
/// added with [`ModeTable::insert`].
pub fn edit_from_sat_value_in(
    current: &ColorValue,
    s: f64,
    v: f64,
    mode: &str,
    sliders: SliderVisibility,
    table: &ModeTable,
) -> ColorValue {
    let sv = if table.should_apply_constraints(mode, sliders) {
        let constrained = table.constrain(s, v, mode);
        log::debug!("{mode} constraint: s {s} -> {}, v {v} -> {}", constrained.s, constrained.v);
        constrained
    } else {
        SatValue { s, v }
    };
    current.with_saturation_value_change(sv.s, sv.v)
}

/// Color bar edit under a mode key resolved in `table`.
pub fn edit_from_bar_in(
    current: &ColorValue,
    position: f64,
    mode: &str,
    sliders: SliderVisibility,
    table: &ModeTable,
) -> ColorValue {
    let sv = sat_value_from_position(position);
    edit_from_sat_value_in(current, sv.s, sv.v, mode, sliders, table)
}

/// Color area edit under a mode key resolved in `table`.
pub fn edit_from_area_in(
    current: &ColorValue,
    x: f64,
    y: f64,
    mode: &str,
    sliders: SliderVisibility,
    table: &ModeTable,
) -> ColorValue {
    let sv = sat_value_from_area(x, y);
    edit_from_sat_value_in(current, sv.s, sv.v, mode, sliders, table)
}

/// Applies a fraction along the hue slider.
pub fn edit_hue(current: &ColorValue, fraction: f64) -> ColorValue {
    current.with_hue_change(hue_from_slider(fraction))
}

/// Applies an alpha slider value in percent.
pub fn edit_alpha(current: &ColorValue, alpha_percent: f64) -> ColorValue {
    current.with_alpha_change(alpha_percent)
}
