#![deny(unsafe_code)]
//! WASM bindings for the picker color engine.
//!
//! Exposes the color codec, `ColorValue` snapshots, mode constraints, the
//! color bar mapping, the edit pipeline and a seeded random color source to
//! the hosting web UI. Names follow JavaScript conventions.

use picker_core::bar::SatValue;
use picker_core::color::{self, Hsl, Hsv, Rgb};
use picker_core::editor;
use picker_core::mode::standard_table;
use picker_core::{ColorMode, ColorValue, ModeTable, PickerConfig, SliderVisibility, Xorshift64};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = Rgb)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[wasm_bindgen(js_name = Hsv)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsHsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

#[wasm_bindgen(js_name = Hsl)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsHsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[wasm_bindgen(js_name = SatValue)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsSatValue {
    pub s: f64,
    pub v: f64,
}

impl From<Rgb> for JsRgb {
    fn from(c: Rgb) -> Self {
        Self { r: c.r, g: c.g, b: c.b }
    }
}

impl From<Hsv> for JsHsv {
    fn from(c: Hsv) -> Self {
        Self { h: c.h, s: c.s, v: c.v }
    }
}

impl From<Hsl> for JsHsl {
    fn from(c: Hsl) -> Self {
        Self { h: c.h, s: c.s, l: c.l }
    }
}

impl From<SatValue> for JsSatValue {
    fn from(sv: SatValue) -> Self {
        Self { s: sv.s, v: sv.v }
    }
}

// -- Codec --

/// Parses `#rrggbb` / `rrggbb`; `undefined` for malformed input.
#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb(hex: &str) -> Option<JsRgb> {
    color::hex_to_rgb(hex).map(JsRgb::from)
}

#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    color::rgb_to_hex(Rgb::new(r, g, b))
}

#[wasm_bindgen(js_name = rgbToHsv)]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> JsHsv {
    color::rgb_to_hsv(Rgb::new(r, g, b)).into()
}

#[wasm_bindgen(js_name = hsvToRgb)]
pub fn hsv_to_rgb(h: u16, s: u8, v: u8) -> JsRgb {
    color::hsv_to_rgb(Hsv::new(h, s, v)).into()
}

#[wasm_bindgen(js_name = rgbToHsl)]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> JsHsl {
    color::rgb_to_hsl(Rgb::new(r, g, b)).into()
}

#[wasm_bindgen(js_name = hslToRgb)]
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> JsRgb {
    color::hsl_to_rgb(Hsl::new(h, s, l)).into()
}

// -- ColorValue --

/// Immutable color snapshot. Every `with*` method returns a new object.
#[wasm_bindgen(js_name = ColorValue)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsColorValue {
    inner: ColorValue,
}

impl From<ColorValue> for JsColorValue {
    fn from(inner: ColorValue) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen(js_class = ColorValue)]
impl JsColorValue {
    #[wasm_bindgen(getter)]
    pub fn hex(&self) -> String {
        self.inner.hex().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn rgb(&self) -> JsRgb {
        self.inner.rgb().into()
    }

    #[wasm_bindgen(getter)]
    pub fn hsv(&self) -> JsHsv {
        self.inner.hsv().into()
    }

    #[wasm_bindgen(getter)]
    pub fn alpha(&self) -> f64 {
        self.inner.alpha()
    }

    #[wasm_bindgen(js_name = withHueChange)]
    pub fn with_hue_change(&self, hue: u16) -> JsColorValue {
        self.inner.with_hue_change(hue).into()
    }

    #[wasm_bindgen(js_name = withSaturationValueChange)]
    pub fn with_saturation_value_change(&self, s: f64, v: f64) -> JsColorValue {
        self.inner.with_saturation_value_change(s, v).into()
    }

    /// Alpha given in percent [0, 100].
    #[wasm_bindgen(js_name = withAlphaChange)]
    pub fn with_alpha_change(&self, alpha_percent: f64) -> JsColorValue {
        self.inner.with_alpha_change(alpha_percent).into()
    }

    /// `{hex, rgb, alpha, hsv}` as a JSON string.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.inner).unwrap_or_default()
    }
}

/// Builds a snapshot from hex; malformed hex becomes black at `alpha`.
#[wasm_bindgen(js_name = fromHex)]
pub fn from_hex(hex: &str, alpha: f64) -> JsColorValue {
    ColorValue::from_hex(hex, alpha).into()
}

// -- Modes and constraints --

/// Clamps into the named mode; unknown names pass through.
#[wasm_bindgen(js_name = constrainToMode)]
pub fn constrain_to_mode(s: f64, v: f64, mode: &str) -> JsSatValue {
    picker_core::constrain_to_mode(s, v, mode).into()
}

fn sliders(show_saturation: bool, show_lightness: bool) -> SliderVisibility {
    SliderVisibility {
        show_saturation,
        show_lightness,
        ..SliderVisibility::default()
    }
}

/// Gate over the built-in modes. Names outside the table never constrain,
/// matching `constrainToMode`; use `ModeTable` for custom modes.
#[wasm_bindgen(js_name = shouldApplyConstraints)]
pub fn should_apply_constraints(mode: &str, show_saturation: bool, show_lightness: bool) -> bool {
    standard_table().should_apply_constraints(mode, sliders(show_saturation, show_lightness))
}

/// Built-in modes plus host-defined ones.
#[wasm_bindgen(js_name = ModeTable)]
#[derive(Debug, Clone, Default)]
pub struct JsModeTable {
    inner: ModeTable,
}

#[wasm_bindgen(js_class = ModeTable)]
impl JsModeTable {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsModeTable {
        JsModeTable::default()
    }

    /// Merges `{"name": {"saturation": {min, max}, "value": {min, max}}}` over the built-ins.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<JsModeTable, JsError> {
        ModeTable::from_json(json)
            .map(|inner| JsModeTable { inner })
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn constrain(&self, s: f64, v: f64, mode: &str) -> JsSatValue {
        self.inner.constrain(s, v, mode).into()
    }

    #[wasm_bindgen(js_name = shouldApplyConstraints)]
    pub fn should_apply_constraints(&self, mode: &str, show_saturation: bool, show_lightness: bool) -> bool {
        self.inner
            .should_apply_constraints(mode, sliders(show_saturation, show_lightness))
    }

    /// Color bar edit gated and clamped under `mode` from this table.
    #[wasm_bindgen(js_name = editFromBar)]
    pub fn edit_from_bar(
        &self,
        current: &JsColorValue,
        position: f64,
        mode: &str,
        show_saturation: bool,
        show_lightness: bool,
    ) -> JsColorValue {
        let sliders = sliders(show_saturation, show_lightness);
        editor::edit_from_bar_in(&current.inner, position, mode, sliders, &self.inner).into()
    }
}

// -- Color bar --

#[wasm_bindgen(js_name = positionFromSatValue)]
pub fn position_from_sat_value(s: f64, v: f64) -> f64 {
    picker_core::position_from_sat_value(s, v)
}

#[wasm_bindgen(js_name = satValueFromPosition)]
pub fn sat_value_from_position(position: f64) -> JsSatValue {
    picker_core::sat_value_from_position(position).into()
}

// -- Edit pipeline --

/// Picker configuration parsed once from JSON and reused across edits.
#[wasm_bindgen(js_name = PickerConfig)]
#[derive(Debug, Clone, Default)]
pub struct JsPickerConfig {
    inner: PickerConfig,
}

#[wasm_bindgen(js_class = PickerConfig)]
impl JsPickerConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsPickerConfig {
        JsPickerConfig::default()
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<JsPickerConfig, JsError> {
        PickerConfig::from_json(json)
            .map(|inner| JsPickerConfig { inner })
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = constraintsApply)]
    pub fn constraints_apply(&self) -> bool {
        picker_core::should_apply_constraints(self.inner.mode, self.inner.sliders)
    }
}

#[wasm_bindgen(js_name = editFromBar)]
pub fn edit_from_bar(current: &JsColorValue, position: f64, config: &JsPickerConfig) -> JsColorValue {
    editor::edit_from_bar(&current.inner, position, &config.inner).into()
}

#[wasm_bindgen(js_name = editFromArea)]
pub fn edit_from_area(current: &JsColorValue, x: f64, y: f64, config: &JsPickerConfig) -> JsColorValue {
    editor::edit_from_area(&current.inner, x, y, &config.inner).into()
}

#[wasm_bindgen(js_name = editHue)]
pub fn edit_hue(current: &JsColorValue, fraction: f64) -> JsColorValue {
    editor::edit_hue(&current.inner, fraction).into()
}

// -- Random --

/// One seeded random source for the page; keep a single instance alive.
#[wasm_bindgen]
pub struct RandomColors {
    rng: Xorshift64,
}

#[wasm_bindgen]
impl RandomColors {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> RandomColors {
        RandomColors {
            rng: Xorshift64::new(seed),
        }
    }

    /// Samples a color in the named mode (normal, pastel, vivid).
    pub fn next(&mut self, mode: &str) -> Result<JsColorValue, JsError> {
        let mode = mode
            .parse::<ColorMode>()
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self.next_in(mode))
    }
}

impl RandomColors {
    fn next_in(&mut self, mode: ColorMode) -> JsColorValue {
        picker_core::generate_random_color(mode, &mut self.rng).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_none_for_bad_input() {
        assert_eq!(hex_to_rgb("bad-input"), None);
        assert_eq!(hex_to_rgb("#E2737E"), Some(JsRgb { r: 226, g: 115, b: 126 }));
    }

    #[test]
    fn from_hex_fallback_json() {
        let json = from_hex("bad-input", 1.0).to_json();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["hex"], "#000000");
        assert_eq!(v["alpha"], 1.0);
    }

    #[test]
    fn color_value_edits_return_new_snapshots() {
        let start = from_hex("#E2737E", 1.0);
        let moved = start.with_hue_change(120);
        assert_eq!(moved.hex(), "#74e374");
        assert_eq!(start.hex(), "#e2737e");
        assert_eq!(moved.with_alpha_change(50.0).alpha(), 0.5);
    }

    #[test]
    fn gate_parses_mode_names() {
        assert!(should_apply_constraints("pastel", false, false));
        assert!(!should_apply_constraints("pastel", true, false));
        assert!(!should_apply_constraints("normal", false, false));
        assert!(!should_apply_constraints("neon", false, false));
    }

    #[test]
    fn mode_table_gates_custom_modes() {
        let mut table = JsModeTable::new();
        table
            .inner
            .insert(
                "muted",
                picker_core::ModeRange::new(
                    picker_core::mode::Range::new(10, 30),
                    picker_core::mode::Range::new(40, 70),
                ),
            )
            .unwrap();
        assert!(table.should_apply_constraints("muted", false, false));
        assert!(!should_apply_constraints("muted", false, false));
        let c = table.edit_from_bar(&from_hex("#E2737E", 1.0), 100.0, "muted", false, false);
        assert_eq!(c.hsv(), JsHsv { h: 354, s: 30, v: 40 });
        assert_eq!(table.constrain(90.0, 90.0, "muted"), JsSatValue { s: 30.0, v: 70.0 });
    }

    #[test]
    fn bar_exports_match_core() {
        assert_eq!(position_from_sat_value(100.0, 100.0), 50.0);
        assert_eq!(sat_value_from_position(100.0), JsSatValue { s: 100.0, v: 0.0 });
        assert_eq!(constrain_to_mode(0.0, 0.0, "pastel"), JsSatValue { s: 45.0, v: 75.0 });
    }

    #[test]
    fn default_config_edits_from_bar() {
        let c = edit_from_bar(&from_hex("#ff0000", 1.0), 0.0, &JsPickerConfig::new());
        assert_eq!(c.hex(), "#ffffff");
    }

    #[test]
    fn random_colors_are_seeded() {
        let mut a = RandomColors::new(9);
        let mut b = RandomColors::new(9);
        for _ in 0..10 {
            assert_eq!(a.next_in(ColorMode::Vivid), b.next_in(ColorMode::Vivid));
        }
    }
}
