//! Picker configuration: which controls the host shows and which mode it runs in.
//!
//! Loaded from JSON. Missing fields take their defaults; unknown fields are
//! rejected so a typo does not silently fall back to a default.

use crate::error::PickerError;
use crate::mode::ColorMode;
use crate::presets::DEFAULT_PRESETS;
use serde::{Deserialize, Serialize};

/// Visibility of the individual sliders. Every slider is shown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderVisibility {
    pub show_hue: bool,
    pub show_saturation: bool,
    /// The lightness slider edits HSV value.
    pub show_lightness: bool,
    pub show_alpha: bool,
}

impl Default for SliderVisibility {
    fn default() -> Self {
        Self {
            show_hue: true,
            show_saturation: true,
            show_lightness: true,
            show_alpha: true,
        }
    }
}

impl SliderVisibility {
    /// Hue and alpha shown, saturation and lightness hidden.
    pub fn hue_and_alpha_only() -> Self {
        Self {
            show_saturation: false,
            show_lightness: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Envelope used for random colors and, when the gate allows, manual edits.
    pub mode: ColorMode,
    pub sliders: SliderVisibility,
    /// The 2-D saturation/value canvas.
    pub show_color_area: bool,
    /// The 1-D white → hue → black bar.
    pub show_color_bar: bool,
    pub show_presets: bool,
    /// Hex strings for the preset grid.
    pub presets: Vec<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: ColorMode::Normal,
            sliders: SliderVisibility::default(),
            show_color_area: true,
            show_color_bar: false,
            show_presets: true,
            presets: DEFAULT_PRESETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_every_slider() {
        let sliders = SliderVisibility::default();
        assert!(sliders.show_hue && sliders.show_saturation);
        assert!(sliders.show_lightness && sliders.show_alpha);
    }

    #[test]
    fn hue_and_alpha_only_hides_saturation_and_lightness() {
        let sliders = SliderVisibility::hue_and_alpha_only();
        assert!(sliders.show_hue && sliders.show_alpha);
        assert!(!sliders.show_saturation && !sliders.show_lightness);
    }

    #[test]
    fn empty_json_yields_defaults() {
        assert_eq!(PickerConfig::from_json("{}").unwrap(), PickerConfig::default());
    }

    #[test]
    fn partial_json_overrides_named_fields() {
        let config = PickerConfig::from_json(
            r#"{"mode": "pastel", "sliders": {"show_saturation": false}, "show_color_bar": true}"#,
        )
        .unwrap();
        assert_eq!(config.mode, ColorMode::Pastel);
        assert!(!config.sliders.show_saturation);
        assert!(config.sliders.show_lightness);
        assert!(config.show_color_bar);
        assert!(config.show_color_area);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = PickerConfig::from_json(r#"{"show_colour_bar": true}"#).unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(PickerConfig::from_json(r#"{"mode": "neon"}"#).is_err());
    }

    #[test]
    fn default_has_preset_grid() {
        assert_eq!(PickerConfig::default().presets.len(), DEFAULT_PRESETS.len());
    }

    #[test]
    fn json_round_trip() {
        let mut config = PickerConfig::default();
        config.mode = ColorMode::Vivid;
        config.sliders = SliderVisibility::hue_and_alpha_only();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }
}
