//! Preset swatches shown in the picker's preset grid.
//!
//! Entries are stored as hex strings, exactly as a host configures them, and
//! turned into `ColorValue`s through [`ColorValue::from_hex`]. A malformed
//! entry renders as black instead of failing the whole grid.

use crate::color::hex_to_rgb;
use crate::value::ColorValue;

/// The default preset grid: two rows of eight.
pub const DEFAULT_PRESETS: &[&str] = &[
    "#000000", "#ffffff", "#e2737e", "#f4a261", "#e9c46a", "#2a9d8f", "#264653", "#8ab17d",
    "#ff595e", "#ffca3a", "#8ac926", "#1982c4", "#6a4c93", "#b5179e", "#7209b7", "#4cc9f0",
];

/// An ordered list of preset hex strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Presets {
    hexes: Vec<String>,
}

impl Presets {
    pub fn from_hexes<S: AsRef<str>>(hexes: &[S]) -> Self {
        Self {
            hexes: hexes.iter().map(|h| h.as_ref().to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn hexes(&self) -> &[String] {
        &self.hexes
    }

    /// One opaque `ColorValue` per entry; malformed entries become black.
    pub fn color_values(&self) -> Vec<ColorValue> {
        self.hexes
            .iter()
            .map(|h| ColorValue::from_hex(h, 1.0))
            .collect()
    }

    /// Entries that do not parse as `#rrggbb`.
    pub fn invalid(&self) -> impl Iterator<Item = &str> {
        self.hexes
            .iter()
            .map(String::as_str)
            .filter(|h| hex_to_rgb(h).is_none())
    }

    /// Index of the first preset matching `color`'s hex, case-insensitively.
    pub fn position_of(&self, color: &ColorValue) -> Option<usize> {
        self.hexes
            .iter()
            .position(|h| hex_to_rgb(h).is_some_and(|rgb| rgb == color.rgb()))
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self::from_hexes(DEFAULT_PRESETS)
    }
}
