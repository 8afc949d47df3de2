//! Color modes: named saturation/value envelopes.
//!
//! A mode bounds saturation and value (both in percent). `normal` spans the
//! full range, `pastel` keeps colors soft and bright, `vivid` keeps them
//! saturated. The same envelope drives random sampling and the clamping of
//! manual edits made through the color area or color bar.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::bar::SatValue;
use crate::config::SliderVisibility;
use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// Inclusive percent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: u8,
    pub max: u8,
}

impl Range {
    pub const FULL: Range = Range { min: 0, max: 100 };

    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, x: u8) -> bool {
        (self.min..=self.max).contains(&x)
    }

    /// Clamps `x` into the range. NaN maps to `min`.
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(f64::from(self.min)).min(f64::from(self.max))
    }

    fn validate(&self, what: &str) -> Result<(), PickerError> {
        if self.min > self.max || self.max > 100 {
            return Err(PickerError::InvalidConfig(format!(
                "{what} range [{}, {}] must satisfy min <= max <= 100",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Saturation and value envelope of one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRange {
    pub saturation: Range,
    pub value: Range,
}

impl ModeRange {
    pub const fn new(saturation: Range, value: Range) -> Self {
        Self { saturation, value }
    }

    /// Clamps saturation and value independently.
    pub fn constrain(&self, s: f64, v: f64) -> SatValue {
        SatValue {
            s: self.saturation.clamp(s),
            v: self.value.clamp(v),
        }
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        self.saturation.validate("saturation")?;
        self.value.validate("value")
    }
}

/// The built-in color modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Normal,
    Pastel,
    Vivid,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Normal, ColorMode::Pastel, ColorMode::Vivid];

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Normal => "normal",
            ColorMode::Pastel => "pastel",
            ColorMode::Vivid => "vivid",
        }
    }

    /// The saturation/value envelope of this mode.
    pub const fn range(self) -> ModeRange {
        match self {
            ColorMode::Normal => ModeRange::new(Range::FULL, Range::FULL),
            ColorMode::Pastel => ModeRange::new(Range::new(45, 75), Range::new(75, 95)),
            ColorMode::Vivid => ModeRange::new(Range::new(60, 100), Range::new(50, 100)),
        }
    }

    pub fn constrain(self, s: f64, v: f64) -> SatValue {
        self.range().constrain(s, v)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PickerError::UnknownMode(s.to_string()))
    }
}

/// Mode envelopes keyed by name. Starts from the built-ins; hosts may add more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeTable {
    modes: BTreeMap<String, ModeRange>,
}

impl ModeTable {
    /// The built-in normal/pastel/vivid table.
    pub fn standard() -> Self {
        let modes = ColorMode::ALL
            .into_iter()
            .map(|m| (m.name().to_string(), m.range()))
            .collect();
        Self { modes }
    }

    /// Parses a JSON object of extra modes and merges it over the built-ins.
    ///
    /// Every entry is validated; a built-in key in the JSON replaces the built-in.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let extra: BTreeMap<String, ModeRange> = serde_json::from_str(json)?;
        let mut table = Self::standard();
        for (name, range) in extra {
            table.insert(name, range)?;
        }
        Ok(table)
    }

    /// Adds or replaces a mode after validating its ranges.
    pub fn insert(&mut self, name: impl Into<String>, range: ModeRange) -> Result<(), PickerError> {
        range.validate()?;
        self.modes.insert(name.into(), range);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ModeRange> {
        self.modes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    /// Clamps into the named mode. An unknown name passes the values through.
    pub fn constrain(&self, s: f64, v: f64, mode: &str) -> SatValue {
        match self.get(mode) {
            Some(range) => range.constrain(s, v),
            None => {
                log::debug!("unknown color mode {mode:?}, leaving s={s} v={v} unconstrained");
                SatValue { s, v }
            }
        }
    }

    /// Gate for a mode key resolved through this table.
    ///
    /// Same rule as [`should_apply_constraints`], so custom modes gate like the
    /// built-ins. A key missing from the table never constrains, matching
    /// [`ModeTable::constrain`].
    pub fn should_apply_constraints(&self, mode: &str, sliders: SliderVisibility) -> bool {
        sliders_hidden(sliders) && mode != ColorMode::Normal.name() && self.get(mode).is_some()
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Process-wide built-in table, read-only after first use.
pub fn standard_table() -> &'static ModeTable {
    static TABLE: OnceLock<ModeTable> = OnceLock::new();
    TABLE.get_or_init(ModeTable::standard)
}

/// Clamps saturation and value into the named built-in mode.
///
/// Unknown names pass through unchanged.
pub fn constrain_to_mode(s: f64, v: f64, mode: &str) -> SatValue {
    standard_table().constrain(s, v, mode)
}

/// Whether area/bar edits should be clamped into the mode's envelope.
///
/// True only when both the saturation and the lightness/value sliders are
/// hidden and the mode is not `normal`. Evaluate on every edit.
pub fn should_apply_constraints(mode: ColorMode, sliders: SliderVisibility) -> bool {
    sliders_hidden(sliders) && mode != ColorMode::Normal
}

fn sliders_hidden(sliders: SliderVisibility) -> bool {
    !sliders.show_saturation && !sliders.show_lightness
}
