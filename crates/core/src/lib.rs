#![deny(unsafe_code)]
//! Color math behind the picker widget.
//!
//! Provides the hex/RGB/HSL/HSV codec (`color`), the `ColorValue` snapshot,
//! color modes with their constraint gate, the seedable `RandomSource` and
//! random generator, the color bar and color area mappings, the edit pipeline
//! that ties them together, and the preset grid. Everything here is pure:
//! no I/O, no shared mutable state.

pub mod area;
pub mod bar;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod mode;
pub mod presets;
pub mod prng;
pub mod random;
pub mod value;

pub use bar::{position_from_sat_value, sat_value_from_position, SatValue};
pub use color::{Hsl, Hsv, Hsva, Rgb, Rgba};
pub use config::{PickerConfig, SliderVisibility};
pub use error::PickerError;
pub use mode::{constrain_to_mode, should_apply_constraints, ColorMode, ModeRange, ModeTable};
pub use presets::Presets;
pub use prng::{RandomSource, Xorshift64};
pub use random::generate_random_color;
pub use value::ColorValue;
