//! Error types for the picker core.
//!
//! Most of the core is total: malformed hex degrades to a fallback color and
//! unknown mode keys pass through. `PickerError` covers the strict entry
//! points (typed parsing, configuration loading) that report failures.

use thiserror::Error;

/// Errors produced by the strict parsing and configuration paths.
#[derive(Debug, Error, PartialEq)]
pub enum PickerError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color mode name is not one of the known modes.
    #[error("unknown color mode: {0}")]
    UnknownMode(String),

    /// A picker configuration or mode table could not be loaded.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for PickerError {
    fn from(e: serde_json::Error) -> Self {
        PickerError::InvalidConfig(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_message() {
        let err = PickerError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_mode_includes_name() {
        let err = PickerError::UnknownMode("neon".into());
        let msg = format!("{err}");
        assert!(msg.contains("neon"), "missing mode name in: {msg}");
    }

    #[test]
    fn invalid_config_includes_message() {
        let err = PickerError::InvalidConfig("min > max".into());
        let msg = format!("{err}");
        assert!(msg.contains("min > max"), "missing message in: {msg}");
    }

    #[test]
    fn serde_json_error_routes_to_invalid_config() {
        let bad = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = PickerError::from(bad);
        assert!(matches!(err, PickerError::InvalidConfig(_)));
    }

    #[test]
    fn picker_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PickerError>();
    }

    #[test]
    fn picker_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PickerError>();
    }
}
