//! Settings file for the terminal host.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Optional game settings read from TOML.
///
/// Any value left out is asked for interactively.
///
/// ```toml
/// side = 15
/// run_length = 5
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Grid side length.
    #[serde(default)]
    #[getter(copy)]
    side: Option<usize>,

    /// Pieces in a row needed to win.
    #[serde(default)]
    #[getter(copy)]
    run_length: Option<usize>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(side = ?settings.side, run_length = ?settings.run_length, "Settings loaded");
        Ok(settings)
    }

    /// Overlays command-line values; flags win over file values.
    #[instrument]
    pub fn with_overrides(self, side: Option<usize>, run_length: Option<usize>) -> Self {
        Self {
            side: side.or(self.side),
            run_length: run_length.or(self.run_length),
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "side = 15\nrun_length = 5").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.side(), Some(15));
        assert_eq!(settings.run_length(), Some(5));
    }

    #[test]
    fn test_missing_keys_default_to_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "side = 9").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.side(), Some(9));
        assert_eq!(settings.run_length(), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "side = \"big\"").unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read settings file"));
    }

    #[test]
    fn test_flags_override_file() {
        let from_file = Settings {
            side: Some(10),
            run_length: Some(4),
        };
        let merged = from_file.with_overrides(Some(12), None);
        assert_eq!(merged.side(), Some(12));
        assert_eq!(merged.run_length(), Some(4));
    }
}
