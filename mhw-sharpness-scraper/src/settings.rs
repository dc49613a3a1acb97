//! Harvest settings (source base URLs, request timeout, output directory).
//!
//! The settings file lives at `~/.config/mhw-sharpness/settings.toml`. Every
//! field is optional in the file; missing fields fall back to the defaults
//! below, and a missing file means all defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;
use crate::sources::{mhwdb, mhwg};

/// Seconds before a single document request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reference_base_url: String,
    pub alternate_base_url: String,
    pub timeout_secs: u64,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reference_base_url: mhwdb::DEFAULT_BASE_URL.to_string(),
            alternate_base_url: mhwg::DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Load from the canonical settings path.
    pub fn load() -> Result<Self, ScrapeError> {
        Self::load_from(&settings_path())
    }

    /// Load from `path`, using defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ScrapeError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pretty TOML rendering, for `config show`.
    pub fn to_toml(&self) -> Result<String, ScrapeError> {
        toml::to_string_pretty(self).map_err(|e| ScrapeError::Config(e.to_string()))
    }
}

/// Canonical path to the settings file: `~/.config/mhw-sharpness/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mhw-sharpness").join("settings.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "timeout_secs = 10\noutput_dir = \"/tmp/out\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.timeout_secs, 10);
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(settings.reference_base_url, mhwdb::DEFAULT_BASE_URL);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));
    }

    #[test]
    fn overrides_and_rendering() {
        let settings = Settings::default()
            .with_timeout_secs(7)
            .with_output_dir(PathBuf::from("out"));
        let text = settings.to_toml().unwrap();
        assert!(text.contains("timeout_secs = 7"));

        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn path_ends_in_app_dir() {
        let path = settings_path();
        assert!(path.ends_with("mhw-sharpness/settings.toml"));
    }
}
