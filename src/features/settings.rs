//! Application settings
//!
//! Loaded once at startup from `settings.json` in the platform config
//! directory. Control values themselves are never written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::control::FractionMode;
use super::control::circular::ARC_DEGREES;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Circular dial settings
    pub dial: DialSettings,
    /// Horizontal stagger slider settings
    pub stagger: StaggerSettings,
    /// Vertical dual-mode slider settings
    pub vertical: VerticalSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

/// Circular dial settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialSettings {
    /// Temperature shown on startup (0 to 270)
    pub initial_temperature: f32,
    /// Preset buttons, in display order
    pub presets: Vec<f32>,
    /// Increment of the +/- buttons
    pub step: f32,
    /// How the arc color is blended inside a segment
    pub color_mode: FractionMode,
}

/// Horizontal stagger slider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerSettings {
    pub initial: f32,
    pub min: f32,
    pub max: f32,
}

/// Vertical dual-mode slider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalSettings {
    pub initial_temperature: f32,
    pub initial_humidity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            dial: DialSettings::default(),
            stagger: StaggerSettings::default(),
            vertical: VerticalSettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            initial_temperature: 180.0,
            presets: vec![100.0, 150.0, 180.0, 200.0, 220.0],
            step: 10.0,
            color_mode: FractionMode::SegmentRelative,
        }
    }
}

impl Default for StaggerSettings {
    fn default() -> Self {
        Self {
            initial: 32.0,
            min: 0.0,
            max: 100.0,
        }
    }
}

impl Default for VerticalSettings {
    fn default() -> Self {
        Self {
            initial_temperature: 0.0,
            initial_humidity: 0.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "thermodial", "Thermodial")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse settings, filling gaps with defaults and repairing bad numbers
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        Ok(settings.sanitized())
    }

    /// Bring every number back into a range the controls can use
    pub fn sanitized(mut self) -> Self {
        let dial = &mut self.dial;
        dial.initial_temperature = finite_or(dial.initial_temperature, 180.0).clamp(0.0, ARC_DEGREES);
        dial.presets.retain(|p| p.is_finite() && (0.0..=ARC_DEGREES).contains(p));
        if !(dial.step.is_finite() && dial.step > 0.0) {
            dial.step = DialSettings::default().step;
        }

        let stagger = &mut self.stagger;
        if !(stagger.min.is_finite() && stagger.max.is_finite() && stagger.min < stagger.max) {
            let defaults = StaggerSettings::default();
            stagger.min = defaults.min;
            stagger.max = defaults.max;
        }
        stagger.initial = finite_or(stagger.initial, stagger.min).clamp(stagger.min, stagger.max);

        let vertical = &mut self.vertical;
        vertical.initial_temperature = finite_or(vertical.initial_temperature, 0.0);
        vertical.initial_humidity = finite_or(vertical.initial_humidity, 0.0);

        self
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = Settings::from_json(r#"{ "dial": { "step": 5.0 } }"#).unwrap();
        assert_eq!(settings.dial.step, 5.0);
        assert_eq!(settings.dial.initial_temperature, 180.0);
        assert_eq!(settings.dial.presets, vec![100.0, 150.0, 180.0, 200.0, 220.0]);
        assert!(settings.display.dark_mode);
    }

    #[test]
    fn test_color_mode_names() {
        let settings = Settings::from_json(r#"{ "dial": { "color_mode": "legacy" } }"#).unwrap();
        assert_eq!(settings.dial.color_mode, FractionMode::Legacy);
    }

    #[test]
    fn test_invalid_ranges_are_sanitized() {
        let settings = Settings::from_json(
            r#"{
                "dial": { "initial_temperature": 999.0, "presets": [50.0, 300.0], "step": -2.0 },
                "stagger": { "initial": 500.0, "min": 10.0, "max": 5.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.dial.initial_temperature, 270.0);
        assert_eq!(settings.dial.presets, vec![50.0]);
        assert_eq!(settings.dial.step, 10.0);
        assert_eq!(settings.stagger.min, 0.0);
        assert_eq!(settings.stagger.max, 100.0);
        assert_eq!(settings.stagger.initial, 100.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "thermodial-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "display": { "dark_mode": false } }"#).unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert!(!settings.display.dark_mode);

        std::fs::remove_file(&path).ok();
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }
}
