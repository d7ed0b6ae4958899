// LineTally - platform/config.rs
//
// Platform-specific path resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LineTally configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/linetally/ or %APPDATA%\LineTally\)
    pub config_dir: PathBuf,

    /// Data directory for logs, caches, etc.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[form]` section.
    pub form: FormSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[form]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FormSection {
    /// Maximum number of rows the form may hold.
    pub max_rows: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level directive (e.g. "info", "debug").
    pub level: Option<String>,
}

/// Validated runtime settings: config values clamped to the named bounds,
/// defaults filled in.
#[derive(Debug, Clone)]
pub struct Settings {
    pub font_size: f32,
    pub max_rows: usize,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: constants::DEFAULT_FONT_SIZE,
            max_rows: constants::DEFAULT_MAX_ROWS,
            log_level: None,
        }
    }
}

/// Load and parse config.toml from the given path.
pub fn load_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate a raw config against the bounds in util::constants.
///
/// Out-of-range values are clamped rather than rejected, with a warning,
/// so a typo in one field never prevents startup.
pub fn resolve_settings(raw: &RawConfig) -> Settings {
    let mut settings = Settings::default();

    if let Some(size) = raw.ui.font_size {
        let clamped = size.clamp(constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE);
        if (clamped - size).abs() > f32::EPSILON {
            tracing::warn!(
                configured = size,
                clamped,
                "[ui] font_size out of range, clamped"
            );
        }
        settings.font_size = clamped;
    }

    if let Some(max_rows) = raw.form.max_rows {
        let clamped = max_rows.clamp(constants::MIN_MAX_ROWS, constants::ABSOLUTE_MAX_ROWS);
        if clamped != max_rows {
            tracing::warn!(
                configured = max_rows,
                clamped,
                "[form] max_rows out of range, clamped"
            );
        }
        settings.max_rows = clamped;
    }

    settings.log_level = raw.logging.level.clone();

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let raw: RawConfig = toml::from_str(
            r#"
            [ui]
            font_size = 16.0

            [form]
            max_rows = 50

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        let settings = resolve_settings(&raw);
        assert_eq!(settings.font_size, 16.0);
        assert_eq!(settings.max_rows, 50);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw: RawConfig = toml::from_str(
            r#"
            [ui]
            font_size = 12.0
            future_knob = true

            [unknown_section]
            key = 1
            "#,
        )
        .unwrap();
        assert_eq!(resolve_settings(&raw).font_size, 12.0);
    }

    #[test]
    fn empty_config_yields_defaults() {
        let raw: RawConfig = toml::from_str("").unwrap();
        let settings = resolve_settings(&raw);
        assert_eq!(settings.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(settings.max_rows, constants::DEFAULT_MAX_ROWS);
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let raw: RawConfig = toml::from_str(
            r#"
            [ui]
            font_size = 99.0

            [form]
            max_rows = 1000000
            "#,
        )
        .unwrap();
        let settings = resolve_settings(&raw);
        assert_eq!(settings.font_size, constants::MAX_FONT_SIZE);
        assert_eq!(settings.max_rows, constants::ABSOLUTE_MAX_ROWS);
    }
}
