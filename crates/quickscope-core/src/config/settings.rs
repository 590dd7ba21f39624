//! Application configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in `config/default.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::preview::format::{is_valid_date_format, DEFAULT_DATE_FORMAT};

/// Top-level application configuration.
///
/// All fields have sensible defaults so QuickScope works without a config
/// file. Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed or the date
    ///   pattern is not a valid strftime pattern.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;

        if !is_valid_date_format(&config.preview.date_format) {
            return Err(CoreError::ConfigParse(format!(
                "invalid date_format: {}",
                config.preview.date_format
            )));
        }
        Ok(config)
    }

    /// Loads the first candidate file that exists, or the defaults.
    ///
    /// A file that exists but fails to load is logged and skipped.
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match Self::load(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(CoreError::NotFound(_)) => {}
                Err(e) => tracing::warn!(path = %path.display(), "ignoring config: {e}"),
            }
        }
        Self::default()
    }
}

/// Convention for human-readable byte counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnits {
    /// Powers of 1000 (`1 KB = 1000 bytes`).
    #[default]
    Decimal,
    /// Powers of 1024.
    Binary,
}

/// How preview rows are formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default)]
    pub size_units: SizeUnits,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            size_units: SizeUnits::default(),
            date_format: default_date_format(),
            separator: default_separator(),
        }
    }
}

/// Display preferences for the terminal host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_icons: bool,
    #[serde(default = "default_true")]
    pub stripe_rows: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_icons: true,
            stripe_rows: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_separator() -> String {
    " • ".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_preview() {
        let config = Config::default();

        assert_eq!(config.preview.size_units, SizeUnits::Decimal);
        assert_eq!(config.preview.date_format, "%-m/%-d/%y, %-I:%M %p");
        assert_eq!(config.preview.separator, " • ");
    }

    #[test]
    fn default_config_ui() {
        let config = Config::default();

        assert!(config.ui.show_icons);
        assert!(config.ui.stripe_rows);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[preview]
size_units = "binary"
date_format = "%d/%m/%Y"
separator = " | "

[ui]
show_icons = false
stripe_rows = false
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.preview.size_units, SizeUnits::Binary);
        assert_eq!(config.preview.date_format, "%d/%m/%Y");
        assert_eq!(config.preview.separator, " | ");
        assert!(!config.ui.show_icons);
        assert!(!config.ui.stripe_rows);
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[preview]
size_units = "binary"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.preview.size_units, SizeUnits::Binary);
        assert_eq!(config.preview.separator, " • ");
        assert!(config.ui.show_icons);
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        let default = Config::default();

        assert_eq!(config.preview.date_format, default.preview.date_format);
        assert_eq!(config.ui.stripe_rows, default.ui.stripe_rows);
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn load_unknown_size_units_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[preview]\nsize_units = \"octal\"\n").unwrap();

        assert!(matches!(
            Config::load(&path).unwrap_err(),
            CoreError::ConfigParse(_)
        ));
    }

    #[test]
    fn load_bad_date_format_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[preview]\ndate_format = \"%Q\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("invalid date_format"));
    }

    #[test]
    fn load_first_skips_missing_and_broken_files() {
        let tmp = TempDir::new().unwrap();
        let broken = tmp.path().join("broken.toml");
        fs::write(&broken, "[[[").unwrap();
        let good = tmp.path().join("good.toml");
        fs::write(&good, "[ui]\nshow_icons = false\n").unwrap();

        let config = Config::load_first(&[tmp.path().join("missing.toml"), broken, good]);
        assert!(!config.ui.show_icons);
    }

    #[test]
    fn load_first_without_candidates_is_default() {
        let config = Config::load_first(&[]);
        assert!(config.ui.show_icons);
        assert_eq!(config.preview.size_units, SizeUnits::Decimal);
    }
}
