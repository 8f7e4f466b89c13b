//! Configuration loading for Frontpage.
//!
//! Reads `~/.frontpage/config.toml` (or the file named by `FRONTPAGE_CONFIG`).
//! A missing file is not an error; every field has a default.

use std::{
    env, fs,
    io::Error as IoError,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

use frontpage_types::{ControllerSettings, ScrollBehavior, ui::UiOptions};

const CONFIG_ENV_VAR: &str = "FRONTPAGE_CONFIG";

const DEFAULT_ROW_HEIGHT_PX: f64 = 16.0;
const DEFAULT_MOBILE_BREAKPOINT_COLS: u16 = 80;
const DEFAULT_FADE_MS: u64 = 700;
const DEFAULT_SMOOTH_SCROLL_MS: u64 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: IoError },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: TomlError,
    },
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Default, Deserialize)]
pub struct FrontpageConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Instant scrolling, no reveal fades.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Page pixels represented by one terminal row.
    pub row_height_px: f64,
    /// Below this width the nav collapses into the menu icon.
    pub mobile_breakpoint_cols: u16,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            mobile_breakpoint_cols: DEFAULT_MOBILE_BREAKPOINT_COLS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub fade_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            fade_ms: DEFAULT_FADE_MS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub smooth_scroll_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            smooth_scroll_ms: DEFAULT_SMOOTH_SCROLL_MS,
        }
    }
}

impl FrontpageConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(Some(config))
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let row = self.viewport.row_height_px;
        if !(row.is_finite() && row > 0.0) {
            return Err(ConfigError::Invalid {
                field: "viewport.row_height_px",
                reason: format!("{row} must be greater than zero"),
            });
        }
        Ok(())
    }

    /// Controller settings. The header and reveal thresholds are fixed; only
    /// the scroll behavior follows the config.
    #[must_use]
    pub fn settings(&self) -> ControllerSettings {
        ControllerSettings {
            scroll_behavior: if self.app.reduced_motion {
                ScrollBehavior::Instant
            } else {
                ScrollBehavior::Smooth
            },
            ..ControllerSettings::default()
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.app.ascii_only,
            high_contrast: self.app.high_contrast,
            reduced_motion: self.app.reduced_motion,
        }
    }

    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        if self.app.reduced_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(self.reveal.fade_ms)
        }
    }

    #[must_use]
    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.navigation.smooth_scroll_ms)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_ENV_VAR)
        && !raw.trim().is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    dirs::home_dir().map(|home| home.join(".frontpage").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontpage_types::{HEADER_THRESHOLD_PX, REVEAL_ROOT_MARGIN_BOTTOM_PX, REVEAL_THRESHOLD};
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = FrontpageConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = FrontpageConfig::load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.settings(), ControllerSettings::default());
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.viewport.mobile_breakpoint_cols, 80);
        assert_eq!(config.fade_duration(), Duration::from_millis(700));
    }

    #[test]
    fn full_file_overrides_defaults() {
        let file = write_config(
            r#"
[app]
high_contrast = true
reduced_motion = true

[viewport]
row_height_px = 20.0
mobile_breakpoint_cols = 100

[reveal]
fade_ms = 300

[navigation]
smooth_scroll_ms = 900
"#,
        );
        let config = FrontpageConfig::load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.settings().scroll_behavior, ScrollBehavior::Instant);
        assert!((config.viewport.row_height_px - 20.0).abs() < f64::EPSILON);
        assert!(config.ui_options().high_contrast);
        assert_eq!(config.viewport.mobile_breakpoint_cols, 100);
        // Reduced motion wins over the configured fade.
        assert_eq!(config.fade_duration(), Duration::ZERO);
        assert_eq!(config.smooth_scroll_duration(), Duration::from_millis(900));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let file = write_config("[reveal]\nfade_ms = 100\n");
        let config = FrontpageConfig::load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.fade_duration(), Duration::from_millis(100));
        assert_eq!(config.smooth_scroll_duration(), Duration::from_millis(600));
    }

    #[test]
    fn parse_error_carries_path() {
        let file = write_config("[reveal\nfade_ms = ");
        let err = FrontpageConfig::load_from(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn thresholds_ignore_config_keys() {
        let file = write_config(
            "[viewport]\nheader_threshold_px = 0.0\n\
             [reveal]\nthreshold = 1.0\nroot_margin_bottom_px = 0.0\n",
        );
        let config = FrontpageConfig::load_from(file.path()).unwrap().unwrap();
        let settings = config.settings();
        assert!((settings.header_threshold_px - HEADER_THRESHOLD_PX).abs() < f64::EPSILON);
        assert!((settings.reveal.threshold - REVEAL_THRESHOLD).abs() < f64::EPSILON);
        assert!(
            (settings.reveal.root_margin.bottom - REVEAL_ROOT_MARGIN_BOTTOM_PX).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn zero_row_height_is_rejected() {
        let file = write_config("[viewport]\nrow_height_px = 0.0\n");
        let err = FrontpageConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "viewport.row_height_px",
                ..
            }
        ));
    }
}
