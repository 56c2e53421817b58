//! User configuration: `config.toml` in the platform config directory.
//!
//! Three tables: `[ui]`, `[motion]` and `[content]`. Every key is optional.
//! Values are range-checked on load and before every save.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::animation::{MotionSettings, TRIGGER_START};
use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};

/// Which palette to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Follow the OS setting
    #[default]
    Auto,
    /// Dark base, light bands
    Dark,
    /// Light base, dark bands
    Light,
}

impl ThemeMode {
    /// Next mode in the `t` key cycle.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Auto => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::Auto,
        }
    }

    /// Lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Unknown theme mode '{other}'. Expected auto, dark or light"),
        }
    }
}

/// `[ui]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Palette; `t` cycles it at runtime
    pub theme_mode: ThemeMode,
    /// Open the key help when the showcase starts
    pub show_help_on_startup: bool,
    /// Render emoji icons; when off they fall back to the record's initial
    pub emoji_icons: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_help_on_startup: false,
            emoji_icons: true,
        }
    }
}

/// Animation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Skip every animation and draw end states
    pub reduced_motion: bool,
    /// Reveal trigger boundary as a fraction of the viewport height
    pub trigger_start: f32,
    /// Multiplier for every duration (2.0 = half speed)
    pub duration_scale: f32,
    /// Frame interval in milliseconds
    pub frame_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            trigger_start: TRIGGER_START,
            duration_scale: 1.0,
            frame_ms: 33,
        }
    }
}

impl MotionConfig {
    /// Engine settings derived from this section.
    #[must_use]
    pub const fn settings(&self) -> MotionSettings {
        MotionSettings {
            trigger_start: self.trigger_start,
            duration_scale: self.duration_scale,
            reduced_motion: self.reduced_motion,
        }
    }
}

/// Content source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Content file (.toml, .json or .json5); built-in content when unset
    pub path: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Flizzweb/config.toml`
/// - macOS: `~/Library/Application Support/Flizzweb/config.toml`
/// - Windows: `%APPDATA%\Flizzweb\config.toml`
///
/// # Validation
///
/// - `motion.trigger_start` must be in (0, 1]
/// - `motion.duration_scale` must be positive
/// - `motion.frame_ms` must be within 8..=250
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiConfig,
    /// Animation preferences
    pub motion: MotionConfig,
    /// Content source
    pub content: ContentConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Flizzweb/`
    /// - macOS: `~/Library/Application Support/Flizzweb/`
    /// - Windows: `%APPDATA%\Flizzweb\`
    ///
    /// `FLIZZWEB_CONFIG_DIR` overrides the location.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Read `config.toml` from [`Config::config_dir`]. A missing file
    /// yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Read and validate the file at `path`, or return the defaults when it
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Rejected config file {}", path.display()))?;
        Ok(config)
    }

    /// Write to [`Config::config_file_path`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Validate, then write `path` through a sibling `.toml.tmp` file that is
    /// renamed into place, so readers never see a half-written file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create {}", dir.display()))?;
        }

        let text = toml::to_string_pretty(self).context("Cannot serialize configuration")?;
        let staging = path.with_extension("toml.tmp");
        fs::write(&staging, text)
            .with_context(|| format!("Cannot write {}", staging.display()))?;
        fs::rename(&staging, path).with_context(|| {
            format!("Cannot move {} to {}", staging.display(), path.display())
        })?;
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let motion = &self.motion;
        if !(motion.trigger_start > 0.0 && motion.trigger_start <= 1.0) {
            anyhow::bail!(
                "motion.trigger_start must be greater than 0 and at most 1, got {}",
                motion.trigger_start
            );
        }
        if !(motion.duration_scale.is_finite() && motion.duration_scale > 0.0) {
            anyhow::bail!(
                "motion.duration_scale must be a positive number, got {}",
                motion.duration_scale
            );
        }
        if !(8..=250).contains(&motion.frame_ms) {
            anyhow::bail!(
                "motion.frame_ms must be between 8 and 250, got {}",
                motion.frame_ms
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.ui.emoji_icons);
        assert!(!config.motion.reduced_motion);
        assert!((config.motion.trigger_start - 0.85).abs() < f32::EPSILON);
        assert_eq!(config.motion.frame_ms, 33);
        assert!(config.content.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_ranges() {
        let mut config = Config::new();
        config.motion.trigger_start = 0.0;
        assert!(config.validate().is_err());
        config.motion.trigger_start = 1.0;
        assert!(config.validate().is_ok());

        config.motion.duration_scale = 0.0;
        assert!(config.validate().is_err());
        config.motion.duration_scale = f32::NAN;
        assert!(config.validate().is_err());
        config.motion.duration_scale = 2.0;

        config.motion.frame_ms = 4;
        assert!(config.validate().is_err());
        config.motion.frame_ms = 250;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.motion.duration_scale = 1.5;
        config.content.path = Some(PathBuf::from("/tmp/content.toml"));
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[motion]\nreduced_motion = true\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.motion.reduced_motion);
        assert_eq!(loaded.motion.frame_ms, 33);
        assert_eq!(loaded.ui, UiConfig::default());
    }

    #[test]
    fn test_config_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[motion]\nframe_ms = 1000\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_theme_mode_cycle_and_parse() {
        assert_eq!(ThemeMode::Auto.cycle().cycle().cycle(), ThemeMode::Auto);
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
