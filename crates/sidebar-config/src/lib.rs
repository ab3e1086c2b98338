//! Sidebar configuration
//!
//! Settings come from `sidebar.toml` under the user's config directory
//! (`~/.config/sway/sidebar/sidebar.toml`), falling back to built-in defaults,
//! and can be overridden per run with `SIDEBAR_*` environment variables.

use serde::{Deserialize, Serialize};
use sidebar_core::{Color, ParseColorError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures loading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("style.{field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ParseColorError,
    },

    #[error("{0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SidebarConfig {
    /// Handler used when no mode is given on the command line (power, run, desktop)
    pub mode: Option<String>,
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub fonts: FontConfig,
    pub desktop: DesktopConfig,
}

/// Window placement, relative to the chosen display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Index of the display to size the window against
    pub display_index: usize,
    /// Window width as a fraction of the display width
    pub width_fraction: f32,
    /// Window height as a fraction of the display height
    pub height_fraction: f32,
}

/// Colors (hex strings) and text sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub foreground: String,
    /// Fill used for desktops without a preview image
    pub empty_desktop: String,
    pub title_size: f32,
    pub number_size: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

/// Desktop overview grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Directory holding `<n>.png` previews; `~` is expanded
    pub images_dir: PathBuf,
    pub count: u32,
    pub columns: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "sidebar".to_string(),
            display_index: 0,
            width_fraction: 0.25,
            height_fraction: 1.0,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#10171e".to_string(),
            foreground: "#ffffff".to_string(),
            empty_desktop: "#20272e".to_string(),
            title_size: 128.0,
            number_size: 64.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular: PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
            bold: PathBuf::from("/usr/share/fonts/TTF/DejaVuSans-Bold.ttf"),
        }
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("~/.config/sway/dimgs"),
            count: 6,
            columns: 2,
        }
    }
}

/// Colors resolved from [`StyleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub empty_desktop: Color,
}

impl StyleConfig {
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |field: &'static str, value: &str| {
            Color::from_hex(value).map_err(|source| ConfigError::Color { field, source })
        };
        Ok(Palette {
            background: parse("background", &self.background)?,
            foreground: parse("foreground", &self.foreground)?,
            empty_desktop: parse("empty_desktop", &self.empty_desktop)?,
        })
    }
}

impl DesktopConfig {
    /// `images_dir` with a leading `~` replaced by the home directory.
    pub fn images_dir(&self) -> PathBuf {
        expand_tilde(&self.images_dir)
    }
}

/// Replace a leading `~` component with the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

impl SidebarConfig {
    /// Default config file location: `<config dir>/sway/sidebar/sidebar.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sway").join("sidebar").join("sidebar.toml"))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, or return the defaults if the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using defaults");
            Self::default()
        })
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(mode) = std::env::var("SIDEBAR_MODE") {
            self.mode = Some(mode);
        }
        if let Ok(color) = std::env::var("SIDEBAR_BACKGROUND") {
            self.style.background = color;
        }
        if let Ok(font) = std::env::var("SIDEBAR_FONT") {
            self.fonts.regular = PathBuf::from(font);
        }
        if let Ok(font) = std::env::var("SIDEBAR_FONT_BOLD") {
            self.fonts.bold = PathBuf::from(font);
        }
        if let Ok(dir) = std::env::var("SIDEBAR_DESKTOP_IMAGES") {
            self.desktop.images_dir = PathBuf::from(dir);
        }
    }

    /// Check values the rest of the program relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.style.palette()?;
        let w = &self.window;
        if !(w.width_fraction > 0.0 && w.height_fraction > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window fractions must be positive, got {}x{}",
                w.width_fraction, w.height_fraction
            )));
        }
        if self.desktop.columns == 0 {
            return Err(ConfigError::Invalid("desktop.columns must be at least 1".into()));
        }
        Ok(())
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. `SIDEBAR_CONFIG` names an explicit file, whose errors are fatal;
    ///    otherwise the default location is tried, falling back to defaults.
    /// 2. `SIDEBAR_*` environment variables are applied on top.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os("SIDEBAR_CONFIG") {
            Some(path) => Self::load_from_file(PathBuf::from(path))?,
            None => Self::load_or_default(),
        };
        config.merge_with_env();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SidebarConfig::default();
        assert_eq!(config.window.width_fraction, 0.25);
        assert_eq!(config.desktop.count, 6);
        let palette = config.style.palette().unwrap();
        assert_eq!(palette.background, Color::from_rgb_u32(0x10171e));
        assert_eq!(palette.empty_desktop, Color::from_rgb_u32(0x20272e));
        config.validate().unwrap();
    }

    #[test]
    fn test_toml_serialization() {
        let config = SidebarConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: SidebarConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.style.background, "#10171e");
        assert_eq!(parsed.desktop.columns, 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "mode = \"power\"\n[style]\nbackground = \"#000000\"\n[desktop]\ncount = 4"
        )
        .unwrap();

        let config = SidebarConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.mode.as_deref(), Some("power"));
        assert_eq!(config.style.background, "#000000");
        assert_eq!(config.style.title_size, 128.0);
        assert_eq!(config.desktop.count, 4);
        assert_eq!(config.desktop.columns, 2);
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window\nbroken").unwrap();
        let err = SidebarConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SidebarConfig::load_from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_bad_color_fails_validation() {
        let mut config = SidebarConfig::default();
        config.style.foreground = "not-a-color".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("style.foreground"));
    }

    #[test]
    fn test_zero_columns_fails_validation() {
        let mut config = SidebarConfig::default();
        config.desktop.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_expand_tilde() {
        let plain = Path::new("/tmp/dimgs");
        assert_eq!(expand_tilde(plain), plain);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/dimgs")), home.join("dimgs"));
        }
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("SIDEBAR_MODE", "run");
            std::env::set_var("SIDEBAR_DESKTOP_IMAGES", "/srv/dimgs");
        }

        let mut config = SidebarConfig::default();
        config.merge_with_env();

        assert_eq!(config.mode.as_deref(), Some("run"));
        assert_eq!(config.desktop.images_dir(), PathBuf::from("/srv/dimgs"));

        unsafe {
            std::env::remove_var("SIDEBAR_MODE");
            std::env::remove_var("SIDEBAR_DESKTOP_IMAGES");
        }
    }
}
