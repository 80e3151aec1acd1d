//! Startup configuration
//!
//! Read from `hinanai.ron` in the working directory when present. Every
//! field has a default, so a partial file only overrides what it names.
//! Colors are RGBA8888 hex values, e.g. `0xffffffff` for opaque white.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use macroquad::prelude::Color;

use crate::font::FontStyle;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "hinanai.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub high_dpi: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("hinanai"),
            width: 1280,
            height: 720,
            high_dpi: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TTF file, relative to the working directory
    pub path: String,
    pub size: u16,
    pub color: u32,
    pub border_color: u32,
    pub border_width: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: String::from("assets/fonts/RobotoMono/RobotoMono-VariableFont_wght.ttf"),
            size: 16,
            color: 0x000000ff,
            border_color: 0xffffffff,
            border_width: 2,
        }
    }
}

impl FontConfig {
    pub fn style(&self) -> FontStyle {
        FontStyle {
            size: self.size,
            color: rgba(self.color),
            border_color: rgba(self.border_color),
            border_width: self.border_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub font: FontConfig,
    /// Frame clear color (RGBA8888)
    pub clear_color: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            font: FontConfig::default(),
            clear_color: 0x00000000,
        }
    }
}

impl Config {
    pub fn clear_color(&self) -> Color {
        rgba(self.clear_color)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load `path`, or defaults if it does not exist
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// No filesystem on the web; always defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default(_path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::default())
    }
}

/// Convert an RGBA8888 value to a macroquad color
pub fn rgba(hex: u32) -> Color {
    Color::from_rgba(
        (hex >> 24) as u8,
        (hex >> 16) as u8,
        (hex >> 8) as u8,
        hex as u8,
    )
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config, loaded on first access.
///
/// `window_conf` runs before the async main, so both read from here.
/// A malformed file aborts startup.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| match Config::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => {
            log::info!("Config loaded (font: {})", config.font.path);
            config
        }
        Err(e) => {
            log::error!("Invalid {}: {}", CONFIG_FILE, e);
            std::process::exit(1);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.font.size, 16);
        assert_eq!(config.font.border_width, 2);
        assert!(config.font.path.ends_with("RobotoMono-VariableFont_wght.ttf"));

        let style = config.font.style();
        assert_eq!(style.color, Color::from_rgba(0, 0, 0, 255));
        assert_eq!(style.border_color, Color::from_rgba(255, 255, 255, 255));
    }

    #[test]
    fn test_rgba_channel_order() {
        let c = rgba(0x336699cc);
        assert_eq!(c, Color::from_rgba(0x33, 0x66, 0x99, 0xcc));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_ron("(font: (size: 24), clear_color: 0x202020ff)").unwrap();
        assert_eq!(config.font.size, 24);
        assert_eq!(config.font.border_width, 2);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.clear_color, 0x202020ff);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(Config::from_ron("(font: (size: \"big\"))"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "(window: (title: \"diagram\", width: 800, height: 600))").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.window.title, "diagram");
        assert_eq!(config.window.width, 800);
        assert!(config.window.high_dpi);
    }

    #[test]
    fn test_round_trips_defaults_through_ron() {
        let text = ron::ser::to_string_pretty(&Config::default(), ron::ser::PrettyConfig::new()).unwrap();
        assert_eq!(Config::from_ron(&text).unwrap(), Config::default());
    }
}
