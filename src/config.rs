use crate::error::{GalleryError, Result};
use crate::input::KeyBindings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Image file extensions picked up when scanning a library.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub library: LibraryConfig,
    pub keys: KeyConfig,
    pub grid: GridConfig,
    pub window: WindowConfig,
    pub theme: ThemeConfig,
}

/// Where the galleries live
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory containing `gallery/`; the command line overrides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// Key names as understood by egui ("ArrowRight", "Space", "L", ...)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct KeyConfig {
    pub advance: String,
    pub advance_alt: String,
    pub retreat: String,
}

/// Thumbnail grid layout
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of a thumbnail cell (in pixels)
    pub thumbnail_size: f32,
    /// Gap between cells (in pixels)
    pub spacing: f32,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            advance: "ArrowRight".to_string(),
            advance_alt: "Space".to_string(),
            retreat: "ArrowLeft".to_string(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            thumbnail_size: 160.0,
            spacing: 8.0,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1100.0,
            height: 750.0,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "galleria")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        let path = Self::config_path().ok_or(GalleryError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(())
    }

    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings::from_names(&self.keys.advance, &self.keys.advance_alt, &self.keys.retreat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.grid.thumbnail_size, 160.0);
        assert_eq!(config.grid.spacing, 8.0);
        assert_eq!(config.keys.advance, "ArrowRight");
        assert!(config.library.root.is_none());
        assert_eq!(config.key_bindings(), KeyBindings::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.window.width, deserialized.window.width);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [keys]
            retreat = "H"

            [library]
            root = "/srv/photos"
            "#,
        )
        .expect("Failed to parse");
        assert_eq!(config.keys.retreat, "H");
        assert_eq!(config.keys.advance, "ArrowRight");
        assert_eq!(config.library.root, Some(PathBuf::from("/srv/photos")));
        assert_eq!(config.grid.thumbnail_size, 160.0);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.mode = "light".to_string();
        config.grid.spacing = 2.0;
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded.theme.mode, "light");
        assert_eq!(loaded.grid.spacing, 2.0);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "grid = 3").expect("write");
        assert!(matches!(Config::load_from(&path), Err(GalleryError::ConfigParse(_))));
    }
}
