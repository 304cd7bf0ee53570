use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::PlannerError;
use crate::state::data::Filter;

const APP_DIR: &str = "style-coach";
const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

/// User settings read from the config file.
///
/// The file lives in the user's config directory:
/// - Linux: ~/.config/style-coach/config.json
/// - macOS: ~/Library/Application Support/style-coach/config.json
/// - Windows: %APPDATA%\style-coach\config.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeChoice,
    /// Directory that catalog image paths are resolved against
    pub asset_dir: Option<PathBuf>,
    /// Closet filter selected at startup
    pub default_filter: Filter,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
    }

    /// Load the config from the default location.
    /// Missing or unreadable config falls back to defaults.
    pub fn load_or_default() -> Config {
        let Some(path) = Self::config_path() else {
            log::warn!("no config directory on this platform, using defaults");
            return Config::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("loaded config: {}", path.display());
                config
            }
            Ok(None) => Config::default(),
            Err(err) => {
                log::warn!("ignoring config {}: {}", path.display(), err);
                Config::default()
            }
        }
    }

    /// Read a config file. Returns `Ok(None)` if it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Config>, PlannerError> {
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(path)?;
        let config = serde_json::from_reader(file)?;
        Ok(Some(config))
    }

    /// Directory holding the catalog images
    pub fn asset_dir(&self) -> PathBuf {
        if let Some(dir) = &self.asset_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default()
            .join(APP_DIR)
            .join("assets")
    }

    /// Resolve a catalog image reference to a file path
    pub fn resolve_image(&self, image_ref: &str) -> PathBuf {
        self.asset_dir().join(image_ref.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{ "theme": "light", "default_filter": "bottom" }}"#).unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.default_filter, Filter::Bottom);
        assert!(config.asset_dir.is_none());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ theme: ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_resolve_image_strips_leading_slash() {
        let config = Config {
            asset_dir: Some(PathBuf::from("/srv/closet")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_image("/wardrobe/tee.jpg"),
            PathBuf::from("/srv/closet/wardrobe/tee.jpg")
        );
        assert_eq!(
            config.resolve_image("outfits/date1.jpg"),
            PathBuf::from("/srv/closet/outfits/date1.jpg")
        );
    }
}
