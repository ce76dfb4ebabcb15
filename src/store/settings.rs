//! Screen background setting - JSON file under the `TodoAppSettings` namespace

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SETTINGS_FILE: &str = "TodoAppSettings.json";

/// The active background choice. At most one of color/image is ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Default,
    /// `0xRRGGBB`
    Color(u32),
    /// Path to an image file; kept for round-tripping even though a
    /// terminal cannot display it.
    Image(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        rename = "backgroundImageUri",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    background_image_uri: Option<String>,
    #[serde(
        rename = "backgroundColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    background_color: Option<u32>,
}

impl Settings {
    pub fn background(&self) -> Background {
        if let Some(uri) = &self.background_image_uri {
            Background::Image(uri.clone())
        } else if let Some(color) = self.background_color {
            Background::Color(color)
        } else {
            Background::Default
        }
    }

    pub fn set_color(&mut self, color: u32) {
        self.background_color = Some(color);
        self.background_image_uri = None;
    }

    pub fn set_image(&mut self, path: impl Into<String>) {
        self.background_image_uri = Some(path.into());
        self.background_color = None;
    }

    pub fn clear_background(&mut self) {
        self.background_image_uri = None;
        self.background_color = None;
    }

    /// Loads settings from `dir`; a missing file yields defaults.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let path = dir.join(SETTINGS_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_background() {
        assert_eq!(Settings::default().background(), Background::Default);
    }

    #[test]
    fn test_color_and_image_are_mutually_exclusive() {
        let mut settings = Settings::default();

        settings.set_color(0xAAF0D1);
        assert_eq!(settings.background(), Background::Color(0xAAF0D1));

        settings.set_image("/home/user/bg.png");
        assert_eq!(
            settings.background(),
            Background::Image("/home/user/bg.png".to_string())
        );

        settings.set_color(0xE6E6FA);
        assert_eq!(settings.background(), Background::Color(0xE6E6FA));
    }

    #[test]
    fn test_clear_background() {
        let mut settings = Settings::default();
        settings.set_color(0xFFDAB9);
        settings.clear_background();
        assert_eq!(settings.background(), Background::Default);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() -> Result<()> {
        let temp = tempdir()?;
        let settings = Settings::load_from(temp.path())?;
        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[test]
    fn test_save_load_roundtrip() -> Result<()> {
        let temp = tempdir()?;

        let mut settings = Settings::default();
        settings.set_image("/tmp/bg.jpg");
        settings.save_to(temp.path())?;

        let loaded = Settings::load_from(temp.path())?;
        assert_eq!(loaded, settings);
        Ok(())
    }

    #[test]
    fn test_saved_file_uses_preference_key_names() -> Result<()> {
        let temp = tempdir()?;

        let mut settings = Settings::default();
        settings.set_color(0x112233);
        settings.save_to(temp.path())?;

        let content = fs::read_to_string(temp.path().join(SETTINGS_FILE))?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        assert_eq!(json["backgroundColor"], 0x112233);
        // cleared key is absent, not null
        assert!(json.get("backgroundImageUri").is_none());
        Ok(())
    }
}
