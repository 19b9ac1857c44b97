//! Saved widget configurations.
//!
//! The CLI keeps one JSON file per user with named widget configurations
//! so an export can be re-run without re-supplying the whole config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use embedkit_types::widget_configs::WidgetConfig;

/// Application-wide settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Version of the settings format
    pub version: u32,
    /// Theme name applied when an export does not name one
    #[serde(default)]
    pub default_theme: Option<String>,
    /// Saved configurations, keyed by user-chosen name
    #[serde(default)]
    pub saved: BTreeMap<String, WidgetConfig>,
}

impl AppSettings {
    /// Load settings from the per-user config directory.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the per-user config directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn settings_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("io", "embedkit", "embedkit")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("settings.json"))
    }

    /// Load a widget configuration from an arbitrary JSON file.
    pub fn load_config_from_path(path: &Path) -> Result<WidgetConfig> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Record a configuration under `name`, replacing any previous entry.
    pub fn remember(&mut self, name: impl Into<String>, config: WidgetConfig) {
        self.saved.insert(name.into(), config);
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            default_theme: None,
            saved: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedkit_types::widget_configs::WidgetKind;

    #[test]
    fn test_settings_round_trip() {
        let mut settings = AppSettings::default();
        settings.remember("desk-clock", WidgetConfig::default_for(WidgetKind::Clock));
        let json = serde_json::to_string(&settings).expect("serialize");
        let back: AppSettings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.version, 1);
        assert!(back.saved.contains_key("desk-clock"));
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let json = r#"{"version": 1, "someFutureField": true}"#;
        let settings: AppSettings = serde_json::from_str(json).expect("deserialize");
        assert!(settings.saved.is_empty());
    }
}
