//! Shared appearance configuration: light/dark mode, preset themes,
//! transparency and effect flags.
//!
//! Every themeable widget config embeds an [`AppearanceConfig`] (flattened
//! in the JSON form). Derived-state resolution lives in the export crate;
//! this module only holds the data and the preset table.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config_enum;

config_enum! {
    /// Light/dark selection. `System` defers to the viewer's OS preference
    /// via an emitted media query, since export time cannot know it.
    AppearanceMode {
        Light => "light",
        Dark => "dark",
        System => "system",
    }
    default: Light
}

/// Colors for one appearance branch (the `lightMode`/`darkMode` groups)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModeColors {
    #[serde(default = "default_light_bg")]
    pub background_color: Color,
    #[serde(default = "default_light_text")]
    pub text_color: Color,
    #[serde(default = "default_accent")]
    pub accent_color: Color,
}

fn default_light_bg() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

fn default_light_text() -> Color {
    Color::from_rgba8(26, 26, 26, 255)
}

fn default_accent() -> Color {
    Color::from_rgba8(168, 85, 247, 255) // electricPurple
}

impl ModeColors {
    pub fn light_defaults() -> Self {
        Self {
            background_color: default_light_bg(),
            text_color: default_light_text(),
            accent_color: default_accent(),
        }
    }

    pub fn dark_defaults() -> Self {
        Self {
            background_color: Color::from_rgba8(10, 10, 15, 255), // nightBlack
            text_color: Color::from_rgba8(248, 248, 255, 255),    // ghostWhite
            accent_color: default_accent(),
        }
    }
}

impl Default for ModeColors {
    fn default() -> Self {
        Self::light_defaults()
    }
}

/// Appearance settings shared by all themeable widgets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceConfig {
    #[serde(default, alias = "appearance")]
    pub appearance_mode: AppearanceMode,
    /// Preset theme name; looked up in the preset table, unknown names are
    /// treated as "no preset".
    #[serde(default)]
    pub preset_theme: Option<String>,
    #[serde(default = "ModeColors::light_defaults")]
    pub light_mode: ModeColors,
    #[serde(default = "ModeColors::dark_defaults")]
    pub dark_mode: ModeColors,
    /// Forces the background to `transparent`, winning over preset and
    /// explicit background colors.
    #[serde(default, alias = "useTransparentBackground")]
    pub use_transparent_bg: bool,
    #[serde(default)]
    pub glow_effect: bool,
    #[serde(default)]
    pub gradient_text: bool,
    #[serde(default)]
    pub text_shadows: bool,
    #[serde(default)]
    pub drop_shadows: bool,
    /// Font token key (resolved against the theme token table) or a literal
    /// CSS font stack.
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_font() -> String {
    "body".to_string()
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            appearance_mode: AppearanceMode::Light,
            preset_theme: None,
            light_mode: ModeColors::light_defaults(),
            dark_mode: ModeColors::dark_defaults(),
            use_transparent_bg: false,
            glow_effect: false,
            gradient_text: false,
            text_shadows: false,
            drop_shadows: false,
            font: default_font(),
        }
    }
}

/// A named bundle of color overrides. Preset colors take precedence over the
/// individually configured light/dark colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetTheme {
    pub background_color: Color,
    pub text_color: Color,
    pub accent_color: Color,
}

static PRESET_THEMES: Lazy<HashMap<&'static str, PresetTheme>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "cyberpunk",
        PresetTheme {
            background_color: Color::from_rgba8(0x0a, 0x0e, 0x27, 255), // #0a0e27
            text_color: Color::from_rgba8(0xe0, 0xe7, 0xff, 255),
            accent_color: Color::from_rgba8(0x00, 0xff, 0xff, 255), // #00ffff
        },
    );
    m.insert(
        "synthwave",
        PresetTheme {
            background_color: Color::from_rgba8(0x1a, 0x0b, 0x2e, 255),
            text_color: Color::from_rgba8(0xff, 0xe3, 0xff, 255),
            accent_color: Color::from_rgba8(0xff, 0x2a, 0xd4, 255),
        },
    );
    m.insert(
        "terminal",
        PresetTheme {
            background_color: Color::from_rgba8(0x00, 0x00, 0x00, 255),
            text_color: Color::from_rgba8(0x00, 0xff, 0x41, 255),
            accent_color: Color::from_rgba8(0x00, 0xff, 0x41, 255),
        },
    );
    m.insert(
        "paper",
        PresetTheme {
            background_color: Color::from_rgba8(0xfa, 0xf8, 0xf3, 255),
            text_color: Color::from_rgba8(0x2b, 0x2b, 0x2b, 255),
            accent_color: Color::from_rgba8(0xc0, 0x39, 0x2b, 255),
        },
    );
    m.insert(
        "midnight",
        PresetTheme {
            background_color: Color::from_rgba8(0x0d, 0x11, 0x17, 255),
            text_color: Color::from_rgba8(0xc9, 0xd1, 0xd9, 255),
            accent_color: Color::from_rgba8(0x58, 0xa6, 0xff, 255),
        },
    );
    m
});

/// Look up a preset theme by name. Unknown names return `None`, which
/// resolution treats as "no preset selected".
pub fn preset_theme(name: &str) -> Option<&'static PresetTheme> {
    PRESET_THEMES.get(name)
}

/// Preset names in the table, for select-field options
pub fn preset_theme_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PRESET_THEMES.keys().copied().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyberpunk_preset_literals() {
        let p = preset_theme("cyberpunk").unwrap();
        assert_eq!(p.background_color.to_css(), "#0a0e27");
        assert_eq!(p.accent_color.to_css(), "#00ffff");
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset_theme("vapor-dream").is_none());
    }

    #[test]
    fn test_appearance_aliases() {
        let json = r#"{"appearance": "dark", "useTransparentBackground": true}"#;
        let a: AppearanceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(a.appearance_mode, AppearanceMode::Dark);
        assert!(a.use_transparent_bg);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_light() {
        let a: AppearanceConfig = serde_json::from_str(r#"{"appearanceMode": "sepia"}"#).unwrap();
        assert_eq!(a.appearance_mode, AppearanceMode::Light);
    }
}
