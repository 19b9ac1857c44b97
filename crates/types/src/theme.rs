//! Brand theme tokens shared by all exporters.
//!
//! A [`ThemeTokens`] value is a closed, flat table of named colors, fonts,
//! gradients and effects. It is constructed explicitly and passed into each
//! exporter call; exporters only read from it. Widgets never extend the
//! table at runtime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorStop, LinearGradientConfig};

/// Color returned when a token lookup misses. Neutral mid gray so a broken
/// lookup is visible but not jarring.
pub const FALLBACK_COLOR: Color = Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// Immutable table of brand tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeTokens {
    colors: HashMap<String, Color>,
    fonts: HashMap<String, String>,
    gradients: HashMap<String, LinearGradientConfig>,
    /// Named CSS effect fragments (e.g. a glow box-shadow value)
    effects: HashMap<String, String>,
}

impl ThemeTokens {
    /// Empty token table; useful for tests that want full control.
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
            fonts: HashMap::new(),
            gradients: HashMap::new(),
            effects: HashMap::new(),
        }
    }

    /// The default brand palette ("jazer neon").
    pub fn jazer_neon() -> Self {
        let mut t = Self::empty();
        t.set_color("electricPurple", Color::from_rgba8(168, 85, 247, 255));
        t.set_color("neonPink", Color::from_rgba8(236, 72, 153, 255));
        t.set_color("cyberCyan", Color::from_rgba8(34, 211, 238, 255));
        t.set_color("voltYellow", Color::from_rgba8(250, 204, 21, 255));
        t.set_color("nightBlack", Color::from_rgba8(10, 10, 15, 255));
        t.set_color("voidBlack", Color::from_rgba8(3, 3, 5, 255));
        t.set_color("ghostWhite", Color::from_rgba8(248, 248, 255, 255));
        t.set_color("softGray", Color::from_rgba8(156, 163, 175, 255));

        t.set_font("display", "'Orbitron', sans-serif");
        t.set_font("body", "'Inter', sans-serif");
        t.set_font("mono", "'JetBrains Mono', monospace");

        t.set_gradient(
            "gradient",
            LinearGradientConfig {
                angle: 135.0,
                stops: vec![
                    ColorStop::new(0.0, Color::from_rgba8(168, 85, 247, 255)),
                    ColorStop::new(1.0, Color::from_rgba8(236, 72, 153, 255)),
                ],
            },
        );

        t.set_effect(
            "glow",
            "0 0 10px currentColor, 0 0 30px currentColor".to_string(),
        );
        t.set_effect("textShadow", "0 2px 8px rgba(0, 0, 0, 0.6)".to_string());
        t.set_effect("dropShadow", "0 8px 24px rgba(0, 0, 0, 0.4)".to_string());
        t
    }

    pub fn set_color(&mut self, key: &str, color: Color) {
        self.colors.insert(key.to_string(), color);
    }

    pub fn set_font(&mut self, key: &str, stack: &str) {
        self.fonts.insert(key.to_string(), stack.to_string());
    }

    pub fn set_gradient(&mut self, key: &str, gradient: LinearGradientConfig) {
        self.gradients.insert(key.to_string(), gradient);
    }

    pub fn set_effect(&mut self, key: &str, css: String) {
        self.effects.insert(key.to_string(), css);
    }

    /// Look up a color token; a missing key yields [`FALLBACK_COLOR`].
    pub fn color(&self, key: &str) -> Color {
        match self.colors.get(key) {
            Some(c) => *c,
            None => {
                log::debug!("unknown color token '{}', using fallback", key);
                FALLBACK_COLOR
            }
        }
    }

    /// Look up a font stack; a missing key yields a generic sans-serif stack.
    pub fn font(&self, key: &str) -> &str {
        self.fonts.get(key).map(String::as_str).unwrap_or("sans-serif")
    }

    /// Look up a gradient token, if defined.
    pub fn gradient(&self, key: &str) -> Option<&LinearGradientConfig> {
        self.gradients.get(key)
    }

    /// Look up an effect fragment, if defined.
    pub fn effect(&self, key: &str) -> Option<&str> {
        self.effects.get(key).map(String::as_str)
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::jazer_neon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_color_falls_back() {
        let t = ThemeTokens::jazer_neon();
        assert_eq!(t.color("noSuchToken"), FALLBACK_COLOR);
    }

    #[test]
    fn test_brand_tokens_present() {
        let t = ThemeTokens::jazer_neon();
        assert_eq!(t.color("nightBlack").to_css(), "#0a0a0f");
        assert!(t.font("display").contains("Orbitron"));
        assert!(t.gradient("gradient").is_some());
    }
}
