//! Derived-state resolution for appearance configs.
//!
//! Order is fixed and must not be rearranged:
//! 1. light/dark branch (system defers to an emitted media query)
//! 2. preset theme overrides the branch colors entirely
//! 3. transparency overrides every background
//! 4. effect flags append independently

use embedkit_types::appearance::{preset_theme, AppearanceConfig, AppearanceMode};
use embedkit_types::color::Color;
use embedkit_types::theme::ThemeTokens;

use crate::css::Rule;
use crate::escape;

/// Colors the media-query override block applies when the viewer's OS
/// prefers dark and the config asked for `system`.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemDarkOverride {
    /// `None` when transparency already won; the block then only swaps
    /// the foreground colors.
    pub background: Option<String>,
    pub text_color: Color,
    pub accent_color: Color,
}

/// Fully resolved appearance state consumed by every exporter
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    /// CSS background value (color or `transparent`)
    pub background: String,
    pub text_color: Color,
    pub accent_color: Color,
    pub font_stack: String,
    pub system_dark: Option<SystemDarkOverride>,
    /// `box-shadow`/`text-shadow` value for the glow flag
    pub glow: Option<String>,
    pub text_shadow: Option<String>,
    pub drop_shadow: Option<String>,
    /// CSS gradient for the gradient-text flag
    pub text_gradient: Option<String>,
}

impl ResolvedStyle {
    /// The `body` rule every widget document starts from.
    pub fn body_rule(&self) -> Rule {
        Rule::new("body")
            .prop("margin", "0")
            .prop("background", self.background.clone())
            .prop("color", self.text_color.to_css())
            .prop("font-family", self.font_stack.clone())
    }

    /// Media-query rules for `system` appearance, if any.
    pub fn system_dark_rules(&self) -> Vec<Rule> {
        match &self.system_dark {
            Some(o) => {
                let rule = Rule::new("body")
                    .prop_opt("background", o.background.clone())
                    .prop("color", o.text_color.to_css());
                let accent = Rule::new(".accent").prop("color", o.accent_color.to_css());
                vec![rule, accent]
            }
            None => Vec::new(),
        }
    }

    /// Decorations for the widget's main text element.
    pub fn apply_text_effects(&self, rule: Rule) -> Rule {
        let rule = rule
            .prop_opt("text-shadow", self.glow.clone().or_else(|| self.text_shadow.clone()));
        if let Some(gradient) = &self.text_gradient {
            rule.prop("background", gradient.clone())
                .prop("-webkit-background-clip", "text")
                .prop("background-clip", "text")
                .prop("-webkit-text-fill-color", "transparent")
        } else {
            rule
        }
    }
}

/// Resolve an appearance config against the theme token table.
pub fn resolve(appearance: &AppearanceConfig, theme: &ThemeTokens) -> ResolvedStyle {
    // 1. Pick the light/dark branch. `system` renders the light branch and
    //    emits a media-query override; export time cannot know the viewer's
    //    OS preference.
    let is_dark = appearance.appearance_mode == AppearanceMode::Dark;
    let branch = if is_dark {
        &appearance.dark_mode
    } else {
        &appearance.light_mode
    };
    let mut background = branch.background_color.to_css();
    let mut text_color = branch.text_color;
    let mut accent_color = branch.accent_color;

    let mut system_dark = if appearance.appearance_mode == AppearanceMode::System {
        Some(SystemDarkOverride {
            background: Some(appearance.dark_mode.background_color.to_css()),
            text_color: appearance.dark_mode.text_color,
            accent_color: appearance.dark_mode.accent_color,
        })
    } else {
        None
    };

    // 2. Preset colors replace the branch colors entirely, both branches.
    if let Some(name) = appearance.preset_theme.as_deref() {
        if let Some(preset) = preset_theme(name) {
            background = preset.background_color.to_css();
            text_color = preset.text_color;
            accent_color = preset.accent_color;
            system_dark = None;
        } else if !name.is_empty() {
            log::debug!("unknown preset theme '{}', ignoring", name);
        }
    }

    // 3. Transparency wins over everything above.
    if appearance.use_transparent_bg {
        background = "transparent".to_string();
        if let Some(o) = system_dark.as_mut() {
            o.background = None;
        }
    }

    // 4. Effects are orthogonal; each pulls its fragment from the token
    //    table with a literal fallback.
    let glow = appearance.glow_effect.then(|| {
        theme
            .effect("glow")
            .unwrap_or("0 0 10px currentColor, 0 0 30px currentColor")
            .to_string()
    });
    let text_shadow = appearance.text_shadows.then(|| {
        theme
            .effect("textShadow")
            .unwrap_or("0 2px 8px rgba(0, 0, 0, 0.6)")
            .to_string()
    });
    let drop_shadow = appearance.drop_shadows.then(|| {
        theme
            .effect("dropShadow")
            .unwrap_or("0 8px 24px rgba(0, 0, 0, 0.4)")
            .to_string()
    });
    let text_gradient = appearance
        .gradient_text
        .then(|| match theme.gradient("gradient") {
            Some(g) => g.to_css(),
            None => "linear-gradient(135deg, #a855f7 0%, #ec4899 100%)".to_string(),
        });

    let font_stack = resolve_font(&appearance.font, theme);

    ResolvedStyle {
        background,
        text_color,
        accent_color,
        font_stack,
        system_dark,
        glow,
        text_shadow,
        drop_shadow,
        text_gradient,
    }
}

/// A font value is either a token key ("display", "body", "mono") or a
/// literal CSS stack. Token keys win; literals are sanitized.
fn resolve_font(font: &str, theme: &ThemeTokens) -> String {
    if font.is_empty() {
        return theme.font("body").to_string();
    }
    if !font.contains(',') && !font.contains('\'') && !font.contains(' ') {
        // Looks like a token key; theme.font falls back to sans-serif for
        // unknown keys, which matches the documented fallback.
        theme.font(font).to_string()
    } else {
        escape::css_value(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedkit_types::appearance::ModeColors;

    fn base() -> AppearanceConfig {
        AppearanceConfig::default()
    }

    #[test]
    fn test_dark_branch_selected() {
        let mut a = base();
        a.appearance_mode = AppearanceMode::Dark;
        let r = resolve(&a, &ThemeTokens::jazer_neon());
        assert_eq!(r.background, a.dark_mode.background_color.to_css());
        assert!(r.system_dark.is_none());
    }

    #[test]
    fn test_system_mode_emits_override_not_resolution() {
        let mut a = base();
        a.appearance_mode = AppearanceMode::System;
        let r = resolve(&a, &ThemeTokens::jazer_neon());
        // Light branch resolved, dark deferred to the media query
        assert_eq!(r.background, a.light_mode.background_color.to_css());
        let o = r.system_dark.unwrap();
        assert_eq!(o.background.unwrap(), a.dark_mode.background_color.to_css());
    }

    #[test]
    fn test_preset_overrides_custom_colors() {
        let mut a = base();
        a.preset_theme = Some("cyberpunk".to_string());
        a.light_mode = ModeColors {
            background_color: Color::from_rgba8(1, 2, 3, 255),
            text_color: Color::from_rgba8(4, 5, 6, 255),
            accent_color: Color::from_rgba8(7, 8, 9, 255),
        };
        let r = resolve(&a, &ThemeTokens::jazer_neon());
        assert_eq!(r.background, "#0a0e27");
        assert_eq!(r.accent_color.to_css(), "#00ffff");
    }

    #[test]
    fn test_unknown_preset_ignored() {
        let mut a = base();
        a.preset_theme = Some("plaid".to_string());
        let r = resolve(&a, &ThemeTokens::jazer_neon());
        assert_eq!(r.background, a.light_mode.background_color.to_css());
    }

    #[test]
    fn test_transparency_beats_preset_and_mode() {
        let mut a = base();
        a.appearance_mode = AppearanceMode::Dark;
        a.preset_theme = Some("cyberpunk".to_string());
        a.use_transparent_bg = true;
        let r = resolve(&a, &ThemeTokens::jazer_neon());
        assert_eq!(r.background, "transparent");
    }

    #[test]
    fn test_transparency_with_system_keeps_foreground_override() {
        let mut a = base();
        a.appearance_mode = AppearanceMode::System;
        a.use_transparent_bg = true;
        let r = resolve(&a, &ThemeTokens::jazer_neon());
        assert_eq!(r.background, "transparent");
        let o = r.system_dark.unwrap();
        assert!(o.background.is_none());
    }

    #[test]
    fn test_effects_are_orthogonal() {
        let mut a = base();
        a.glow_effect = true;
        a.gradient_text = true;
        a.drop_shadows = true;
        let r = resolve(&a, &ThemeTokens::jazer_neon());
        assert!(r.glow.is_some());
        assert!(r.text_gradient.is_some());
        assert!(r.drop_shadow.is_some());
        assert!(r.text_shadow.is_none());
    }

    #[test]
    fn test_font_token_and_literal() {
        let t = ThemeTokens::jazer_neon();
        let mut a = base();
        a.font = "mono".to_string();
        assert!(resolve(&a, &t).font_stack.contains("JetBrains"));
        a.font = "Comic Sans MS, cursive".to_string();
        assert_eq!(resolve(&a, &t).font_stack, "Comic Sans MS, cursive");
    }
}
