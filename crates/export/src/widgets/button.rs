//! Link-button widget exporter.
//!
//! The only widget with no script: everything it does is an anchor plus
//! CSS, so the exported page carries no `<script>` block at all.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::button::{ButtonConfig, HoverEffect};
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::escape;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct ButtonExporter;

impl Exporter for ButtonExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::Button(c) => c.clone(),
            _ => ButtonConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        HtmlDocument::new(&cfg.label)
            .stylesheet(sheet)
            .body(body)
            .render()
    }
}

const PULSE_KEYFRAMES: &str = r#"@keyframes pulse {
  0% { transform: scale(1); }
  50% { transform: scale(1.05); }
  100% { transform: scale(1); }
}"#;

pub fn generate_html(cfg: &ButtonConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let target = if cfg.open_in_new_tab {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    let body = format!(
        concat!(
            "<main class=\"widget\">\n",
            "  <a class=\"button\" href=\"{}\"{}>{}</a>\n",
            "</main>",
        ),
        escape::url(&cfg.url),
        target,
        escape::html(&cfg.label),
    );

    let (pad_v, pad_h, font_size) = cfg.size.metrics();
    let radius = cfg.border_radius.clamp(0.0, 40.0);
    let bg = cfg.button_color.to_css();

    let mut sheet = Stylesheet::new();
    sheet.rule(style.body_rule());
    sheet.rule(
        Rule::new(".widget")
            .prop("min-height", "100vh")
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("padding", "16px")
            .prop("box-sizing", "border-box"),
    );
    let mut button = Rule::new(".button")
        .prop("display", "inline-block")
        .prop("padding", format!("{}px {}px", pad_v, pad_h))
        .prop("font-size", format!("{}px", font_size))
        .prop("font-weight", "600")
        .prop("text-align", "center")
        .prop("text-decoration", "none")
        .prop("border-radius", format!("{}px", radius))
        .prop("background", bg.clone())
        .prop("color", cfg.label_color.to_css())
        .prop_opt("box-shadow", style.drop_shadow.clone());
    if cfg.full_width {
        button = button.prop("width", "100%").prop("box-sizing", "border-box");
    }
    match cfg.hover_effect {
        HoverEffect::None => {
            sheet.rule(button);
        }
        HoverEffect::Lift => {
            sheet.rule(button.prop("transition", "transform 0.15s ease, box-shadow 0.15s ease"));
            sheet.rule(
                Rule::new(".button:hover")
                    .prop("transform", "translateY(-2px)")
                    .prop("box-shadow", "0 6px 18px rgba(0, 0, 0, 0.25)"),
            );
        }
        HoverEffect::Glow => {
            sheet.rule(button.prop("transition", "box-shadow 0.15s ease"));
            sheet.rule(
                Rule::new(".button:hover").prop("box-shadow", format!("0 0 18px {}", bg)),
            );
        }
        HoverEffect::Pulse => {
            sheet.rule(button);
            sheet.raw(PULSE_KEYFRAMES);
            sheet.rule(Rule::new(".button:hover").prop("animation", "pulse 1s ease-in-out infinite"));
        }
    }
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedkit_types::widget_configs::button::ButtonSize;

    fn render(cfg: ButtonConfig) -> String {
        ButtonExporter.render(&WidgetConfig::Button(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = ButtonConfig::default();
        assert_eq!(render(cfg.clone()), render(cfg));
    }

    #[test]
    fn test_no_script_block() {
        let doc = render(ButtonConfig::default());
        assert!(!doc.contains("<script>"));
    }

    #[test]
    fn test_javascript_url_neutralized() {
        let mut cfg = ButtonConfig::default();
        cfg.url = "javascript:alert(1)".to_string();
        let doc = render(cfg);
        assert!(doc.contains("href=\"#\""));
        assert!(!doc.contains("javascript:"));
    }

    #[test]
    fn test_label_is_escaped() {
        let mut cfg = ButtonConfig::default();
        cfg.label = "<script>x</script>".to_string();
        let doc = render(cfg);
        assert!(!doc.contains("<script>x"));
        assert!(doc.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn test_new_tab_adds_rel_noopener() {
        let doc = render(ButtonConfig::default());
        assert!(doc.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
        let mut cfg = ButtonConfig::default();
        cfg.open_in_new_tab = false;
        let doc = render(cfg);
        assert!(!doc.contains("target=\"_blank\""));
    }

    #[test]
    fn test_size_metrics_reach_css() {
        let mut cfg = ButtonConfig::default();
        cfg.size = ButtonSize::Large;
        let doc = render(cfg);
        assert!(doc.contains("padding: 16px 36px;"));
        assert!(doc.contains("font-size: 20px;"));
    }

    #[test]
    fn test_pulse_emits_keyframes() {
        let mut cfg = ButtonConfig::default();
        cfg.hover_effect = HoverEffect::Pulse;
        let doc = render(cfg);
        assert!(doc.contains("@keyframes pulse"));
        assert!(doc.contains("animation: pulse 1s ease-in-out infinite;"));
    }
}
