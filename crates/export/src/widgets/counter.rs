//! Counter widget exporter.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::counter::CounterConfig;
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::escape;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct CounterExporter;

impl Exporter for CounterExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Counter
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::Counter(c) => c.clone(),
            _ => CounterConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        HtmlDocument::new(&cfg.label)
            .stylesheet(sheet)
            .body(body)
            .script(generate_script(&cfg))
            .render()
    }
}

pub fn generate_html(cfg: &CounterConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let mut body = String::from("<main class=\"widget\">\n");
    body.push_str(&format!(
        "  <h2 class=\"title\">{}</h2>\n",
        escape::html(&cfg.label)
    ));
    body.push_str(&format!(
        "  <div class=\"count accent\" id=\"count\">{}</div>\n",
        cfg.start_value
    ));
    body.push_str(concat!(
        "  <div class=\"controls\">\n",
        "    <button class=\"btn\" id=\"dec\" aria-label=\"decrement\">&minus;</button>\n",
        "    <button class=\"btn\" id=\"inc\" aria-label=\"increment\">+</button>\n",
    ));
    if cfg.show_reset {
        body.push_str("    <button class=\"btn reset\" id=\"reset\">Reset</button>\n");
    }
    body.push_str("  </div>\n</main>");

    let mut sheet = Stylesheet::new();
    sheet.rule(style.body_rule());
    sheet.rule(
        Rule::new(".widget")
            .prop("min-height", "100vh")
            .prop("display", "flex")
            .prop("flex-direction", "column")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("gap", "14px"),
    );
    sheet.rule(
        Rule::new(".title")
            .prop("margin", "0")
            .prop("font-size", "18px")
            .prop("font-weight", "600")
            .prop("opacity", "0.85"),
    );
    let count_rule = Rule::new(".count")
        .prop("font-size", "72px")
        .prop("font-weight", "700")
        .prop("font-variant-numeric", "tabular-nums")
        .prop("color", style.accent_color.to_css());
    sheet.rule(style.apply_text_effects(count_rule));
    sheet.rule(Rule::new(".controls").prop("display", "flex").prop("gap", "10px"));
    sheet.rule(
        Rule::new(".btn")
            .prop("min-width", "48px")
            .prop("padding", "10px 16px")
            .prop("font-size", "20px")
            .prop("border", "none")
            .prop("border-radius", "8px")
            .prop("cursor", "pointer")
            .prop("background", style.accent_color.to_css())
            .prop("color", "#ffffff")
            .prop_opt("box-shadow", style.drop_shadow.clone()),
    );
    sheet.rule(
        Rule::new(".btn.reset")
            .prop("background", "transparent")
            .prop("border", format!("1px solid {}", style.accent_color.to_css()))
            .prop("color", style.accent_color.to_css())
            .prop("font-size", "14px"),
    );
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

const SCRIPT: &str = r#"(function () {
  var startValue = __START__;
  var step = __STEP__;
  var allowNegative = __ALLOW_NEGATIVE__;
  var storageKey = 'embedkit-counter-__KEY__';

  var countEl = document.getElementById('count');
  var value = startValue;
  try {
    var saved = localStorage.getItem(storageKey);
    if (saved !== null && !isNaN(parseInt(saved, 10))) value = parseInt(saved, 10);
  } catch (e) { /* storage may be unavailable in sandboxed embeds */ }

  function render() {
    countEl.textContent = value;
    try { localStorage.setItem(storageKey, String(value)); } catch (e) {}
  }

  document.getElementById('inc').addEventListener('click', function () {
    value += step;
    render();
  });
  document.getElementById('dec').addEventListener('click', function () {
    var next = value - step;
    if (!allowNegative && next < 0) next = 0;
    value = next;
    render();
  });
  var resetEl = document.getElementById('reset');
  if (resetEl) {
    resetEl.addEventListener('click', function () {
      value = startValue;
      render();
    });
  }

  render();
})();
"#;

pub fn generate_script(cfg: &CounterConfig) -> String {
    // The storage key embeds the label so two counters on one page do not
    // collide; only [a-z0-9-] survives into the key.
    let key: String = cfg
        .label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    SCRIPT
        .replace("__START__", &cfg.start_value.to_string())
        .replace("__STEP__", &cfg.step.to_string())
        .replace("__ALLOW_NEGATIVE__", if cfg.allow_negative { "true" } else { "false" })
        .replace("__KEY__", &key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(cfg: CounterConfig) -> String {
        CounterExporter.render(&WidgetConfig::Counter(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = CounterConfig::default();
        assert_eq!(render(cfg.clone()), render(cfg));
    }

    #[test]
    fn test_label_cannot_break_out_of_script() {
        let mut cfg = CounterConfig::default();
        cfg.label = "x'; alert(1); //".to_string();
        let script = generate_script(&cfg);
        assert!(!script.contains("alert(1)"));
        assert!(script.contains("embedkit-counter-x---alert-1-----"));
    }

    #[test]
    fn test_start_value_is_numeric_literal() {
        let mut cfg = CounterConfig::default();
        cfg.start_value = -42;
        cfg.step = 5;
        let script = generate_script(&cfg);
        assert!(script.contains("var startValue = -42;"));
        assert!(script.contains("var step = 5;"));
    }

    #[test]
    fn test_reset_button_respects_toggle() {
        let mut cfg = CounterConfig::default();
        cfg.show_reset = false;
        let style = resolve(&cfg.appearance, &ThemeTokens::jazer_neon());
        let (body, _) = generate_html(&cfg, &style);
        assert!(!body.contains("id=\"reset\""));
    }
}
