//! Quotes widget exporter.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::quotes::QuotesConfig;
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::escape;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct QuotesExporter;

impl Exporter for QuotesExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Quotes
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::Quotes(c) => c.clone(),
            _ => QuotesConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        HtmlDocument::new("Quotes")
            .stylesheet(sheet)
            .body(body)
            .script(generate_script(&cfg))
            .render()
    }
}

pub fn generate_html(cfg: &QuotesConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let mut body = String::from("<main class=\"widget\">\n");
    if cfg.quotes.is_empty() {
        body.push_str("  <div class=\"placeholder\">No quotes configured.</div>\n");
    } else {
        // The first quote is baked into the markup so the widget shows
        // content even with scripting disabled; rotation swaps it in place.
        let first = &cfg.quotes[0];
        body.push_str("  <figure class=\"quote-box\">\n");
        body.push_str(&format!(
            "    <blockquote class=\"quote\" id=\"quote\">{}</blockquote>\n",
            escape::html(&first.text)
        ));
        if cfg.show_author {
            body.push_str(&format!(
                "    <figcaption class=\"author accent\" id=\"author\">{}</figcaption>\n",
                escape::html(&first.author)
            ));
        }
        body.push_str("  </figure>\n");
    }
    body.push_str("</main>");

    let mut sheet = Stylesheet::new();
    sheet.rule(style.body_rule());
    sheet.rule(
        Rule::new(".widget")
            .prop("min-height", "100vh")
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("padding", "24px")
            .prop("box-sizing", "border-box"),
    );
    sheet.rule(Rule::new(".placeholder").prop("font-size", "15px").prop("opacity", "0.7"));
    sheet.rule(
        Rule::new(".quote-box")
            .prop("margin", "0")
            .prop("max-width", "560px")
            .prop("text-align", "center")
            .prop("transition", "opacity 0.4s ease"),
    );
    let mut quote_rule = Rule::new(".quote")
        .prop("margin", "0 0 12px")
        .prop("font-size", "22px")
        .prop("line-height", "1.5");
    if cfg.show_quote_marks {
        quote_rule = quote_rule.prop("quotes", "\"\\201C\" \"\\201D\"");
        sheet.rule(
            Rule::new(".quote::before")
                .prop("content", "open-quote")
                .prop("color", style.accent_color.to_css())
                .prop("margin-right", "2px"),
        );
        sheet.rule(
            Rule::new(".quote::after")
                .prop("content", "close-quote")
                .prop("color", style.accent_color.to_css())
                .prop("margin-left", "2px"),
        );
    }
    sheet.rule(style.apply_text_effects(quote_rule));
    sheet.rule(
        Rule::new(".author")
            .prop("font-size", "14px")
            .prop("color", style.accent_color.to_css())
            .prop("opacity", "0.9"),
    );
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

const SCRIPT: &str = r#"(function () {
  var quotes = __QUOTES__;
  var mode = '__MODE__';
  var intervalMs = __INTERVAL_MS__;

  var quoteEl = document.getElementById('quote');
  var authorEl = document.getElementById('author');
  if (!quoteEl || quotes.length === 0) return;

  function show(index) {
    var q = quotes[index % quotes.length];
    quoteEl.textContent = q.text;
    if (authorEl) authorEl.textContent = q.author;
  }

  // daily/hourly pick deterministically from the clock so every viewer
  // sees the same quote for the same period
  if (mode === 'daily') {
    var dayIndex = Math.floor(Date.now() / (24 * 3600 * 1000));
    show(dayIndex);
  } else if (mode === 'hourly') {
    var hourIndex = Math.floor(Date.now() / (3600 * 1000));
    show(hourIndex);
  } else if (mode === 'random') {
    show(Math.floor(Math.random() * quotes.length));
  } else {
    var index = 0;
    show(index);
    if (quotes.length > 1) {
      setInterval(function () {
        index += 1;
        show(index);
      }, intervalMs);
    }
  }
})();
"#;

pub fn generate_script(cfg: &QuotesConfig) -> String {
    if cfg.quotes.is_empty() {
        return String::new();
    }
    // Quote bodies travel as a JSON array literal with `<` escaped so a
    // quote containing `</script>` cannot close the script block; the
    // script then only assigns them via textContent.
    let quotes_json = serde_json::to_string(&cfg.quotes).unwrap_or_else(|_| "[]".to_string());
    let quotes_json = escape::script_json(&quotes_json);
    let interval_ms = cfg.interval_seconds.clamp(5, 3600) * 1000;
    SCRIPT
        .replace("__QUOTES__", &quotes_json)
        .replace("__MODE__", cfg.rotation.as_str())
        .replace("__INTERVAL_MS__", &interval_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedkit_types::widget_configs::quotes::{Quote, RotationMode};

    fn render(cfg: QuotesConfig) -> String {
        QuotesExporter.render(&WidgetConfig::Quotes(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = QuotesConfig::default();
        assert_eq!(render(cfg.clone()), render(cfg));
    }

    #[test]
    fn test_first_quote_in_markup() {
        let doc = render(QuotesConfig::default());
        assert!(doc.contains("The best way to predict the future is to invent it."));
        assert!(doc.contains("Alan Kay"));
    }

    #[test]
    fn test_empty_quotes_placeholder() {
        let mut cfg = QuotesConfig::default();
        cfg.quotes.clear();
        let doc = render(cfg);
        assert!(doc.contains("No quotes configured."));
        assert!(!doc.contains("<blockquote"));
    }

    #[test]
    fn test_quote_markup_is_escaped() {
        let mut cfg = QuotesConfig::default();
        cfg.quotes = vec![Quote::new("<b>bold</b> claim", "<i>me</i>")];
        let doc = render(cfg);
        assert!(doc.contains("&lt;b&gt;bold&lt;/b&gt; claim"));
        assert!(!doc.contains("<b>bold</b>"));
    }

    #[test]
    fn test_quote_text_cannot_close_script_block() {
        let mut cfg = QuotesConfig::default();
        cfg.quotes = vec![
            Quote::new("</script><script>alert(1)</script>", ""),
            Quote::new("Second", ""),
        ];
        let script = generate_script(&cfg);
        assert!(!script.contains("</script>"));
        assert!(!script.contains("<script>"));
        assert!(script.contains("\\u003c/script>"));
    }

    #[test]
    fn test_interval_mode_emits_timer() {
        let mut cfg = QuotesConfig::default();
        cfg.rotation = RotationMode::Interval;
        cfg.quotes.push(Quote::new("Second", ""));
        cfg.interval_seconds = 10;
        let script = generate_script(&cfg);
        assert!(script.contains("var mode = 'interval';"));
        assert!(script.contains("var intervalMs = 10000;"));
    }

    #[test]
    fn test_author_hidden_when_disabled() {
        let mut cfg = QuotesConfig::default();
        cfg.show_author = false;
        let doc = render(cfg);
        assert!(!doc.contains("id=\"author\""));
    }
}
