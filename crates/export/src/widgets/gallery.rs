//! Image gallery widget exporter.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::gallery::{GalleryConfig, Transition};
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::escape;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct GalleryExporter;

impl Exporter for GalleryExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Gallery
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::Gallery(c) => c.clone(),
            _ => GalleryConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        HtmlDocument::new("Gallery")
            .stylesheet(sheet)
            .body(body)
            .script(generate_script(&cfg))
            .render()
    }
}

pub fn generate_html(cfg: &GalleryConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let mut sheet = Stylesheet::new();
    sheet.rule(style.body_rule());
    sheet.rule(
        Rule::new(".widget")
            .prop("min-height", "100vh")
            .prop("display", "flex")
            .prop("flex-direction", "column")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("gap", "10px"),
    );

    // Zero images: a well-formed placeholder document, no <img> tags.
    if cfg.images.is_empty() {
        sheet.rule(
            Rule::new(".placeholder")
                .prop("font-size", "16px")
                .prop("opacity", "0.7"),
        );
        let body = String::from(
            "<main class=\"widget\">\n  <div class=\"placeholder\">No images configured.</div>\n</main>",
        );
        return (body, sheet);
    }

    let mut body = String::from("<main class=\"widget\">\n  <div class=\"frame\">\n");
    for (i, image) in cfg.images.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        body.push_str(&format!(
            "    <img class=\"slide{}\" src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            active,
            escape::url(&image.url),
            escape::html(&image.caption),
        ));
    }
    body.push_str("  </div>\n");
    if cfg.show_captions {
        let first_caption = escape::html(&cfg.images[0].caption);
        body.push_str(&format!(
            "  <div class=\"caption\" id=\"caption\">{}</div>\n",
            first_caption
        ));
    }
    if cfg.show_dots && cfg.images.len() > 1 {
        body.push_str("  <div class=\"dots\" id=\"dots\">\n");
        for i in 0..cfg.images.len() {
            let active = if i == 0 { " active" } else { "" };
            body.push_str(&format!("    <span class=\"dot{}\"></span>\n", active));
        }
        body.push_str("  </div>\n");
    }
    body.push_str("</main>");

    sheet.rule(
        Rule::new(".frame")
            .prop("position", "relative")
            .prop("width", "min(90vw, 640px)")
            .prop("aspect-ratio", "16 / 10")
            .prop("border-radius", format!("{}px", cfg.corner_radius.clamp(0.0, 48.0)))
            .prop("overflow", "hidden")
            .prop_opt("box-shadow", style.drop_shadow.clone()),
    );
    let slide = Rule::new(".slide")
        .prop("position", "absolute")
        .prop("inset", "0")
        .prop("width", "100%")
        .prop("height", "100%")
        .prop("object-fit", cfg.fit.as_str());
    let slide = match cfg.transition {
        Transition::Fade => slide
            .prop("opacity", "0")
            .prop("transition", "opacity 0.6s ease"),
        Transition::Slide => slide
            .prop("transform", "translateX(100%)")
            .prop("transition", "transform 0.5s ease"),
        Transition::None => slide.prop("display", "none"),
    };
    sheet.rule(slide);
    let active = match cfg.transition {
        Transition::Fade => Rule::new(".slide.active").prop("opacity", "1"),
        Transition::Slide => Rule::new(".slide.active").prop("transform", "translateX(0)"),
        Transition::None => Rule::new(".slide.active").prop("display", "block"),
    };
    sheet.rule(active);
    sheet.rule(Rule::new(".caption").prop("font-size", "14px").prop("opacity", "0.8"));
    sheet.rule(
        Rule::new(".dot")
            .prop("display", "inline-block")
            .prop("width", "8px")
            .prop("height", "8px")
            .prop("margin", "0 3px")
            .prop("border-radius", "50%")
            .prop("background", "rgba(128, 128, 128, 0.4)"),
    );
    sheet.rule(Rule::new(".dot.active").prop("background", style.accent_color.to_css()));
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

const SCRIPT: &str = r#"(function () {
  var intervalMs = __INTERVAL_MS__;
  var captions = __CAPTIONS__;

  var slides = document.querySelectorAll('.slide');
  var dots = document.querySelectorAll('.dot');
  var captionEl = document.getElementById('caption');
  if (slides.length < 2) return;

  var index = 0;
  function show(next) {
    slides[index].classList.remove('active');
    if (dots[index]) dots[index].classList.remove('active');
    index = next % slides.length;
    slides[index].classList.add('active');
    if (dots[index]) dots[index].classList.add('active');
    if (captionEl) captionEl.textContent = captions[index] || '';
  }

  setInterval(function () { show(index + 1); }, intervalMs);
})();
"#;

pub fn generate_script(cfg: &GalleryConfig) -> String {
    if cfg.images.len() < 2 {
        return String::new();
    }
    // Captions travel as a JSON array literal with `<` escaped so a
    // caption containing `</script>` cannot close the script block; the
    // script only ever assigns them via textContent.
    let captions: Vec<&str> = cfg.images.iter().map(|i| i.caption.as_str()).collect();
    let captions_json =
        serde_json::to_string(&captions).unwrap_or_else(|_| "[]".to_string());
    let captions_json = escape::script_json(&captions_json);
    let interval_ms = cfg.interval_seconds.clamp(1, 3600) * 1000;
    SCRIPT
        .replace("__INTERVAL_MS__", &interval_ms.to_string())
        .replace("__CAPTIONS__", &captions_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedkit_types::widget_configs::gallery::GalleryImage;

    fn with_images(urls: &[&str]) -> GalleryConfig {
        let mut cfg = GalleryConfig::default();
        cfg.images = urls
            .iter()
            .map(|u| GalleryImage {
                url: u.to_string(),
                caption: String::new(),
            })
            .collect();
        cfg
    }

    fn render(cfg: GalleryConfig) -> String {
        GalleryExporter.render(&WidgetConfig::Gallery(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_empty_gallery_placeholder() {
        let doc = render(GalleryConfig::default());
        assert!(doc.contains("No images configured."));
        assert!(!doc.contains("<img"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_single_image_has_no_rotation_script() {
        let doc = render(with_images(&["https://example.com/a.jpg"]));
        assert!(doc.contains("<img"));
        assert!(!doc.contains("setInterval"));
    }

    #[test]
    fn test_javascript_url_neutralized() {
        let doc = render(with_images(&["javascript:alert(1)", "https://example.com/b.jpg"]));
        assert!(doc.contains("src=\"#\""));
        assert!(!doc.contains("src=\"javascript:"));
    }

    #[test]
    fn test_caption_escaped_in_markup_and_json() {
        let mut cfg = with_images(&["https://example.com/a.jpg", "https://example.com/b.jpg"]);
        cfg.images[0].caption = "<script>alert(1)</script>".to_string();
        let doc = render(cfg);
        assert!(doc.contains("alt=\"&lt;script&gt;alert(1)&lt;/script&gt;\""));
        assert!(!doc.contains("<script>alert(1)</script>"));
        assert!(doc.contains("\\u003cscript>alert(1)\\u003c/script>"));
    }

    #[test]
    fn test_caption_cannot_close_script_block() {
        let mut cfg = with_images(&["https://example.com/a.jpg", "https://example.com/b.jpg"]);
        cfg.images[0].caption = "</script><script>alert(1)</script>".to_string();
        let script = generate_script(&cfg);
        assert!(!script.contains("</script>"));
        assert!(!script.contains("<script>"));
    }

    #[test]
    fn test_rotation_interval_is_clamped() {
        let mut cfg = with_images(&["https://example.com/a.jpg", "https://example.com/b.jpg"]);
        cfg.interval_seconds = 0;
        let script = generate_script(&cfg);
        assert!(script.contains("var intervalMs = 1000;"));
    }
}
