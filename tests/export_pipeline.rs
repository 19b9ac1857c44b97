//! End-to-end checks: JSON config in, complete HTML document out.

use embedkit::{Registry, ThemeTokens, WidgetConfig, WidgetKind};

fn parse(json: &str) -> WidgetConfig {
    serde_json::from_str(json).expect("config should deserialize")
}

fn render(config: &WidgetConfig) -> String {
    Registry::with_builtins()
        .render(config, &ThemeTokens::jazer_neon())
        .expect("render should succeed")
}

#[test]
fn every_widget_renders_a_complete_document_from_defaults() {
    for kind in WidgetKind::all() {
        let doc = render(&WidgetConfig::default_for(*kind));
        assert!(doc.starts_with("<!DOCTYPE html>"), "{:?}", kind);
        assert!(doc.contains("<style>"), "{:?}", kind);
        assert!(doc.trim_end().ends_with("</html>"), "{:?}", kind);
    }
}

#[test]
fn rendering_is_idempotent() {
    for kind in WidgetKind::all() {
        let cfg = WidgetConfig::default_for(*kind);
        assert_eq!(render(&cfg), render(&cfg), "{:?}", kind);
    }
}

#[test]
fn malformed_fields_degrade_to_defaults() {
    // Wrong types, unknown enum strings and junk keys must not fail;
    // the widget still renders from sensible values.
    let cfg = parse(
        r#"{
            "widget": "clock",
            "clockType": "sundial",
            "appearanceMode": "sepia",
            "timezone": "Not/AZone",
            "mystery": 42
        }"#,
    );
    let doc = render(&cfg);
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(!doc.contains("sundial"));
}

#[test]
fn hostile_text_fields_stay_inert() {
    let cfg = parse(
        r#"{
            "widget": "countdown",
            "eventTitle": "<script>alert('x')</script>",
            "completionMessage": "</script><script>alert(2)</script>"
        }"#,
    );
    let doc = render(&cfg);
    assert!(!doc.contains("<script>alert"));
    assert!(doc.contains("&lt;script&gt;"));
}

#[test]
fn user_text_cannot_terminate_the_script_block() {
    // Text that would close the script element at HTML-parse time must
    // never reach the document verbatim, in markup or in script literals.
    let quotes = parse(
        r#"{
            "widget": "quotes",
            "quotes": [
                {"text": "</script><script>alert(1)</script>", "author": ""},
                {"text": "Second", "author": ""}
            ]
        }"#,
    );
    let doc = render(&quotes);
    assert!(!doc.contains("</script><script>"));
    assert_eq!(doc.matches("<script>").count(), 1);

    let gallery = parse(
        r#"{
            "widget": "gallery",
            "images": [
                {"url": "https://example.com/a.jpg", "caption": "</script><script>alert(1)</script>"},
                {"url": "https://example.com/b.jpg", "caption": ""}
            ]
        }"#,
    );
    let doc = render(&gallery);
    assert!(!doc.contains("</script><script>"));
    assert_eq!(doc.matches("<script>").count(), 1);
}

#[test]
fn transparency_wins_over_preset_and_dark_mode() {
    let cfg = parse(
        r#"{
            "widget": "quotes",
            "appearanceMode": "dark",
            "presetTheme": "cyberpunk",
            "useTransparentBg": true
        }"#,
    );
    let doc = render(&cfg);
    assert!(doc.contains("background: transparent;"));
    assert!(!doc.contains("background: #0a0e27;"));
}

#[test]
fn preset_theme_overrides_branch_colors() {
    let cfg = parse(
        r##"{
            "widget": "counter",
            "presetTheme": "cyberpunk",
            "lightMode": {"backgroundColor": "#123456"}
        }"##,
    );
    let doc = render(&cfg);
    assert!(doc.contains("background: #0a0e27;"));
    assert!(doc.contains("#00ffff"));
    assert!(!doc.contains("#123456"));
}

#[test]
fn empty_gallery_renders_placeholder() {
    let cfg = parse(r#"{"widget": "gallery", "images": []}"#);
    let doc = render(&cfg);
    assert!(doc.contains("No images configured."));
    assert!(!doc.contains("<img"));
}

#[test]
fn exported_scripts_clamp_progress_percentages() {
    let cfg = parse(r#"{"widget": "life-progress"}"#);
    let doc = render(&cfg);
    assert!(doc.contains("Math.min(100, Math.max(0, p))"));
}

#[test]
fn registry_rejects_unknown_widget_ids() {
    let registry = Registry::with_builtins();
    assert!(registry.kind_for_id("clock").is_ok());
    assert!(registry.kind_for_id("hologram").is_err());
}
