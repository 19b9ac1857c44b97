//! Clock widget exporter.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::clock::{ClockConfig, ClockType, DateFormat, TimeFormat};
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::escape;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct ClockExporter;

impl Exporter for ClockExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Clock
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::Clock(c) => c.clone(),
            _ => ClockConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        let title = if cfg.title.is_empty() { "Clock" } else { &cfg.title };
        HtmlDocument::new(title)
            .comment(&describe(&cfg))
            .stylesheet(sheet)
            .body(body)
            .script(generate_script(&cfg))
            .render()
    }
}

/// Descriptive form of the derivations the script performs. The script
/// below must use identical arithmetic.
fn describe(cfg: &ClockConfig) -> String {
    let cadence = if cfg.clock_type.uses_animation_frames() {
        "every animation frame"
    } else {
        "every 1s"
    };
    format!(
        "clock: {} face, {} time, date format {}, re-rendered {}",
        cfg.clock_type.as_str(),
        cfg.time_format.as_str(),
        cfg.date_format.as_str(),
        cadence
    )
}

/// Resolve the configured timezone against the IANA database. `"Local"`
/// and anything unparseable mean "use the viewer's local time".
fn validated_timezone(cfg: &ClockConfig) -> Option<String> {
    if cfg.timezone.is_empty() || cfg.timezone == "Local" {
        return None;
    }
    match cfg.timezone.parse::<chrono_tz::Tz>() {
        Ok(tz) => Some(tz.name().to_string()),
        Err(_) => {
            log::debug!("unknown timezone '{}', using viewer local time", cfg.timezone);
            None
        }
    }
}

pub fn generate_html(cfg: &ClockConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let mut body = String::from("<main class=\"widget\">\n");
    if !cfg.title.is_empty() {
        body.push_str(&format!("  <h2 class=\"title\">{}</h2>\n", escape::html(&cfg.title)));
    }
    match cfg.clock_type {
        ClockType::Digital => {
            body.push_str("  <div class=\"time accent\" id=\"time\">--:--</div>\n");
        }
        _ => {
            body.push_str(concat!(
                "  <div class=\"face\">\n",
                "    <div class=\"hand hour\" id=\"hour-hand\"></div>\n",
                "    <div class=\"hand minute\" id=\"minute-hand\"></div>\n",
                "    <div class=\"hand second accent\" id=\"second-hand\"></div>\n",
                "    <div class=\"pin\"></div>\n",
                "  </div>\n",
            ));
        }
    }
    if cfg.show_date {
        body.push_str("  <div class=\"date\" id=\"date\"></div>\n");
    }
    body.push_str("</main>");

    let mut sheet = Stylesheet::new();
    sheet.rule(style.body_rule());
    sheet.rule(
        Rule::new(".widget")
            .prop("min-height", "100vh")
            .prop("display", "flex")
            .prop("flex-direction", "column")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("gap", "8px")
            .prop_opt("filter", style.drop_shadow.as_ref().map(|s| format!("drop-shadow({})", s))),
    );
    sheet.rule(
        Rule::new(".title")
            .prop("margin", "0")
            .prop("font-size", "18px")
            .prop("font-weight", "600")
            .prop("opacity", "0.85"),
    );
    sheet.rule(Rule::new(".accent").prop("color", style.accent_color.to_css()));
    match cfg.clock_type {
        ClockType::Digital => {
            let time_rule = Rule::new(".time")
                .prop("font-size", "64px")
                .prop("font-weight", "700")
                .prop("font-variant-numeric", "tabular-nums")
                .prop("letter-spacing", "0.04em");
            sheet.rule(style.apply_text_effects(time_rule));
            if cfg.blink_colon {
                sheet.rule(
                    Rule::new(".colon")
                        .prop("animation", "blink 1s step-end infinite"),
                );
                sheet.raw("@keyframes blink {\n  50% { opacity: 0; }\n}");
            }
        }
        _ => {
            sheet.rule(
                Rule::new(".face")
                    .prop("position", "relative")
                    .prop("width", "200px")
                    .prop("height", "200px")
                    .prop("border", format!("3px solid {}", style.text_color.to_css()))
                    .prop("border-radius", "50%"),
            );
            sheet.rule(
                Rule::new(".hand")
                    .prop("position", "absolute")
                    .prop("left", "50%")
                    .prop("bottom", "50%")
                    .prop("transform-origin", "bottom center")
                    .prop("background", style.text_color.to_css())
                    .prop("border-radius", "2px"),
            );
            sheet.rule(
                Rule::new(".hand.hour")
                    .prop("width", "5px")
                    .prop("height", "50px")
                    .prop("margin-left", "-2.5px"),
            );
            sheet.rule(
                Rule::new(".hand.minute")
                    .prop("width", "3px")
                    .prop("height", "75px")
                    .prop("margin-left", "-1.5px"),
            );
            let second = Rule::new(".hand.second")
                .prop("width", "1.5px")
                .prop("height", "85px")
                .prop("margin-left", "-0.75px")
                .prop("background", style.accent_color.to_css());
            let second = if cfg.clock_type == ClockType::AnalogTrail {
                second.prop(
                    "box-shadow",
                    format!("0 0 6px {}, 0 0 14px {}", style.accent_color.to_css(), style.accent_color.to_css()),
                )
            } else {
                second
            };
            sheet.rule(second);
            sheet.rule(
                Rule::new(".pin")
                    .prop("position", "absolute")
                    .prop("left", "50%")
                    .prop("top", "50%")
                    .prop("width", "10px")
                    .prop("height", "10px")
                    .prop("margin", "-5px 0 0 -5px")
                    .prop("border-radius", "50%")
                    .prop("background", style.accent_color.to_css()),
            );
        }
    }
    sheet.rule(
        Rule::new(".date")
            .prop("font-size", "16px")
            .prop("opacity", "0.8"),
    );
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

const DIGITAL_SCRIPT: &str = r#"(function () {
  var hour12 = __HOUR12__;
  var showSeconds = __SHOW_SECONDS__;
  var blinkColon = __BLINK_COLON__;
  var timeZone = __TIME_ZONE__;
  var dateFormat = '__DATE_FORMAT__';
  var showDate = __SHOW_DATE__;
  var timeEl = document.getElementById('time');
  var dateEl = document.getElementById('date');

  function pad(n) { return (n < 10 ? '0' : '') + n; }

  function zoned(d) {
    if (!timeZone) return d;
    return new Date(d.toLocaleString('en-US', { timeZone: timeZone }));
  }

  function colon() {
    return blinkColon ? '<span class="colon">:</span>' : ':';
  }

  function renderDate(d) {
    var y = d.getFullYear();
    var mo = pad(d.getMonth() + 1);
    var da = pad(d.getDate());
    switch (dateFormat) {
      case 'yyyy-mm-dd': return y + '-' + mo + '-' + da;
      case 'dd/mm/yyyy': return da + '/' + mo + '/' + y;
      case 'mm/dd/yyyy': return mo + '/' + da + '/' + y;
      default:
        return d.toLocaleDateString('en-US', { weekday: 'long', year: 'numeric', month: 'long', day: 'numeric' });
    }
  }

  function render() {
    var d = zoned(new Date());
    var h = d.getHours();
    var suffix = '';
    if (hour12) {
      suffix = h >= 12 ? ' PM' : ' AM';
      h = h % 12;
      if (h === 0) h = 12;
    }
    var html = pad(h) + colon() + pad(d.getMinutes());
    if (showSeconds) html += colon() + pad(d.getSeconds());
    timeEl.innerHTML = html + suffix;
    if (showDate && dateEl) dateEl.textContent = renderDate(d);
  }

  render();
  setInterval(render, 1000);
})();
"#;

const ANALOG_SCRIPT: &str = r#"(function () {
  var smooth = __SMOOTH__;
  var timeZone = __TIME_ZONE__;
  var dateFormat = '__DATE_FORMAT__';
  var showDate = __SHOW_DATE__;
  var hourEl = document.getElementById('hour-hand');
  var minuteEl = document.getElementById('minute-hand');
  var secondEl = document.getElementById('second-hand');
  var dateEl = document.getElementById('date');

  function pad(n) { return (n < 10 ? '0' : '') + n; }

  function zoned(d) {
    if (!timeZone) return d;
    return new Date(d.toLocaleString('en-US', { timeZone: timeZone }));
  }

  function renderDate(d) {
    var y = d.getFullYear();
    var mo = pad(d.getMonth() + 1);
    var da = pad(d.getDate());
    switch (dateFormat) {
      case 'yyyy-mm-dd': return y + '-' + mo + '-' + da;
      case 'dd/mm/yyyy': return da + '/' + mo + '/' + y;
      case 'mm/dd/yyyy': return mo + '/' + da + '/' + y;
      default:
        return d.toLocaleDateString('en-US', { weekday: 'long', year: 'numeric', month: 'long', day: 'numeric' });
    }
  }

  function render() {
    var d = zoned(new Date());
    var s = d.getSeconds() + (smooth ? d.getMilliseconds() / 1000 : 0);
    var m = d.getMinutes() + s / 60;
    var h = (d.getHours() % 12) + m / 60;
    secondEl.style.transform = 'rotate(' + s * 6 + 'deg)';
    minuteEl.style.transform = 'rotate(' + m * 6 + 'deg)';
    hourEl.style.transform = 'rotate(' + h * 30 + 'deg)';
    if (showDate && dateEl) dateEl.textContent = renderDate(d);
  }

  if (smooth) {
    (function loop() {
      render();
      requestAnimationFrame(loop);
    })();
  } else {
    render();
    setInterval(render, 1000);
  }
})();
"#;

pub fn generate_script(cfg: &ClockConfig) -> String {
    let time_zone = match validated_timezone(cfg) {
        // Safe to splice: the name came out of the IANA database, not the
        // raw config string.
        Some(tz) => format!("'{}'", tz),
        None => "null".to_string(),
    };
    // date_format is enum-checked; as_str() yields one of the known wire
    // strings, never raw config text.
    match cfg.clock_type {
        ClockType::Digital => DIGITAL_SCRIPT
            .replace("__HOUR12__", bool_js(cfg.time_format == TimeFormat::Hour12))
            .replace("__SHOW_SECONDS__", bool_js(cfg.show_seconds))
            .replace("__BLINK_COLON__", bool_js(cfg.blink_colon))
            .replace("__TIME_ZONE__", &time_zone)
            .replace("__DATE_FORMAT__", date_format_key(cfg.date_format))
            .replace("__SHOW_DATE__", bool_js(cfg.show_date)),
        _ => ANALOG_SCRIPT
            .replace("__SMOOTH__", bool_js(cfg.clock_type.uses_animation_frames()))
            .replace("__TIME_ZONE__", &time_zone)
            .replace("__DATE_FORMAT__", date_format_key(cfg.date_format))
            .replace("__SHOW_DATE__", bool_js(cfg.show_date)),
    }
}

fn bool_js(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

fn date_format_key(f: DateFormat) -> &'static str {
    f.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(cfg: ClockConfig) -> String {
        ClockExporter.render(&WidgetConfig::Clock(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = ClockConfig::default();
        let a = render(cfg.clone());
        let b = render(cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_is_escaped() {
        let mut cfg = ClockConfig::default();
        cfg.title = "<script>alert(1)</script>".to_string();
        let doc = render(cfg);
        assert!(doc.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!doc.contains("<h2 class=\"title\"><script>"));
    }

    #[test]
    fn test_invalid_timezone_falls_back_to_local() {
        let mut cfg = ClockConfig::default();
        cfg.timezone = "Mars/Olympus_Mons'); alert(1); //".to_string();
        let script = generate_script(&cfg);
        assert!(script.contains("var timeZone = null;"));
        assert!(!script.contains("Olympus"));
    }

    #[test]
    fn test_valid_timezone_is_spliced() {
        let mut cfg = ClockConfig::default();
        cfg.timezone = "Europe/London".to_string();
        let script = generate_script(&cfg);
        assert!(script.contains("var timeZone = 'Europe/London';"));
    }

    #[test]
    fn test_smooth_variant_uses_animation_frames() {
        let mut cfg = ClockConfig::default();
        cfg.clock_type = ClockType::AnalogSmooth;
        let script = generate_script(&cfg);
        assert!(script.contains("requestAnimationFrame"));
        assert!(script.contains("var smooth = true;"));
    }

    #[test]
    fn test_digital_ticks_every_second() {
        let script = generate_script(&ClockConfig::default());
        assert!(script.contains("setInterval(render, 1000)"));
        assert!(!script.contains("requestAnimationFrame"));
    }

    #[test]
    fn test_transparent_background_wins() {
        let mut cfg = ClockConfig::default();
        cfg.appearance.preset_theme = Some("cyberpunk".to_string());
        cfg.appearance.use_transparent_bg = true;
        let doc = render(cfg);
        assert!(doc.contains("background: transparent;"));
        assert!(!doc.contains("background: #0a0e27;"));
    }

    #[test]
    fn test_cyberpunk_preset_colors_in_output() {
        let mut cfg = ClockConfig::default();
        cfg.appearance.preset_theme = Some("cyberpunk".to_string());
        let doc = render(cfg);
        assert!(doc.contains("background: #0a0e27;"));
        assert!(doc.contains("color: #00ffff;"));
    }
}
