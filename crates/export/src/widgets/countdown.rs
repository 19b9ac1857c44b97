//! Countdown widget exporter.

use chrono::NaiveDateTime;

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::countdown::CountdownConfig;
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::escape;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct CountdownExporter;

impl Exporter for CountdownExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Countdown
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::Countdown(c) => c.clone(),
            _ => CountdownConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        HtmlDocument::new(&cfg.event_title)
            .comment(&describe(&cfg))
            .stylesheet(sheet)
            .body(body)
            .script(generate_script(&cfg))
            .render()
    }
}

/// Descriptive form of the arithmetic the script performs; the script uses
/// identical constants and floor-based decomposition.
fn describe(cfg: &CountdownConfig) -> String {
    let mut text = String::from(
        "countdown: floor-based decomposition, 1 year = 365.25 days, 1 month = 30.44 days, \
         1 week = 7 days; tick every 1s",
    );
    if cfg.show_progress_bar {
        text.push_str("; progress % = clamp((now - start) / (target - start) * 100, 0, 100)");
    }
    text
}

/// Validate a `datetime-local` string ("2027-01-01T00:00"); invalid input
/// falls back to the schema default so the document stays well-formed.
fn validated_datetime(raw: &str, fallback: &str) -> String {
    let candidate = if raw.is_empty() { fallback } else { raw };
    for value in [candidate, fallback] {
        if NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok()
            || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        {
            return value.to_string();
        }
    }
    // Fallback itself is a compile-time constant and always parses; this
    // arm only guards against misuse.
    fallback.to_string()
}

/// Enabled unit names, largest first, as the wire strings the script keys on
fn enabled_units(cfg: &CountdownConfig) -> Vec<&'static str> {
    let toggles = [
        (cfg.show_years, "years"),
        (cfg.show_months, "months"),
        (cfg.show_weeks, "weeks"),
        (cfg.show_days, "days"),
        (cfg.show_hours, "hours"),
        (cfg.show_minutes, "minutes"),
        (cfg.show_seconds, "seconds"),
    ];
    let units: Vec<&'static str> = toggles
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect();
    if units.is_empty() {
        // All units disabled still has to show something
        vec!["seconds"]
    } else {
        units
    }
}

fn unit_label(unit: &str) -> &'static str {
    match unit {
        "years" => "Years",
        "months" => "Months",
        "weeks" => "Weeks",
        "days" => "Days",
        "hours" => "Hours",
        "minutes" => "Minutes",
        _ => "Seconds",
    }
}

pub fn generate_html(cfg: &CountdownConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let mut body = String::from("<main class=\"widget\">\n");
    body.push_str(&format!(
        "  <h2 class=\"title\">{} <span id=\"ago\" class=\"ago\">ago</span></h2>\n",
        escape::html(&cfg.event_title)
    ));
    body.push_str("  <div class=\"grid\" id=\"grid\">\n");
    for unit in enabled_units(cfg) {
        body.push_str(&format!(
            "    <div class=\"cell\"><div class=\"value accent\" id=\"unit-{unit}\">--</div><div class=\"label\">{label}</div></div>\n",
            unit = unit,
            label = unit_label(unit),
        ));
    }
    body.push_str("  </div>\n");
    if cfg.show_progress_bar {
        body.push_str(concat!(
            "  <div class=\"bar\"><div class=\"bar-fill\" id=\"bar-fill\"></div></div>\n",
            "  <div class=\"bar-label\" id=\"bar-label\"></div>\n",
        ));
    }
    body.push_str(&format!(
        "  <div class=\"done\" id=\"done\">{}</div>\n",
        escape::html(&cfg.completion_message)
    ));
    if cfg.show_confetti {
        body.push_str("  <canvas id=\"confetti\"></canvas>\n");
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
            .prop("gap", "12px"),
    );
    sheet.rule(
        Rule::new(".title")
            .prop("margin", "0")
            .prop("font-size", "22px")
            .prop("font-weight", "600"),
    );
    sheet.rule(Rule::new(".ago").prop("display", "none").prop("opacity", "0.7"));
    sheet.rule(Rule::new(".grid").prop("display", "flex").prop("gap", "18px"));
    sheet.rule(
        Rule::new(".cell")
            .prop("display", "flex")
            .prop("flex-direction", "column")
            .prop("align-items", "center")
            .prop("min-width", "64px"),
    );
    let value_rule = Rule::new(".value")
        .prop("font-size", "44px")
        .prop("font-weight", "700")
        .prop("font-variant-numeric", "tabular-nums")
        .prop("color", style.accent_color.to_css());
    sheet.rule(style.apply_text_effects(value_rule));
    sheet.rule(
        Rule::new(".label")
            .prop("font-size", "12px")
            .prop("text-transform", "uppercase")
            .prop("letter-spacing", "0.1em")
            .prop("opacity", "0.7"),
    );
    if cfg.show_progress_bar {
        sheet.rule(
            Rule::new(".bar")
                .prop("width", "70%")
                .prop("max-width", "420px")
                .prop("height", "8px")
                .prop("border-radius", "4px")
                .prop("background", "rgba(128, 128, 128, 0.25)")
                .prop("overflow", "hidden"),
        );
        sheet.rule(
            Rule::new(".bar-fill")
                .prop("height", "100%")
                .prop("width", "0%")
                .prop("background", style.accent_color.to_css())
                .prop("transition", "width 0.5s ease"),
        );
        sheet.rule(Rule::new(".bar-label").prop("font-size", "13px").prop("opacity", "0.7"));
    }
    sheet.rule(Rule::new(".done").prop("display", "none").prop("font-size", "32px").prop("font-weight", "700"));
    if cfg.show_confetti {
        sheet.rule(
            Rule::new("#confetti")
                .prop("position", "fixed")
                .prop("inset", "0")
                .prop("width", "100%")
                .prop("height", "100%")
                .prop("pointer-events", "none"),
        );
    }
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

const SCRIPT: &str = r#"(function () {
  var target = new Date('__TARGET__').getTime();
  var stopAtZero = __STOP_AT_ZERO__;
  var showConfetti = __SHOW_CONFETTI__;
  var confettiMs = __CONFETTI_MS__;
  var units = __UNITS__;
  var progressStart = __PROGRESS_START__;

  var MS_SECOND = 1000;
  var MS_MINUTE = 60 * MS_SECOND;
  var MS_HOUR = 60 * MS_MINUTE;
  var MS_DAY = 24 * MS_HOUR;
  var MS_WEEK = 7 * MS_DAY;
  var MS_MONTH = 30.44 * MS_DAY;
  var MS_YEAR = 365.25 * MS_DAY;
  var SIZES = {
    years: MS_YEAR, months: MS_MONTH, weeks: MS_WEEK, days: MS_DAY,
    hours: MS_HOUR, minutes: MS_MINUTE, seconds: MS_SECOND
  };

  var gridEl = document.getElementById('grid');
  var doneEl = document.getElementById('done');
  var agoEl = document.getElementById('ago');
  var finished = false;
  var timer = null;

  function decompose(ms) {
    var rest = ms;
    var out = {};
    for (var i = 0; i < units.length; i++) {
      var u = units[i];
      out[u] = Math.floor(rest / SIZES[u]);
      rest -= out[u] * SIZES[u];
    }
    return out;
  }

  function renderParts(parts) {
    for (var u in parts) {
      var el = document.getElementById('unit-' + u);
      if (el) el.textContent = parts[u];
    }
  }

  function renderProgress(now) {
    if (progressStart === null) return;
    var pct = (now - progressStart) / (target - progressStart) * 100;
    pct = Math.min(100, Math.max(0, pct));
    document.getElementById('bar-fill').style.width = pct + '%';
    var label = document.getElementById('bar-label');
    if (label) label.textContent = Math.floor(pct) + '%';
  }

  function finish() {
    finished = true;
    gridEl.style.display = 'none';
    agoEl.style.display = 'none';
    doneEl.style.display = 'block';
    renderProgress(Date.now());
    if (showConfetti && confettiMs > 0) startConfetti();
    if (timer !== null) clearInterval(timer);
  }

  function tick() {
    var now = Date.now();
    var diff = target - now;
    if (diff <= 0 && stopAtZero) {
      if (!finished) finish();
      return;
    }
    if (diff <= 0) {
      agoEl.style.display = 'inline';
      diff = -diff;
    } else {
      agoEl.style.display = 'none';
    }
    renderParts(decompose(diff));
    renderProgress(now);
  }

  var confettiRunning = false;
  function startConfetti() {
    var canvas = document.getElementById('confetti');
    if (!canvas || confettiRunning) return;
    confettiRunning = true;
    var ctx = canvas.getContext('2d');
    canvas.width = window.innerWidth;
    canvas.height = window.innerHeight;
    var colors = ['#a855f7', '#ec4899', '#22d3ee', '#facc15'];
    var pieces = [];
    for (var i = 0; i < 120; i++) {
      pieces.push({
        x: Math.random() * canvas.width,
        y: -Math.random() * canvas.height,
        size: 4 + Math.random() * 6,
        speed: 1.5 + Math.random() * 3,
        drift: Math.random() * 2 - 1,
        spin: Math.random() * Math.PI,
        color: colors[Math.floor(Math.random() * colors.length)]
      });
    }
    function frame() {
      if (!confettiRunning) {
        ctx.clearRect(0, 0, canvas.width, canvas.height);
        return;
      }
      ctx.clearRect(0, 0, canvas.width, canvas.height);
      for (var i = 0; i < pieces.length; i++) {
        var p = pieces[i];
        p.y += p.speed;
        p.x += p.drift;
        p.spin += 0.05;
        if (p.y > canvas.height) {
          p.y = -10;
          p.x = Math.random() * canvas.width;
        }
        ctx.save();
        ctx.translate(p.x, p.y);
        ctx.rotate(p.spin);
        ctx.fillStyle = p.color;
        ctx.fillRect(-p.size / 2, -p.size / 2, p.size, p.size);
        ctx.restore();
      }
      requestAnimationFrame(frame);
    }
    frame();
    if (confettiMs !== Infinity) {
      setTimeout(function () { confettiRunning = false; }, confettiMs);
    }
  }

  tick();
  timer = setInterval(tick, 1000);
})();
"#;

pub fn generate_script(cfg: &CountdownConfig) -> String {
    let target = validated_datetime(&cfg.target_date, "2027-01-01T00:00");
    let units_literal = format!(
        "[{}]",
        enabled_units(cfg)
            .iter()
            .map(|u| format!("'{}'", u))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let progress_start = if cfg.show_progress_bar && !cfg.progress_start_date.is_empty() {
        let start = validated_datetime(&cfg.progress_start_date, "2026-01-01T00:00");
        format!("new Date('{}').getTime()", start)
    } else {
        "null".to_string()
    };
    let confetti_ms = if cfg.show_confetti {
        cfg.confetti_duration.as_js_literal()
    } else {
        "0".to_string()
    };
    SCRIPT
        .replace("__TARGET__", &target)
        .replace("__STOP_AT_ZERO__", if cfg.stop_at_zero { "true" } else { "false" })
        .replace("__SHOW_CONFETTI__", if cfg.show_confetti { "true" } else { "false" })
        .replace("__CONFETTI_MS__", &confetti_ms)
        .replace("__UNITS__", &units_literal)
        .replace("__PROGRESS_START__", &progress_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedkit_types::widget_configs::countdown::ConfettiDuration;

    fn render(cfg: CountdownConfig) -> String {
        CountdownExporter.render(&WidgetConfig::Countdown(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = CountdownConfig::default();
        assert_eq!(render(cfg.clone()), render(cfg));
    }

    #[test]
    fn test_event_title_is_escaped() {
        let mut cfg = CountdownConfig::default();
        cfg.event_title = "<script>alert(1)</script>".to_string();
        let doc = render(cfg);
        assert!(doc.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!doc.contains("<h2 class=\"title\"><script>alert(1)</script>"));
    }

    #[test]
    fn test_past_target_with_stop_at_zero_reaches_finished_branch() {
        let mut cfg = CountdownConfig::default();
        cfg.target_date = "2020-01-01T00:00".to_string();
        cfg.stop_at_zero = true;
        let script = generate_script(&cfg);
        // First tick takes the diff <= 0, stopAtZero path into finish()
        assert!(script.contains("var target = new Date('2020-01-01T00:00').getTime();"));
        assert!(script.contains("if (diff <= 0 && stopAtZero)"));
        assert!(script.contains("if (!finished) finish();"));
    }

    #[test]
    fn test_invalid_target_falls_back_to_default() {
        let mut cfg = CountdownConfig::default();
        cfg.target_date = "soon'); alert(1); //".to_string();
        let script = generate_script(&cfg);
        assert!(script.contains("new Date('2027-01-01T00:00')"));
        assert!(!script.contains("alert(1)"));
    }

    #[test]
    fn test_approximate_constants_preserved() {
        let script = generate_script(&CountdownConfig::default());
        assert!(script.contains("30.44 * MS_DAY"));
        assert!(script.contains("365.25 * MS_DAY"));
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut cfg = CountdownConfig::default();
        cfg.show_progress_bar = true;
        cfg.progress_start_date = "2026-01-01T00:00".to_string();
        let script = generate_script(&cfg);
        assert!(script.contains("Math.min(100, Math.max(0, pct))"));
    }

    #[test]
    fn test_confetti_duration_literals() {
        let mut cfg = CountdownConfig::default();
        cfg.show_confetti = true;
        cfg.confetti_duration = ConfettiDuration::Forever;
        let script = generate_script(&cfg);
        assert!(script.contains("var confettiMs = Infinity;"));
        assert!(script.contains("confettiMs !== Infinity"));

        cfg.confetti_duration = ConfettiDuration::FiveMinutes;
        assert!(generate_script(&cfg).contains("var confettiMs = 300000;"));
    }

    #[test]
    fn test_unit_toggles_control_grid() {
        let mut cfg = CountdownConfig::default();
        cfg.show_years = true;
        cfg.show_seconds = false;
        let style = resolve(&cfg.appearance, &ThemeTokens::jazer_neon());
        let (body, _) = generate_html(&cfg, &style);
        assert!(body.contains("unit-years"));
        assert!(!body.contains("unit-seconds"));
    }

    #[test]
    fn test_all_units_disabled_keeps_seconds() {
        let mut cfg = CountdownConfig::default();
        cfg.show_days = false;
        cfg.show_hours = false;
        cfg.show_minutes = false;
        cfg.show_seconds = false;
        assert_eq!(enabled_units(&cfg), vec!["seconds"]);
    }
}
