//! Life-progress widget exporter.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::life_progress::LifeProgressConfig;
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct LifeProgressExporter;

impl Exporter for LifeProgressExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::LifeProgress
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::LifeProgress(c) => c.clone(),
            _ => LifeProgressConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        HtmlDocument::new("Life progress")
            .stylesheet(sheet)
            .body(body)
            .script(generate_script(&cfg))
            .render()
    }
}

/// (channel id, label) pairs for the enabled bars, in fixed display order.
fn enabled_channels(cfg: &LifeProgressConfig) -> Vec<(&'static str, &'static str)> {
    let mut channels = Vec::new();
    if cfg.show_year {
        channels.push(("year", "Year"));
    }
    if cfg.show_month {
        channels.push(("month", "Month"));
    }
    if cfg.show_week {
        channels.push(("week", "Week"));
    }
    if cfg.show_day {
        channels.push(("day", "Day"));
    }
    if cfg.show_lifetime {
        channels.push(("lifetime", "Life"));
    }
    channels
}

pub fn generate_html(cfg: &LifeProgressConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let channels = enabled_channels(cfg);
    let bar_height = cfg.bar_height.clamp(4.0, 32.0);

    let mut body = String::from("<main class=\"widget\">\n");
    if channels.is_empty() {
        body.push_str("  <div class=\"placeholder\">No progress bars enabled.</div>\n");
    }
    for (id, label) in &channels {
        body.push_str(&format!(
            concat!(
                "  <div class=\"row\">\n",
                "    <div class=\"row-head\">\n",
                "      <span class=\"label\">{label}</span>\n",
                "      <span class=\"pct\" id=\"pct-{id}\"></span>\n",
                "    </div>\n",
                "    <div class=\"track\">\n",
                "      <div class=\"fill\" id=\"fill-{id}\"></div>\n",
                "    </div>\n",
                "  </div>\n",
            ),
            label = label,
            id = id,
        ));
    }
    body.push_str("</main>");

    let mut sheet = Stylesheet::new();
    sheet.rule(style.body_rule());
    sheet.rule(
        Rule::new(".widget")
            .prop("min-height", "100vh")
            .prop("display", "flex")
            .prop("flex-direction", "column")
            .prop("justify-content", "center")
            .prop("gap", "14px")
            .prop("padding", "24px")
            .prop("box-sizing", "border-box"),
    );
    sheet.rule(Rule::new(".placeholder").prop("font-size", "15px").prop("opacity", "0.7"));
    sheet.rule(
        Rule::new(".row-head")
            .prop("display", "flex")
            .prop("justify-content", "space-between")
            .prop("font-size", "13px")
            .prop("margin-bottom", "4px"),
    );
    sheet.rule(Rule::new(".label").prop("opacity", "0.8"));
    let pct_rule = Rule::new(".pct")
        .prop("font-variant-numeric", "tabular-nums")
        .prop("color", style.accent_color.to_css());
    if cfg.show_percent_labels {
        sheet.rule(pct_rule);
    } else {
        sheet.rule(pct_rule.prop("display", "none"));
    }
    sheet.rule(
        Rule::new(".track")
            .prop("height", format!("{}px", bar_height))
            .prop("border-radius", format!("{}px", bar_height / 2.0))
            .prop("background", "rgba(128, 128, 128, 0.25)")
            .prop("overflow", "hidden"),
    );
    sheet.rule(
        Rule::new(".fill")
            .prop("height", "100%")
            .prop("width", "0%")
            .prop("border-radius", "inherit")
            .prop("background", style.accent_color.to_css())
            .prop("transition", "width 0.6s ease")
            .prop_opt("box-shadow", style.glow.clone()),
    );
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

// Each channel is elapsed-over-span for its natural period: the year runs
// Jan 1 to Jan 1, the month over its true day count, the week Monday to
// Monday, the day midnight to midnight, and lifetime from the birth date
// over the configured expectancy. Bars re-render once a minute.
const SCRIPT: &str = r#"(function () {
  var birthDate = '__BIRTH_DATE__';
  var expectancyYears = __EXPECTANCY__;

  function clampPct(p) {
    return Math.min(100, Math.max(0, p));
  }

  function ratio(elapsed, span) {
    return span > 0 ? clampPct((elapsed / span) * 100) : 0;
  }

  function yearPct(now) {
    var start = new Date(now.getFullYear(), 0, 1);
    var end = new Date(now.getFullYear() + 1, 0, 1);
    return ratio(now - start, end - start);
  }

  function monthPct(now) {
    var start = new Date(now.getFullYear(), now.getMonth(), 1);
    var end = new Date(now.getFullYear(), now.getMonth() + 1, 1);
    return ratio(now - start, end - start);
  }

  function weekPct(now) {
    var day = (now.getDay() + 6) % 7; // Monday = 0
    var start = new Date(now.getFullYear(), now.getMonth(), now.getDate() - day);
    return ratio(now - start, 7 * 24 * 3600 * 1000);
  }

  function dayPct(now) {
    var start = new Date(now.getFullYear(), now.getMonth(), now.getDate());
    return ratio(now - start, 24 * 3600 * 1000);
  }

  function lifetimePct(now) {
    var birth = new Date(birthDate + 'T00:00');
    if (isNaN(birth.getTime())) return 0;
    var span = expectancyYears * 365.25 * 24 * 3600 * 1000;
    return ratio(now - birth, span);
  }

  var CHANNELS = {
    year: yearPct,
    month: monthPct,
    week: weekPct,
    day: dayPct,
    lifetime: lifetimePct
  };

  function update() {
    var now = new Date();
    for (var id in CHANNELS) {
      var fill = document.getElementById('fill-' + id);
      if (!fill) continue;
      var pct = CHANNELS[id](now);
      fill.style.width = pct + '%';
      var label = document.getElementById('pct-' + id);
      if (label) label.textContent = pct.toFixed(1) + '%';
    }
  }

  update();
  setInterval(update, 60000);
})();
"#;

pub fn generate_script(cfg: &LifeProgressConfig) -> String {
    let expectancy = if cfg.life_expectancy_years.is_finite() {
        cfg.life_expectancy_years.clamp(1.0, 120.0)
    } else {
        80.0
    };
    // Birth date is only spliced if it already parses as yyyy-mm-dd;
    // anything else falls back to the default so the literal stays inert.
    let birth = if chrono::NaiveDate::parse_from_str(&cfg.birth_date, "%Y-%m-%d").is_ok() {
        cfg.birth_date.clone()
    } else {
        log::debug!("unparseable birth date {:?}, using default", cfg.birth_date);
        "1990-01-01".to_string()
    };
    SCRIPT
        .replace("__BIRTH_DATE__", &birth)
        .replace("__EXPECTANCY__", &format!("{:.1}", expectancy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(cfg: LifeProgressConfig) -> String {
        LifeProgressExporter.render(&WidgetConfig::LifeProgress(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = LifeProgressConfig::default();
        assert_eq!(render(cfg.clone()), render(cfg));
    }

    #[test]
    fn test_default_channels_exclude_lifetime() {
        let doc = render(LifeProgressConfig::default());
        assert!(doc.contains("id=\"fill-year\""));
        assert!(doc.contains("id=\"fill-day\""));
        assert!(!doc.contains("id=\"fill-lifetime\""));
    }

    #[test]
    fn test_all_channels_disabled_yields_placeholder() {
        let mut cfg = LifeProgressConfig::default();
        cfg.show_year = false;
        cfg.show_month = false;
        cfg.show_week = false;
        cfg.show_day = false;
        let doc = render(cfg);
        assert!(doc.contains("No progress bars enabled."));
        assert!(!doc.contains("class=\"track\""));
    }

    #[test]
    fn test_malicious_birth_date_not_spliced() {
        let mut cfg = LifeProgressConfig::default();
        cfg.show_lifetime = true;
        cfg.birth_date = "'; alert(1); //".to_string();
        let script = generate_script(&cfg);
        assert!(!script.contains("alert(1)"));
        assert!(script.contains("var birthDate = '1990-01-01';"));
    }

    #[test]
    fn test_script_clamps_percentages() {
        let script = generate_script(&LifeProgressConfig::default());
        assert!(script.contains("Math.min(100, Math.max(0, p))"));
        assert!(script.contains("setInterval(update, 60000);"));
    }

    #[test]
    fn test_expectancy_is_clamped_literal() {
        let mut cfg = LifeProgressConfig::default();
        cfg.life_expectancy_years = 9000.0;
        let script = generate_script(&cfg);
        assert!(script.contains("var expectancyYears = 120.0;"));
    }
}
