//! Weather widget exporter.
//!
//! The exporter itself never touches the network; the emitted script
//! fetches the forecast from the Open-Meteo endpoint at view time.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::weather::{Units, WeatherConfig};
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::css::{Rule, Stylesheet};
use crate::document::HtmlDocument;
use crate::escape;
use crate::exporter::Exporter;
use crate::resolve::{resolve, ResolvedStyle};

pub struct WeatherExporter;

impl Exporter for WeatherExporter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Weather
    }

    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String {
        let cfg = match config {
            WidgetConfig::Weather(c) => c.clone(),
            _ => WeatherConfig::default(),
        };
        let style = resolve(&cfg.appearance, theme);
        let (body, sheet) = generate_html(&cfg, &style);
        HtmlDocument::new(&format!("Weather - {}", cfg.location))
            .stylesheet(sheet)
            .body(body)
            .script(generate_script(&cfg))
            .render()
    }
}

/// Clamp coordinates to their legal ranges so the spliced numeric literals
/// are always valid, whatever the config held.
fn clamped_coords(cfg: &WeatherConfig) -> (f64, f64) {
    let lat = if cfg.latitude.is_finite() { cfg.latitude.clamp(-90.0, 90.0) } else { 0.0 };
    let lon = if cfg.longitude.is_finite() { cfg.longitude.clamp(-180.0, 180.0) } else { 0.0 };
    (lat, lon)
}

pub fn generate_html(cfg: &WeatherConfig, style: &ResolvedStyle) -> (String, Stylesheet) {
    let mut body = String::from("<main class=\"widget\">\n");
    body.push_str(&format!(
        "  <h2 class=\"location\">{}</h2>\n",
        escape::html(&cfg.location)
    ));
    body.push_str(concat!(
        "  <div class=\"now\">\n",
        "    <span class=\"icon\" id=\"icon\"></span>\n",
        "    <span class=\"temp accent\" id=\"temp\">--&deg;</span>\n",
        "  </div>\n",
        "  <div class=\"summary\" id=\"summary\">Loading&hellip;</div>\n",
    ));
    if cfg.show_forecast {
        body.push_str("  <div class=\"forecast\" id=\"forecast\"></div>\n");
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
            .prop("gap", "10px"),
    );
    sheet.rule(
        Rule::new(".location")
            .prop("margin", "0")
            .prop("font-size", "20px")
            .prop("font-weight", "600"),
    );
    sheet.rule(
        Rule::new(".now")
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("gap", "12px"),
    );
    sheet.rule(Rule::new(".icon").prop("font-size", "48px"));
    let temp_rule = Rule::new(".temp")
        .prop("font-size", "56px")
        .prop("font-weight", "700")
        .prop("color", style.accent_color.to_css());
    sheet.rule(style.apply_text_effects(temp_rule));
    sheet.rule(Rule::new(".summary").prop("font-size", "15px").prop("opacity", "0.8"));
    if cfg.show_forecast {
        sheet.rule(
            Rule::new(".forecast")
                .prop("display", "flex")
                .prop("gap", "16px")
                .prop("margin-top", "8px"),
        );
        sheet.rule(
            Rule::new(".day")
                .prop("display", "flex")
                .prop("flex-direction", "column")
                .prop("align-items", "center")
                .prop("gap", "2px")
                .prop("font-size", "13px"),
        );
    }
    sheet.media("(prefers-color-scheme: dark)", style.system_dark_rules());
    (body, sheet)
}

const SCRIPT: &str = r#"(function () {
  var latitude = __LAT__;
  var longitude = __LON__;
  var fahrenheit = __FAHRENHEIT__;
  var forecastDays = __FORECAST_DAYS__;
  var refreshMs = __REFRESH_MS__;

  var ICONS = {
    0: '☀️', 1: '🌤️', 2: '⛅', 3: '☁️',
    45: '🌫️', 48: '🌫️',
    51: '🌦️', 53: '🌦️', 55: '🌧️',
    61: '🌧️', 63: '🌧️', 65: '🌧️',
    71: '🌨️', 73: '🌨️', 75: '❄️',
    80: '🌦️', 81: '🌧️', 82: '⛈️',
    95: '⛈️', 96: '⛈️', 99: '⛈️'
  };
  var NAMES = {
    0: 'Clear', 1: 'Mostly clear', 2: 'Partly cloudy', 3: 'Overcast',
    45: 'Fog', 48: 'Rime fog', 51: 'Light drizzle', 53: 'Drizzle',
    55: 'Heavy drizzle', 61: 'Light rain', 63: 'Rain', 65: 'Heavy rain',
    71: 'Light snow', 73: 'Snow', 75: 'Heavy snow', 80: 'Showers',
    81: 'Rain showers', 82: 'Violent showers', 95: 'Thunderstorm',
    96: 'Thunderstorm', 99: 'Thunderstorm'
  };

  function endpoint() {
    var url = 'https://api.open-meteo.com/v1/forecast?latitude=' + latitude +
      '&longitude=' + longitude +
      '&current_weather=true&daily=weathercode,temperature_2m_max,temperature_2m_min&timezone=auto';
    if (fahrenheit) url += '&temperature_unit=fahrenheit';
    if (forecastDays > 0) url += '&forecast_days=' + Math.min(forecastDays + 1, 8);
    return url;
  }

  function dayName(iso) {
    return new Date(iso + 'T12:00').toLocaleDateString('en-US', { weekday: 'short' });
  }

  function renderForecast(daily) {
    var el = document.getElementById('forecast');
    if (!el || !daily) return;
    el.textContent = '';
    var count = Math.min(forecastDays, daily.time.length - 1);
    for (var i = 1; i <= count; i++) {
      var day = document.createElement('div');
      day.className = 'day';
      var name = document.createElement('span');
      name.textContent = dayName(daily.time[i]);
      var icon = document.createElement('span');
      icon.textContent = ICONS[daily.weathercode[i]] || '☀️';
      var range = document.createElement('span');
      range.textContent = Math.round(daily.temperature_2m_min[i]) + '° / ' +
        Math.round(daily.temperature_2m_max[i]) + '°';
      day.appendChild(name);
      day.appendChild(icon);
      day.appendChild(range);
      el.appendChild(day);
    }
  }

  function refresh() {
    fetch(endpoint())
      .then(function (r) { return r.json(); })
      .then(function (data) {
        var current = data.current_weather;
        document.getElementById('temp').textContent = Math.round(current.temperature) + '°';
        document.getElementById('icon').textContent = ICONS[current.weathercode] || '☀️';
        document.getElementById('summary').textContent = NAMES[current.weathercode] || 'Unknown';
        renderForecast(data.daily);
      })
      .catch(function () {
        document.getElementById('summary').textContent = 'Weather unavailable';
      });
  }

  refresh();
  setInterval(refresh, refreshMs);
})();
"#;

pub fn generate_script(cfg: &WeatherConfig) -> String {
    let (lat, lon) = clamped_coords(cfg);
    let forecast_days = if cfg.show_forecast {
        cfg.forecast_days.clamp(1, 7)
    } else {
        0
    };
    let refresh_ms = cfg.update_interval_minutes.clamp(5, 1440) * 60_000;
    SCRIPT
        .replace("__LAT__", &format!("{:.4}", lat))
        .replace("__LON__", &format!("{:.4}", lon))
        .replace("__FAHRENHEIT__", if cfg.units == Units::Fahrenheit { "true" } else { "false" })
        .replace("__FORECAST_DAYS__", &forecast_days.to_string())
        .replace("__REFRESH_MS__", &refresh_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(cfg: WeatherConfig) -> String {
        WeatherExporter.render(&WidgetConfig::Weather(cfg), &ThemeTokens::jazer_neon())
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = WeatherConfig::default();
        assert_eq!(render(cfg.clone()), render(cfg));
    }

    #[test]
    fn test_location_is_escaped() {
        let mut cfg = WeatherConfig::default();
        cfg.location = "<img src=x onerror=alert(1)>".to_string();
        let doc = render(cfg);
        assert!(!doc.contains("<img src=x"));
        assert!(doc.contains("&lt;img src=x"));
    }

    #[test]
    fn test_coordinates_are_clamped_literals() {
        let mut cfg = WeatherConfig::default();
        cfg.latitude = 950.0;
        cfg.longitude = f64::NAN;
        let script = generate_script(&cfg);
        assert!(script.contains("var latitude = 90.0000;"));
        assert!(script.contains("var longitude = 0.0000;"));
    }

    #[test]
    fn test_fahrenheit_flag() {
        let mut cfg = WeatherConfig::default();
        cfg.units = Units::Fahrenheit;
        let script = generate_script(&cfg);
        assert!(script.contains("var fahrenheit = true;"));
    }

    #[test]
    fn test_exporter_emits_fetch_but_never_performs_it() {
        let doc = render(WeatherConfig::default());
        // The endpoint URL is literal source text inside the script block
        assert!(doc.contains("api.open-meteo.com"));
        assert!(doc.contains("<script>"));
    }
}
