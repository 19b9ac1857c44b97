//! Weather widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::config_enum;
use crate::field::{FieldDescriptor, SelectOption};
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

config_enum! {
    /// Temperature units
    Units {
        Celsius => "celsius",
        Fahrenheit => "fahrenheit",
    }
    default: Celsius
}

/// Weather widget configuration.
///
/// The exporter performs no network I/O; the emitted script fetches the
/// forecast at view time from the coordinates configured here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    /// Display name for the location line
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub units: Units,
    #[serde(default = "default_true")]
    pub show_forecast: bool,
    /// Forecast days after today (1-7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
    /// Minutes between refreshes in the rendered document
    #[serde(default = "default_update_minutes")]
    pub update_interval_minutes: u64,
}

fn default_location() -> String {
    "Berlin".to_string()
}

fn default_latitude() -> f64 {
    52.52
}

fn default_longitude() -> f64 {
    13.405
}

fn default_true() -> bool {
    true
}

fn default_forecast_days() -> u8 {
    3
}

fn default_update_minutes() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            location: default_location(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            units: Units::Celsius,
            show_forecast: true,
            forecast_days: default_forecast_days(),
            update_interval_minutes: default_update_minutes(),
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Weather";
    let mut fields = vec![
        FieldDescriptor::text("location", "Location name", section),
        FieldDescriptor::range("latitude", "Latitude", section, -90.0, 90.0, 0.0001),
        FieldDescriptor::range("longitude", "Longitude", section, -180.0, 180.0, 0.0001),
        FieldDescriptor::select(
            "units",
            "Units",
            section,
            vec![
                SelectOption::new("celsius", "Celsius"),
                SelectOption::new("fahrenheit", "Fahrenheit"),
            ],
        ),
        FieldDescriptor::boolean("showForecast", "Show daily forecast", section),
        FieldDescriptor::range("forecastDays", "Forecast days", section, 1.0, 7.0, 1.0)
            .when("showForecast", true),
        FieldDescriptor::range(
            "updateIntervalMinutes",
            "Refresh every (minutes)",
            section,
            5.0,
            240.0,
            5.0,
        ),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::Weather,
        "Weather",
        "Current conditions and a short forecast for a fixed location.",
        WidgetConfig::Weather(WeatherConfig::default()),
        fields,
    )
}
