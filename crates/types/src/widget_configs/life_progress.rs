//! Life-progress widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::field::{FieldDescriptor, FieldType};
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

/// Life-progress widget configuration.
///
/// Five independently toggleable channels; every percentage the emitted
/// script computes is clamped to [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeProgressConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    /// Birth date in `yyyy-mm-dd` form; drives the lifetime channel
    #[serde(default = "default_birth_date")]
    pub birth_date: String,
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy_years: f64,
    #[serde(default = "default_true")]
    pub show_year: bool,
    #[serde(default = "default_true")]
    pub show_month: bool,
    #[serde(default = "default_true")]
    pub show_week: bool,
    #[serde(default = "default_true")]
    pub show_day: bool,
    #[serde(default)]
    pub show_lifetime: bool,
    #[serde(default = "default_true")]
    pub show_percent_labels: bool,
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,
}

fn default_birth_date() -> String {
    "1990-01-01".to_string()
}

fn default_life_expectancy() -> f64 {
    80.0
}

fn default_true() -> bool {
    true
}

fn default_bar_height() -> f64 {
    10.0
}

impl Default for LifeProgressConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            birth_date: default_birth_date(),
            life_expectancy_years: default_life_expectancy(),
            show_year: true,
            show_month: true,
            show_week: true,
            show_day: true,
            show_lifetime: false,
            show_percent_labels: true,
            bar_height: default_bar_height(),
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Progress";
    let mut fields = vec![
        FieldDescriptor::boolean("showYear", "Year progress", section),
        FieldDescriptor::boolean("showMonth", "Month progress", section),
        FieldDescriptor::boolean("showWeek", "Week progress", section),
        FieldDescriptor::boolean("showDay", "Day progress", section),
        FieldDescriptor::boolean("showLifetime", "Lifetime progress", section),
        FieldDescriptor::new("birthDate", "Birth date", FieldType::Date, section)
            .when("showLifetime", true),
        FieldDescriptor::range("lifeExpectancyYears", "Life expectancy (years)", section, 1.0, 120.0, 1.0)
            .when("showLifetime", true),
        FieldDescriptor::boolean("showPercentLabels", "Show percent labels", section),
        FieldDescriptor::range("barHeight", "Bar height", section, 4.0, 32.0, 1.0),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::LifeProgress,
        "Life progress",
        "Progress bars for the current year, month, week, day, and lifetime.",
        WidgetConfig::LifeProgress(LifeProgressConfig::default()),
        fields,
    )
}
