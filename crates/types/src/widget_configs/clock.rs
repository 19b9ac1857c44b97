//! Clock widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::config_enum;
use crate::field::{FieldDescriptor, SelectOption};
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

config_enum! {
    /// Clock face variant. The smooth and trail variants re-render on
    /// animation frames instead of 1-second ticks, for a continuous sweep.
    ClockType {
        Digital => "digital",
        Analog => "analog",
        AnalogSmooth => "smooth",
        AnalogTrail => "trail",
    }
    default: Digital
}

impl ClockType {
    /// Whether this variant needs per-frame updates rather than 1 s ticks
    pub fn uses_animation_frames(&self) -> bool {
        matches!(self, ClockType::AnalogSmooth | ClockType::AnalogTrail)
    }
}

config_enum! {
    /// Time format
    TimeFormat {
        Hour24 => "24h",
        Hour12 => "12h",
    }
    default: Hour24
}

config_enum! {
    /// Date line format
    DateFormat {
        YearMonthDay => "yyyy-mm-dd",
        DayMonthYear => "dd/mm/yyyy",
        MonthDayYear => "mm/dd/yyyy",
        Long => "long",
    }
    default: Long
}

/// Clock widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub clock_type: ClockType,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default)]
    pub date_format: DateFormat,
    #[serde(default = "default_true")]
    pub show_seconds: bool,
    #[serde(default = "default_true")]
    pub show_date: bool,
    #[serde(default = "default_true")]
    pub blink_colon: bool,
    /// IANA timezone ID (e.g. "Europe/London") or "Local"
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Optional caption above the clock
    #[serde(default)]
    pub title: String,
}

fn default_true() -> bool {
    true
}

fn default_timezone() -> String {
    "Local".to_string()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            clock_type: ClockType::Digital,
            time_format: TimeFormat::Hour24,
            date_format: DateFormat::Long,
            show_seconds: true,
            show_date: true,
            blink_colon: true,
            timezone: default_timezone(),
            title: String::new(),
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Clock";
    let mut fields = vec![
        FieldDescriptor::text("title", "Title", section),
        FieldDescriptor::select(
            "clockType",
            "Clock style",
            section,
            vec![
                SelectOption::new("digital", "Digital"),
                SelectOption::new("analog", "Analog"),
                SelectOption::new("smooth", "Analog (smooth sweep)"),
                SelectOption::new("trail", "Analog (trail)"),
            ],
        ),
        FieldDescriptor::select(
            "timeFormat",
            "Time format",
            section,
            vec![
                SelectOption::new("24h", "24-hour"),
                SelectOption::new("12h", "12-hour"),
            ],
        ),
        FieldDescriptor::boolean("showSeconds", "Show seconds", section),
        FieldDescriptor::boolean("blinkColon", "Blinking colon", section).when("clockType", "digital"),
        FieldDescriptor::boolean("showDate", "Show date", section),
        FieldDescriptor::select(
            "dateFormat",
            "Date format",
            section,
            vec![
                SelectOption::new("long", "Weekday, Month DD, YYYY"),
                SelectOption::new("yyyy-mm-dd", "YYYY-MM-DD"),
                SelectOption::new("dd/mm/yyyy", "DD/MM/YYYY"),
                SelectOption::new("mm/dd/yyyy", "MM/DD/YYYY"),
            ],
        )
        .when("showDate", true),
        FieldDescriptor::text("timezone", "Timezone", section),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::Clock,
        "Clock",
        "A live digital or analog clock, optionally pinned to a timezone.",
        WidgetConfig::Clock(ClockConfig::default()),
        fields,
    )
}
