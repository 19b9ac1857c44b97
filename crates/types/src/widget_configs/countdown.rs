//! Countdown widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::config_enum;
use crate::field::{FieldDescriptor, FieldType, SelectOption};
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

config_enum! {
    /// How long the completion confetti stays active
    ConfettiDuration {
        Never => "never",
        OneMinute => "1min",
        FiveMinutes => "5min",
        TenMinutes => "10min",
        OneHour => "1hour",
        Forever => "forever",
    }
    default: Never
}

impl ConfettiDuration {
    /// Duration in milliseconds; `None` means forever.
    pub fn millis(&self) -> Option<u64> {
        match self {
            ConfettiDuration::Never => Some(0),
            ConfettiDuration::OneMinute => Some(60_000),
            ConfettiDuration::FiveMinutes => Some(300_000),
            ConfettiDuration::TenMinutes => Some(600_000),
            ConfettiDuration::OneHour => Some(3_600_000),
            ConfettiDuration::Forever => None,
        }
    }

    /// JavaScript literal for the emitted script (`Infinity` for forever)
    pub fn as_js_literal(&self) -> String {
        match self.millis() {
            Some(ms) => ms.to_string(),
            None => "Infinity".to_string(),
        }
    }
}

/// Countdown widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    #[serde(default = "default_event_title")]
    pub event_title: String,
    /// Target moment in `datetime-local` form ("2026-12-31T23:59")
    #[serde(default = "default_target_date")]
    pub target_date: String,
    /// Stop at zero and show the completion message; when false, keep
    /// counting past zero with an "ago" flag.
    #[serde(default = "default_true")]
    pub stop_at_zero: bool,
    #[serde(default = "default_completion_message")]
    pub completion_message: String,
    #[serde(default)]
    pub show_confetti: bool,
    #[serde(default)]
    pub confetti_duration: ConfettiDuration,
    #[serde(default)]
    pub show_years: bool,
    #[serde(default)]
    pub show_months: bool,
    #[serde(default)]
    pub show_weeks: bool,
    #[serde(default = "default_true")]
    pub show_days: bool,
    #[serde(default = "default_true")]
    pub show_hours: bool,
    #[serde(default = "default_true")]
    pub show_minutes: bool,
    #[serde(default = "default_true")]
    pub show_seconds: bool,
    /// Progress bar from `progressStartDate` to the target
    #[serde(default)]
    pub show_progress_bar: bool,
    /// Start moment for the progress bar, `datetime-local` form
    #[serde(default)]
    pub progress_start_date: String,
}

fn default_true() -> bool {
    true
}

fn default_event_title() -> String {
    "Countdown".to_string()
}

fn default_target_date() -> String {
    "2027-01-01T00:00".to_string()
}

fn default_completion_message() -> String {
    "It's time!".to_string()
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            event_title: default_event_title(),
            target_date: default_target_date(),
            stop_at_zero: true,
            completion_message: default_completion_message(),
            show_confetti: false,
            confetti_duration: ConfettiDuration::Never,
            show_years: false,
            show_months: false,
            show_weeks: false,
            show_days: true,
            show_hours: true,
            show_minutes: true,
            show_seconds: true,
            show_progress_bar: false,
            progress_start_date: String::new(),
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Countdown";
    let completion = "Completion";
    let mut fields = vec![
        FieldDescriptor::text("eventTitle", "Event title", section),
        FieldDescriptor::new("targetDate", "Target date", FieldType::DatetimeLocal, section),
        FieldDescriptor::boolean("showYears", "Show years", section),
        FieldDescriptor::boolean("showMonths", "Show months", section),
        FieldDescriptor::boolean("showWeeks", "Show weeks", section),
        FieldDescriptor::boolean("showDays", "Show days", section),
        FieldDescriptor::boolean("showHours", "Show hours", section),
        FieldDescriptor::boolean("showMinutes", "Show minutes", section),
        FieldDescriptor::boolean("showSeconds", "Show seconds", section),
        FieldDescriptor::boolean("showProgressBar", "Show progress bar", section),
        FieldDescriptor::new(
            "progressStartDate",
            "Progress starts from",
            FieldType::DatetimeLocal,
            section,
        )
        .when("showProgressBar", true),
        FieldDescriptor::boolean("stopAtZero", "Stop at zero", completion),
        FieldDescriptor::text("completionMessage", "Completion message", completion)
            .when("stopAtZero", true),
        FieldDescriptor::boolean("showConfetti", "Confetti on finish", completion)
            .when("stopAtZero", true),
        FieldDescriptor::select(
            "confettiDuration",
            "Confetti duration",
            completion,
            vec![
                SelectOption::new("never", "Never"),
                SelectOption::new("1min", "1 minute"),
                SelectOption::new("5min", "5 minutes"),
                SelectOption::new("10min", "10 minutes"),
                SelectOption::new("1hour", "1 hour"),
                SelectOption::new("forever", "Forever"),
            ],
        )
        .when("showConfetti", true),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::Countdown,
        "Countdown",
        "Counts down to a target moment, with optional confetti at zero.",
        WidgetConfig::Countdown(CountdownConfig::default()),
        fields,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_duration_millis() {
        assert_eq!(ConfettiDuration::Never.millis(), Some(0));
        assert_eq!(ConfettiDuration::FiveMinutes.millis(), Some(300_000));
        assert_eq!(ConfettiDuration::OneHour.millis(), Some(3_600_000));
        assert_eq!(ConfettiDuration::Forever.millis(), None);
        assert_eq!(ConfettiDuration::Forever.as_js_literal(), "Infinity");
    }

    #[test]
    fn test_unknown_duration_falls_back_to_never() {
        let d: ConfettiDuration = serde_json::from_str("\"2weeks\"").unwrap();
        assert_eq!(d, ConfettiDuration::Never);
    }
}
