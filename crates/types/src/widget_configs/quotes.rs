//! Quotes widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::config_enum;
use crate::field::{FieldDescriptor, SelectOption};
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

config_enum! {
    /// When the displayed quote changes
    RotationMode {
        Daily => "daily",
        Hourly => "hourly",
        Interval => "interval",
        Random => "random",
    }
    default: Daily
}

/// One quote entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Quotes widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotesConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    #[serde(default = "default_quotes")]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub rotation: RotationMode,
    /// Seconds per quote when rotation is "interval"
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    #[serde(default = "default_true")]
    pub show_author: bool,
    #[serde(default = "default_true")]
    pub show_quote_marks: bool,
}

fn default_quotes() -> Vec<Quote> {
    vec![Quote::new(
        "The best way to predict the future is to invent it.",
        "Alan Kay",
    )]
}

fn default_interval() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            quotes: default_quotes(),
            rotation: RotationMode::Daily,
            interval_seconds: default_interval(),
            show_author: true,
            show_quote_marks: true,
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Quotes";
    let mut fields = vec![
        FieldDescriptor::textarea("quotes", "Quotes (text - author, one per line)", section),
        FieldDescriptor::select(
            "rotation",
            "Rotate",
            section,
            vec![
                SelectOption::new("daily", "Daily"),
                SelectOption::new("hourly", "Hourly"),
                SelectOption::new("interval", "On a timer"),
                SelectOption::new("random", "Random each load"),
            ],
        ),
        FieldDescriptor::range("intervalSeconds", "Seconds per quote", section, 5.0, 3600.0, 5.0)
            .when("rotation", "interval"),
        FieldDescriptor::boolean("showAuthor", "Show author", section),
        FieldDescriptor::boolean("showQuoteMarks", "Show quotation marks", section),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::Quotes,
        "Quotes",
        "Rotating quotes with attribution.",
        WidgetConfig::Quotes(QuotesConfig::default()),
        fields,
    )
}
