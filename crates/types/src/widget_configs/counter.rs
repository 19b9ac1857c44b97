//! Counter widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::field::FieldDescriptor;
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

/// Counter widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default)]
    pub start_value: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    /// When false, decrementing stops at zero
    #[serde(default)]
    pub allow_negative: bool,
    #[serde(default = "default_true")]
    pub show_reset: bool,
}

fn default_label() -> String {
    "Counter".to_string()
}

fn default_step() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            label: default_label(),
            start_value: 0,
            step: default_step(),
            allow_negative: false,
            show_reset: true,
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Counter";
    let mut fields = vec![
        FieldDescriptor::text("label", "Label", section),
        FieldDescriptor::range("startValue", "Start value", section, -1_000_000.0, 1_000_000.0, 1.0),
        FieldDescriptor::range("step", "Step", section, 1.0, 1000.0, 1.0),
        FieldDescriptor::boolean("allowNegative", "Allow negative values", section),
        FieldDescriptor::boolean("showReset", "Show reset button", section),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::Counter,
        "Counter",
        "A tap counter with configurable step and reset.",
        WidgetConfig::Counter(CounterConfig::default()),
        fields,
    )
}
