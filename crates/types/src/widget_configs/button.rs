//! Button generator widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::color::Color;
use crate::config_enum;
use crate::field::{FieldDescriptor, SelectOption};
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

config_enum! {
    /// Button size preset
    ButtonSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
    default: Medium
}

impl ButtonSize {
    /// (vertical padding px, horizontal padding px, font size px)
    pub fn metrics(&self) -> (f64, f64, f64) {
        match self {
            ButtonSize::Small => (8.0, 16.0, 14.0),
            ButtonSize::Medium => (12.0, 24.0, 16.0),
            ButtonSize::Large => (16.0, 36.0, 20.0),
        }
    }
}

config_enum! {
    /// Hover animation
    HoverEffect {
        None => "none",
        Lift => "lift",
        Glow => "glow",
        Pulse => "pulse",
    }
    default: Lift
}

/// Button widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_button_bg")]
    pub button_color: Color,
    #[serde(default = "default_button_text")]
    pub label_color: Color,
    #[serde(default = "default_radius")]
    pub border_radius: f64,
    #[serde(default)]
    pub size: ButtonSize,
    #[serde(default)]
    pub full_width: bool,
    #[serde(default)]
    pub hover_effect: HoverEffect,
    #[serde(default = "default_true")]
    pub open_in_new_tab: bool,
}

fn default_label() -> String {
    "Open".to_string()
}

fn default_url() -> String {
    "https://example.com".to_string()
}

fn default_button_bg() -> Color {
    Color::from_rgba8(168, 85, 247, 255) // electricPurple
}

fn default_button_text() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

fn default_radius() -> f64 {
    8.0
}

fn default_true() -> bool {
    true
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            label: default_label(),
            url: default_url(),
            button_color: default_button_bg(),
            label_color: default_button_text(),
            border_radius: default_radius(),
            size: ButtonSize::Medium,
            full_width: false,
            hover_effect: HoverEffect::Lift,
            open_in_new_tab: true,
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Button";
    let mut fields = vec![
        FieldDescriptor::text("label", "Label", section),
        FieldDescriptor::text("url", "Link URL", section),
        FieldDescriptor::color("buttonColor", "Button color", section),
        FieldDescriptor::color("labelColor", "Label color", section),
        FieldDescriptor::range("borderRadius", "Corner radius", section, 0.0, 40.0, 1.0),
        FieldDescriptor::select(
            "size",
            "Size",
            section,
            vec![
                SelectOption::new("small", "Small"),
                SelectOption::new("medium", "Medium"),
                SelectOption::new("large", "Large"),
            ],
        ),
        FieldDescriptor::boolean("fullWidth", "Full width", section),
        FieldDescriptor::select(
            "hoverEffect",
            "Hover effect",
            section,
            vec![
                SelectOption::new("none", "None"),
                SelectOption::new("lift", "Lift"),
                SelectOption::new("glow", "Glow"),
                SelectOption::new("pulse", "Pulse"),
            ],
        ),
        FieldDescriptor::boolean("openInNewTab", "Open in new tab", section),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::Button,
        "Button",
        "A styled link button for embedding.",
        WidgetConfig::Button(ButtonConfig::default()),
        fields,
    )
}
