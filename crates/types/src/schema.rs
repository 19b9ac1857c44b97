//! Widget schema: the bundle a settings UI needs to render a config form.

use serde::{Deserialize, Serialize};

use crate::appearance::preset_theme_names;
use crate::field::{FieldDescriptor, SelectOption};
use crate::widget_configs::{WidgetConfig, WidgetKind};

/// Everything a settings UI needs for one widget type.
///
/// `default_config` is a complete, self-consistent instance: every
/// non-optional field carries a sensible default and the nested
/// light/dark groups are fully populated. Field order determines UI
/// presentation order only; the exporter never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSchema {
    pub id: WidgetKind,
    pub label: String,
    pub description: String,
    pub default_config: WidgetConfig,
    pub fields: Vec<FieldDescriptor>,
}

impl WidgetSchema {
    pub fn new(
        id: WidgetKind,
        label: impl Into<String>,
        description: impl Into<String>,
        default_config: WidgetConfig,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
            default_config,
            fields,
        }
    }
}

/// The appearance fields every themeable widget shares.
///
/// Appended to each widget's own field list under an "Appearance" section.
pub fn appearance_fields() -> Vec<FieldDescriptor> {
    let section = "Appearance";
    let mut preset_options = vec![SelectOption::new("", "None")];
    for name in preset_theme_names() {
        preset_options.push(SelectOption::new(name, name));
    }
    vec![
        FieldDescriptor::select(
            "appearanceMode",
            "Appearance",
            section,
            vec![
                SelectOption::new("light", "Light"),
                SelectOption::new("dark", "Dark"),
                SelectOption::new("system", "Match system"),
            ],
        ),
        FieldDescriptor::select("presetTheme", "Preset theme", section, preset_options),
        FieldDescriptor::color("lightMode.backgroundColor", "Background (light)", section),
        FieldDescriptor::color("lightMode.textColor", "Text (light)", section),
        FieldDescriptor::color("lightMode.accentColor", "Accent (light)", section),
        FieldDescriptor::color("darkMode.backgroundColor", "Background (dark)", section),
        FieldDescriptor::color("darkMode.textColor", "Text (dark)", section),
        FieldDescriptor::color("darkMode.accentColor", "Accent (dark)", section),
        FieldDescriptor::boolean("useTransparentBg", "Transparent background", section),
        FieldDescriptor::boolean("glowEffect", "Glow effect", section),
        FieldDescriptor::boolean("gradientText", "Gradient text", section),
        FieldDescriptor::boolean("textShadows", "Text shadows", section),
        FieldDescriptor::boolean("dropShadows", "Drop shadows", section),
        FieldDescriptor::text("font", "Font", section),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_fields_cover_both_mode_groups() {
        let names: Vec<String> = appearance_fields().into_iter().map(|f| f.name).collect();
        assert!(names.contains(&"lightMode.backgroundColor".to_string()));
        assert!(names.contains(&"darkMode.accentColor".to_string()));
        assert!(names.contains(&"useTransparentBg".to_string()));
    }

    #[test]
    fn test_schema_serializes_for_ui_consumption() {
        let schema = WidgetKind::Clock.schema();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["id"], "clock");
        assert!(json["fields"].as_array().unwrap().len() > 5);
    }
}
