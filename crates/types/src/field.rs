//! Field descriptor metadata for widget settings forms.
//!
//! A widget's schema lists the fields a settings UI should render. The
//! descriptors are static metadata only; the exporter never consults them
//! at render time.

use serde::{Deserialize, Serialize};

/// Type of value a field holds (drives the settings-UI control)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Boolean,
    Number,
    Select,
    Color,
    Textarea,
    Range,
    Date,
    DatetimeLocal,
}

/// One option of a select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value stored in the config
    pub value: String,
    /// Label shown in the UI
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Conditional visibility: show/apply this field only when another field
/// currently equals the given value. A config may still hold a value for a
/// hidden field; exporters ignore it consistently with the condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCondition {
    /// Name of the field this one depends on
    pub field: String,
    /// Required value of that field, as its JSON representation
    pub equals: serde_json::Value,
}

/// Metadata describing a single editable field
///
/// `name` uses dot paths for nested groups (e.g. `"darkMode.textColor"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    /// Settings-panel section this field appears under
    pub section: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<FieldCondition>,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
        section: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            section: section.into(),
            options: Vec::new(),
            min: None,
            max: None,
            step: None,
            condition: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>, section: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Text, section)
    }

    pub fn boolean(name: impl Into<String>, label: impl Into<String>, section: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Boolean, section)
    }

    pub fn color(name: impl Into<String>, label: impl Into<String>, section: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Color, section)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>, section: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Textarea, section)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        section: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut f = Self::new(name, label, FieldType::Select, section);
        f.options = options;
        f
    }

    pub fn range(
        name: impl Into<String>,
        label: impl Into<String>,
        section: impl Into<String>,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        let mut f = Self::new(name, label, FieldType::Range, section);
        f.min = Some(min);
        f.max = Some(max);
        f.step = Some(step);
        f
    }

    /// Attach a visibility condition
    pub fn when(mut self, field: impl Into<String>, equals: impl Into<serde_json::Value>) -> Self {
        self.condition = Some(FieldCondition {
            field: field.into(),
            equals: equals.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_serializes_without_empty_optionals() {
        let f = FieldDescriptor::boolean("stopAtZero", "Stop at zero", "Behavior");
        let json = serde_json::to_value(&f).unwrap();
        assert!(json.get("options").is_none());
        assert!(json.get("condition").is_none());
        assert_eq!(json["field_type"], "boolean");
    }

    #[test]
    fn test_condition_builder() {
        let f = FieldDescriptor::select(
            "confettiDuration",
            "Confetti duration",
            "Completion",
            vec![SelectOption::new("1min", "1 minute")],
        )
        .when("showConfetti", true);
        let c = f.condition.unwrap();
        assert_eq!(c.field, "showConfetti");
        assert_eq!(c.equals, serde_json::Value::Bool(true));
    }
}
