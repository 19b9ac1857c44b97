//! embedkit-types: Shared data types for the embedkit widget exporter.
//!
//! This crate contains pure data types (colors, theme tokens, field
//! descriptors, per-widget configs) shared across all embedkit crates.
//! It performs no I/O and holds no mutable global state.

pub mod appearance;
pub mod color;
pub mod de;
pub mod field;
pub mod schema;
pub mod theme;
pub mod widget_configs;

// Re-export commonly used types at the crate root for convenience
pub use appearance::{preset_theme, AppearanceConfig, AppearanceMode, ModeColors, PresetTheme};
pub use color::{Color, ColorStop, LinearGradientConfig};
pub use field::{FieldCondition, FieldDescriptor, FieldType, SelectOption};
pub use schema::WidgetSchema;
pub use theme::{ThemeTokens, FALLBACK_COLOR};
pub use widget_configs::{WidgetConfig, WidgetKind};
