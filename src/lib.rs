//! embedkit - configure embeddable widgets and export them as HTML.
//!
//! The library surface re-exports the workspace crates so embedders can
//! depend on `embedkit` alone: configuration and theme types from
//! `embedkit-types`, rendering from `embedkit-export`, plus the settings
//! file the CLI uses for saved configurations.

pub mod settings;

pub use embedkit_export as export;
pub use embedkit_types as types;

pub use embedkit_export::{Exporter, Registry, RegistryError};
pub use embedkit_types::theme::ThemeTokens;
pub use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};
