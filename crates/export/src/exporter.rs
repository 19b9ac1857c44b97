//! Exporter trait.

use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

/// Trait for all widget exporters.
///
/// `render` is a pure function of the config and the theme token table:
/// no I/O, no clock reads, no network. Live behavior is emitted as script
/// source text, never executed here. A config of the wrong variant is
/// rendered from the widget's defaults instead of erroring.
pub trait Exporter: Send + Sync {
    /// Widget type this exporter handles
    fn kind(&self) -> WidgetKind;

    /// Render a complete standalone HTML document
    fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> String;
}

/// Type-erased exporter for dynamic dispatch
pub type BoxedExporter = Box<dyn Exporter>;
