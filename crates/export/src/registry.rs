//! Registry of widget exporters.
//!
//! Built-in exporters register at construction; the registry itself is an
//! explicitly constructed value the caller owns, not a process global.

use std::collections::HashMap;

use thiserror::Error;

use embedkit_types::schema::WidgetSchema;
use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

use crate::exporter::BoxedExporter;
use crate::widgets;

/// Function that creates an exporter
pub type ExporterFactory = fn() -> BoxedExporter;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown widget: {0}")]
    UnknownWidget(String),
}

/// Registry mapping widget kinds to schemas and exporter factories
pub struct Registry {
    exporters: HashMap<WidgetKind, ExporterFactory>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
        }
    }

    /// Registry with every built-in widget registered
    pub fn with_builtins() -> Self {
        let mut r = Self::new();
        r.register(WidgetKind::Clock, || Box::new(widgets::clock::ClockExporter));
        r.register(WidgetKind::Countdown, || {
            Box::new(widgets::countdown::CountdownExporter)
        });
        r.register(WidgetKind::Counter, || {
            Box::new(widgets::counter::CounterExporter)
        });
        r.register(WidgetKind::Weather, || {
            Box::new(widgets::weather::WeatherExporter)
        });
        r.register(WidgetKind::Gallery, || {
            Box::new(widgets::gallery::GalleryExporter)
        });
        r.register(WidgetKind::LifeProgress, || {
            Box::new(widgets::life_progress::LifeProgressExporter)
        });
        r.register(WidgetKind::Quotes, || {
            Box::new(widgets::quotes::QuotesExporter)
        });
        r.register(WidgetKind::Button, || {
            Box::new(widgets::button::ButtonExporter)
        });
        r
    }

    /// Register an exporter factory
    pub fn register(&mut self, kind: WidgetKind, factory: ExporterFactory) {
        self.exporters.insert(kind, factory);
    }

    /// Resolve a widget id string to a kind, erroring on unknown ids.
    ///
    /// This is the one place an unknown widget name is an error rather
    /// than a fallback; callers pass ids, not config values.
    pub fn kind_for_id(&self, id: &str) -> Result<WidgetKind, RegistryError> {
        WidgetKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == id && self.exporters.contains_key(k))
            .ok_or_else(|| RegistryError::UnknownWidget(id.to_string()))
    }

    /// Render a config through its registered exporter
    pub fn render(&self, config: &WidgetConfig, theme: &ThemeTokens) -> Result<String, RegistryError> {
        let kind = config.kind();
        let factory = self
            .exporters
            .get(&kind)
            .ok_or_else(|| RegistryError::UnknownWidget(kind.as_str().to_string()))?;
        Ok(factory().render(config, theme))
    }

    /// Schema for a registered widget
    pub fn schema(&self, kind: WidgetKind) -> WidgetSchema {
        kind.schema()
    }

    /// All registered widget ids, in presentation order
    pub fn list(&self) -> Vec<WidgetKind> {
        WidgetKind::all()
            .iter()
            .copied()
            .filter(|k| self.exporters.contains_key(k))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_cover_all_kinds() {
        let r = Registry::with_builtins();
        assert_eq!(r.list(), WidgetKind::all().to_vec());
    }

    #[test]
    fn test_unknown_id_errors() {
        let r = Registry::with_builtins();
        assert!(r.kind_for_id("clock").is_ok());
        assert!(matches!(
            r.kind_for_id("sundial"),
            Err(RegistryError::UnknownWidget(_))
        ));
    }

    #[test]
    fn test_render_every_default_config() {
        let r = Registry::with_builtins();
        let theme = ThemeTokens::jazer_neon();
        for kind in WidgetKind::all() {
            let cfg = WidgetConfig::default_for(*kind);
            let doc = r.render(&cfg, &theme).unwrap();
            assert!(doc.starts_with("<!DOCTYPE html>"), "{:?}", kind);
            assert!(doc.trim_end().ends_with("</html>"), "{:?}", kind);
        }
    }
}
