//! Per-widget configuration types.
//!
//! Each widget gets an explicit typed config struct paired 1:1 with its
//! field descriptor list, so a mismatch between defaults and editable
//! fields is a compile-time problem, not a runtime surprise.

pub mod button;
pub mod clock;
pub mod countdown;
pub mod counter;
pub mod gallery;
pub mod life_progress;
pub mod quotes;
pub mod weather;

use serde::{Deserialize, Serialize};

use crate::config_enum;
use crate::schema::WidgetSchema;

config_enum! {
    /// Identifier of a widget type
    WidgetKind {
        Clock => "clock",
        Countdown => "countdown",
        Counter => "counter",
        Weather => "weather",
        Gallery => "gallery",
        LifeProgress => "life-progress",
        Quotes => "quotes",
        Button => "button",
    }
    default: Clock
}

impl WidgetKind {
    /// All widget kinds, in presentation order
    pub fn all() -> &'static [WidgetKind] {
        &[
            WidgetKind::Clock,
            WidgetKind::Countdown,
            WidgetKind::Counter,
            WidgetKind::Weather,
            WidgetKind::Gallery,
            WidgetKind::LifeProgress,
            WidgetKind::Quotes,
            WidgetKind::Button,
        ]
    }

    /// The schema (label, description, defaults, fields) for this kind
    pub fn schema(&self) -> WidgetSchema {
        match self {
            WidgetKind::Clock => clock::schema(),
            WidgetKind::Countdown => countdown::schema(),
            WidgetKind::Counter => counter::schema(),
            WidgetKind::Weather => weather::schema(),
            WidgetKind::Gallery => gallery::schema(),
            WidgetKind::LifeProgress => life_progress::schema(),
            WidgetKind::Quotes => quotes::schema(),
            WidgetKind::Button => button::schema(),
        }
    }
}

/// Tagged union of all widget configs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "kebab-case")]
pub enum WidgetConfig {
    Clock(clock::ClockConfig),
    Countdown(countdown::CountdownConfig),
    Counter(counter::CounterConfig),
    Weather(weather::WeatherConfig),
    Gallery(gallery::GalleryConfig),
    LifeProgress(life_progress::LifeProgressConfig),
    Quotes(quotes::QuotesConfig),
    Button(button::ButtonConfig),
}

impl WidgetConfig {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetConfig::Clock(_) => WidgetKind::Clock,
            WidgetConfig::Countdown(_) => WidgetKind::Countdown,
            WidgetConfig::Counter(_) => WidgetKind::Counter,
            WidgetConfig::Weather(_) => WidgetKind::Weather,
            WidgetConfig::Gallery(_) => WidgetKind::Gallery,
            WidgetConfig::LifeProgress(_) => WidgetKind::LifeProgress,
            WidgetConfig::Quotes(_) => WidgetKind::Quotes,
            WidgetConfig::Button(_) => WidgetKind::Button,
        }
    }

    /// Default config instance for a widget kind
    pub fn default_for(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Clock => WidgetConfig::Clock(Default::default()),
            WidgetKind::Countdown => WidgetConfig::Countdown(Default::default()),
            WidgetKind::Counter => WidgetConfig::Counter(Default::default()),
            WidgetKind::Weather => WidgetConfig::Weather(Default::default()),
            WidgetKind::Gallery => WidgetConfig::Gallery(Default::default()),
            WidgetKind::LifeProgress => WidgetConfig::LifeProgress(Default::default()),
            WidgetKind::Quotes => WidgetConfig::Quotes(Default::default()),
            WidgetKind::Button => WidgetConfig::Button(Default::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_round_trip() {
        let cfg = WidgetConfig::default_for(WidgetKind::LifeProgress);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""widget":"life-progress""#));
        let back: WidgetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), WidgetKind::LifeProgress);
    }

    #[test]
    fn test_every_kind_has_a_default() {
        for kind in WidgetKind::all() {
            assert_eq!(WidgetConfig::default_for(*kind).kind(), *kind);
        }
    }
}
