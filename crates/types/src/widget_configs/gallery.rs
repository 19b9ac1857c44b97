//! Image gallery widget configuration.

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::config_enum;
use crate::field::{FieldDescriptor, SelectOption};
use crate::schema::{appearance_fields, WidgetSchema};
use crate::widget_configs::{WidgetConfig, WidgetKind};

config_enum! {
    /// How an image fills the frame
    ImageFit {
        Cover => "cover",
        Contain => "contain",
        Fill => "fill",
    }
    default: Cover
}

config_enum! {
    /// Transition between slides
    Transition {
        Fade => "fade",
        Slide => "slide",
        None => "none",
    }
    default: Fade
}

/// One gallery entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    #[serde(default)]
    pub caption: String,
}

/// Image gallery widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub fit: ImageFit,
    #[serde(default)]
    pub transition: Transition,
    /// Seconds per slide
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    #[serde(default = "default_true")]
    pub show_captions: bool,
    #[serde(default = "default_true")]
    pub show_dots: bool,
    #[serde(default = "default_radius")]
    pub corner_radius: f64,
}

fn default_interval() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

fn default_radius() -> f64 {
    12.0
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            images: Vec::new(),
            fit: ImageFit::Cover,
            transition: Transition::Fade,
            interval_seconds: default_interval(),
            show_captions: true,
            show_dots: true,
            corner_radius: default_radius(),
        }
    }
}

pub fn schema() -> WidgetSchema {
    let section = "Gallery";
    let mut fields = vec![
        FieldDescriptor::textarea("images", "Image URLs (one per line)", section),
        FieldDescriptor::select(
            "fit",
            "Image fit",
            section,
            vec![
                SelectOption::new("cover", "Cover"),
                SelectOption::new("contain", "Contain"),
                SelectOption::new("fill", "Stretch"),
            ],
        ),
        FieldDescriptor::select(
            "transition",
            "Transition",
            section,
            vec![
                SelectOption::new("fade", "Fade"),
                SelectOption::new("slide", "Slide"),
                SelectOption::new("none", "None"),
            ],
        ),
        FieldDescriptor::range("intervalSeconds", "Seconds per slide", section, 1.0, 120.0, 1.0),
        FieldDescriptor::boolean("showCaptions", "Show captions", section),
        FieldDescriptor::boolean("showDots", "Show position dots", section),
        FieldDescriptor::range("cornerRadius", "Corner radius", section, 0.0, 48.0, 1.0),
    ];
    fields.extend(appearance_fields());
    WidgetSchema::new(
        WidgetKind::Gallery,
        "Image gallery",
        "A rotating image gallery with captions and position dots.",
        WidgetConfig::Gallery(GalleryConfig::default()),
        fields,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gallery_has_no_images() {
        let g = GalleryConfig::default();
        assert!(g.images.is_empty());
    }
}
