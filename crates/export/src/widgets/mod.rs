//! Per-widget exporters.
//!
//! Each module implements [`crate::exporter::Exporter`] for one widget:
//! `generate_html` builds the markup and stylesheet, `generate_script`
//! emits the client-side update logic as source text.

pub mod button;
pub mod clock;
pub mod countdown;
pub mod counter;
pub mod gallery;
pub mod life_progress;
pub mod quotes;
pub mod weather;
