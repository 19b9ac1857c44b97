//! Static HTML export for embeddable widgets.
//!
//! Turns a validated widget configuration plus a theme into one
//! self-contained HTML document: inline stylesheet, inline script, no
//! build step and no server round trips at view time. Rendering is pure;
//! anything time- or network-dependent happens in the emitted script.

pub mod css;
pub mod document;
pub mod escape;
pub mod exporter;
pub mod registry;
pub mod resolve;
pub mod widgets;

pub use exporter::{BoxedExporter, Exporter};
pub use registry::{Registry, RegistryError};
pub use resolve::{resolve, ResolvedStyle};
