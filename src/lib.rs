//! circle-plot: evenly spaced points on a circle.
//!
//! The crate computes the points, builds a backend-agnostic plot scene,
//! rasterizes it once into a [`render::PlotImage`], formats a coordinate
//! table and composes a single-page PDF document from the same image.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{FormInput, RenderCycle};
pub use error::{ExportError, PlotError, PlotResult};
