mod frame;
mod null_renderer;
mod page;
mod plot_image;
mod primitives;
pub mod raster;
mod text_page_canvas;

pub use frame::{LegendEntry, LegendPrimitive, RenderFrame};
pub use null_renderer::NullRenderer;
pub use page::{FontWeight, ImagePlacement, PageCanvas, PageTextLine};
pub use plot_image::PlotImage;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, MarkerShape, PolylinePrimitive,
    RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use text_page_canvas::TextPageCanvas;

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from geometry and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

/// Backends that can turn a frame into an encoded, tightly cropped image.
pub trait Rasterizer {
    fn rasterize(&mut self, frame: &RenderFrame, dpi: u32) -> PlotResult<PlotImage>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
mod cairo_pdf_canvas;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
#[cfg(feature = "cairo-backend")]
pub use cairo_pdf_canvas::CairoPdfCanvas;
