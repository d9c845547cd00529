use crate::error::{ExportError, PlotResult};
use crate::render::PlotImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One line of page text. Coordinates are in points from the top-left
/// corner of the page; `baseline_y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTextLine {
    pub text: String,
    pub x: f64,
    pub baseline_y: f64,
    pub font_size: f64,
    pub weight: FontWeight,
}

/// Where and how large the plot image lands on the page, in points from the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f64,
    pub y_top: f64,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

/// Page-composition backend used by the document exporter.
///
/// Image failures are reported as `ExportError` so the exporter can degrade
/// gracefully; every other failure is a hard `PlotError`.
pub trait PageCanvas {
    fn draw_text(&mut self, line: &PageTextLine) -> PlotResult<()>;

    fn draw_image(
        &mut self,
        image: &PlotImage,
        placement: &ImagePlacement,
    ) -> Result<(), ExportError>;

    /// Closes the page and returns the encoded document.
    fn finish(self) -> PlotResult<Vec<u8>>
    where
        Self: Sized;
}
