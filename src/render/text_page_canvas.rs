use std::fmt::Write as _;

use crate::error::{ExportError, PlotError, PlotResult};
use crate::render::{FontWeight, ImagePlacement, PageCanvas, PageTextLine, PlotImage};

/// Plain-text page canvas.
///
/// Writes one line per draw call, so composed pages can be inspected without
/// a PDF backend.
#[derive(Debug, Default)]
pub struct TextPageCanvas {
    output: String,
    pub texts_drawn: usize,
    pub images_drawn: usize,
}

impl TextPageCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageCanvas for TextPageCanvas {
    fn draw_text(&mut self, line: &PageTextLine) -> PlotResult<()> {
        let weight = match line.weight {
            FontWeight::Regular => "regular",
            FontWeight::Bold => "bold",
        };
        writeln!(
            self.output,
            "text x={:.1} y={:.1} size={:.1} {weight}: {}",
            line.x, line.baseline_y, line.font_size, line.text
        )
        .map_err(|err| PlotError::Backend(format!("failed to record text: {err}")))?;
        self.texts_drawn += 1;
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &PlotImage,
        placement: &ImagePlacement,
    ) -> Result<(), ExportError> {
        writeln!(
            self.output,
            "image {}x{}px x={:.1} y={:.1} w={:.1} h={:.1} scale={:.4}",
            image.width(),
            image.height(),
            placement.x,
            placement.y_top,
            placement.width,
            placement.height,
            placement.scale
        )
        .map_err(|err| ExportError::Decode(err.to_string()))?;
        self.images_drawn += 1;
        Ok(())
    }

    fn finish(self) -> PlotResult<Vec<u8>> {
        Ok(self.output.into_bytes())
    }
}
