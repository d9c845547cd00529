use std::io::Cursor;

use cairo::{Context, FontSlant, ImageSurface, PdfSurface};

use crate::error::{ExportError, PlotError, PlotResult};
use crate::render::{FontWeight, ImagePlacement, PageCanvas, PageTextLine, PlotImage};

/// Single-page PDF canvas backed by a Cairo PDF surface writing into memory.
#[derive(Debug)]
pub struct CairoPdfCanvas {
    surface: PdfSurface,
    context: Context,
}

impl CairoPdfCanvas {
    pub fn new(width_pt: f64, height_pt: f64) -> PlotResult<Self> {
        if !width_pt.is_finite() || !height_pt.is_finite() || width_pt <= 0.0 || height_pt <= 0.0
        {
            return Err(PlotError::InvalidData(
                "pdf page size must be finite and > 0".to_owned(),
            ));
        }
        let surface = PdfSurface::for_stream(width_pt, height_pt, Vec::<u8>::new())
            .map_err(|err| map_backend_error("failed to create pdf surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create pdf context", err))?;
        Ok(Self { surface, context })
    }
}

impl PageCanvas for CairoPdfCanvas {
    fn draw_text(&mut self, line: &PageTextLine) -> PlotResult<()> {
        let weight = match line.weight {
            FontWeight::Regular => cairo::FontWeight::Normal,
            FontWeight::Bold => cairo::FontWeight::Bold,
        };
        self.context
            .select_font_face("Helvetica", FontSlant::Normal, weight);
        self.context.set_font_size(line.font_size);
        self.context.set_source_rgb(0.0, 0.0, 0.0);
        self.context.move_to(line.x, line.baseline_y);
        self.context
            .show_text(&line.text)
            .map_err(|err| map_backend_error("failed to draw text", err))
    }

    fn draw_image(
        &mut self,
        image: &PlotImage,
        placement: &ImagePlacement,
    ) -> Result<(), ExportError> {
        let decoded = ImageSurface::create_from_png(&mut Cursor::new(image.png_bytes()))
            .map_err(|err| ExportError::Decode(err.to_string()))?;
        if decoded.width() <= 0 || decoded.height() <= 0 {
            return Err(ExportError::EmptyImage);
        }

        let embed = |err: cairo::Error| ExportError::Decode(err.to_string());
        self.context.save().map_err(embed)?;
        self.context.translate(placement.x, placement.y_top);
        self.context.scale(placement.scale, placement.scale);
        let painted = self
            .context
            .set_source_surface(&decoded, 0.0, 0.0)
            .and_then(|()| self.context.paint());
        self.context.restore().map_err(embed)?;
        painted.map_err(embed)
    }

    fn finish(self) -> PlotResult<Vec<u8>> {
        self.context
            .show_page()
            .map_err(|err| map_backend_error("failed to emit pdf page", err))?;
        drop(self.context);

        let stream = self
            .surface
            .finish_output_stream()
            .map_err(|err| PlotError::Backend(format!("failed to finish pdf stream: {err}")))?;
        stream
            .downcast::<Vec<u8>>()
            .map(|bytes| *bytes)
            .map_err(|_| PlotError::Backend("pdf stream has an unexpected type".to_owned()))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
