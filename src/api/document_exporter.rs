use tracing::{debug, warn};

use crate::error::{ExportError, PlotResult};
use crate::render::{ImagePlacement, PageCanvas, PlotImage};

use super::{DocumentLayout, ExportMetadata, PageSpec, ParameterList};

pub const DOCUMENT_FILE_NAME: &str = "circle_output.pdf";
pub const DOCUMENT_MIME_TYPE: &str = "application/pdf";

/// Whether the plot image made it onto the page.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentContent {
    Full { placement: ImagePlacement },
    /// The image was replaced by an inline error line; all text is present.
    Degraded { error: ExportError },
}

/// Encoded single-page document, handed to the caller for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub content: DocumentContent,
}

impl ExportedDocument {
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self.content, DocumentContent::Degraded { .. })
    }

    #[must_use]
    pub fn file_name(&self) -> &'static str {
        DOCUMENT_FILE_NAME
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        DOCUMENT_MIME_TYPE
    }
}

/// Composes the A4 export page onto `canvas`.
///
/// Image placement or embedding failures are recovered locally: the page
/// gets an inline error line and the result is `DocumentContent::Degraded`.
/// Any other canvas failure is returned and no document is produced.
pub fn export_document<C: PageCanvas>(
    canvas: C,
    image: &PlotImage,
    parameters: &ParameterList,
    metadata: &ExportMetadata,
) -> PlotResult<ExportedDocument> {
    export_document_on_page(canvas, PageSpec::a4(), image, parameters, metadata)
}

pub fn export_document_on_page<C: PageCanvas>(
    mut canvas: C,
    page: PageSpec,
    image: &PlotImage,
    parameters: &ParameterList,
    metadata: &ExportMetadata,
) -> PlotResult<ExportedDocument> {
    let layout = DocumentLayout::compose(page, parameters, metadata);
    for line in layout.lines() {
        canvas.draw_text(line)?;
    }

    let embedded = layout
        .place_image(image.width(), image.height())
        .and_then(|placement| {
            canvas.draw_image(image, &placement)?;
            Ok(placement)
        });
    let content = match embedded {
        Ok(placement) => DocumentContent::Full { placement },
        Err(error) => {
            warn!(error = %error, "plot image left out of exported document");
            canvas.draw_text(&layout.image_error_line(&error))?;
            DocumentContent::Degraded { error }
        }
    };

    let bytes = canvas.finish()?;
    debug!(
        bytes = bytes.len(),
        text_lines = layout.lines().len(),
        degraded = matches!(content, DocumentContent::Degraded { .. }),
        "exported document"
    );
    Ok(ExportedDocument { bytes, content })
}

/// Exports onto a Cairo PDF page sized per `PageSpec::a4`.
#[cfg(feature = "cairo-backend")]
pub fn export_pdf(
    image: &PlotImage,
    parameters: &ParameterList,
    metadata: &ExportMetadata,
) -> PlotResult<ExportedDocument> {
    let page = PageSpec::a4();
    let canvas = crate::render::CairoPdfCanvas::new(page.width, page.height)?;
    export_document_on_page(canvas, page, image, parameters, metadata)
}
