use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::render::{FontWeight, ImagePlacement, PageTextLine};

use super::ParameterList;

pub const DOCUMENT_TITLE: &str = "Circle from points - Output";
pub const IMAGE_ERROR_PREFIX: &str = "Image embedding failed";

/// Page geometry in points (1/72 in), measured from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub title_baseline: f64,
    pub first_line_baseline: f64,
    pub line_spacing: f64,
    pub image_gap: f64,
    pub error_line_offset: f64,
    pub title_font_size: f64,
    pub body_font_size: f64,
}

impl PageSpec {
    #[must_use]
    pub const fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 40.0,
            title_baseline: 50.0,
            first_line_baseline: 80.0,
            line_spacing: 14.0,
            image_gap: 10.0,
            error_line_offset: 20.0,
            title_font_size: 16.0,
            body_font_size: 10.0,
        }
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::a4()
    }
}

/// Optional author information printed under the parameters.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExportMetadata {
    #[must_use]
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_author_contact(mut self, contact: impl Into<String>) -> Self {
        self.author_contact = Some(contact.into());
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Text of the optional lines, in page order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(name) = present(&self.author_name) {
            lines.push(format!("Printed by: {name}"));
        }
        if let Some(contact) = present(&self.author_contact) {
            lines.push(format!("Contact: {contact}"));
        }
        if let Some(notes) = present(&self.notes) {
            let single_line = notes.lines().collect::<Vec<_>>().join(" ");
            lines.push(format!("Notes: {single_line}"));
        }
        lines
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Text block of the exported page plus the cursor below it.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    page: PageSpec,
    lines: Vec<PageTextLine>,
    cursor_y: f64,
}

impl DocumentLayout {
    /// Title, one `"<label>: <value>"` line per parameter, then the
    /// non-empty metadata lines.
    #[must_use]
    pub fn compose(page: PageSpec, parameters: &ParameterList, metadata: &ExportMetadata) -> Self {
        let mut lines = vec![PageTextLine {
            text: DOCUMENT_TITLE.to_owned(),
            x: page.margin,
            baseline_y: page.title_baseline,
            font_size: page.title_font_size,
            weight: FontWeight::Bold,
        }];

        let body = parameters
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .chain(metadata.lines());
        let mut cursor_y = page.first_line_baseline;
        for text in body {
            lines.push(PageTextLine {
                text,
                x: page.margin,
                baseline_y: cursor_y,
                font_size: page.body_font_size,
                weight: FontWeight::Regular,
            });
            cursor_y += page.line_spacing;
        }

        Self {
            page,
            lines,
            cursor_y,
        }
    }

    #[must_use]
    pub fn page(&self) -> PageSpec {
        self.page
    }

    #[must_use]
    pub fn lines(&self) -> &[PageTextLine] {
        &self.lines
    }

    /// Baseline the next text line would use.
    #[must_use]
    pub fn cursor_y(&self) -> f64 {
        self.cursor_y
    }

    #[must_use]
    pub fn max_image_width(&self) -> f64 {
        self.page.width - 2.0 * self.page.margin
    }

    /// Space between the text cursor and the bottom margin.
    #[must_use]
    pub fn max_image_height(&self) -> f64 {
        self.page.height - self.cursor_y - self.page.margin
    }

    /// Fits an image of the given natural size under the text block.
    ///
    /// The image is only ever scaled down and keeps its aspect ratio.
    pub fn place_image(
        &self,
        natural_width: u32,
        natural_height: u32,
    ) -> Result<ImagePlacement, ExportError> {
        if natural_width == 0 || natural_height == 0 {
            return Err(ExportError::EmptyImage);
        }
        let available_height = self.max_image_height();
        if available_height <= 0.0 {
            return Err(ExportError::NoRoom { available_height });
        }

        let width = f64::from(natural_width);
        let height = f64::from(natural_height);
        let scale = fit_scale(width, height, self.max_image_width(), available_height);
        Ok(ImagePlacement {
            x: self.page.margin,
            y_top: self.cursor_y + self.page.image_gap,
            width: width * scale,
            height: height * scale,
            scale,
        })
    }

    /// Inline line drawn where the image would have gone.
    #[must_use]
    pub fn image_error_line(&self, error: &ExportError) -> PageTextLine {
        PageTextLine {
            text: format!("{IMAGE_ERROR_PREFIX}: {error}"),
            x: self.page.margin,
            baseline_y: self.cursor_y + self.page.error_line_offset,
            font_size: self.page.body_font_size,
            weight: FontWeight::Regular,
        }
    }
}

/// `min(max_width / width, max_height / height, 1.0)`.
#[must_use]
pub fn fit_scale(width: f64, height: f64, max_width: f64, max_height: f64) -> f64 {
    (max_width / width).min(max_height / height).min(1.0)
}
