use smallvec::SmallVec;

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{
    LinePrimitive, MarkerPrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive,
};

/// One legend row: a sample marker and its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub marker: MarkerPrimitive,
    pub label: TextPrimitive,
}

/// Boxed legend drawn above every other primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendPrimitive {
    pub frame: RectPrimitive,
    pub entries: SmallVec<[LegendEntry; 2]>,
}

impl LegendPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        self.frame.validate()?;
        for entry in &self.entries {
            entry.marker.validate()?;
            entry.label.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one plot draw pass.
///
/// Backends paint the groups in field order: rects, lines, polylines,
/// markers, texts, then the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub legend: Option<LegendPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
            legend: None,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendPrimitive) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(legend) = &self.legend {
            legend.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.polylines.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
            && self.legend.is_none()
    }
}
