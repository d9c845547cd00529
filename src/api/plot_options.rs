use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};

pub const DEFAULT_DPI: u32 = 150;
pub const DEFAULT_FIGURE_SIZE_IN: f64 = 6.0;

/// Presentation toggles and raster geometry for one plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default = "default_figure_size_in")]
    pub figure_width_in: f64,
    #[serde(default = "default_figure_size_in")]
    pub figure_height_in: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_labels: true,
            dpi: DEFAULT_DPI,
            figure_width_in: DEFAULT_FIGURE_SIZE_IN,
            figure_height_in: DEFAULT_FIGURE_SIZE_IN,
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Converts a length in typographic points to pixels at `dpi`.
    #[must_use]
    pub fn points_to_px(self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }

    /// Pixel size of the figure.
    pub fn viewport(self) -> PlotResult<Viewport> {
        let to_px = |inches: f64| -> PlotResult<u32> {
            let px = (inches * f64::from(self.dpi)).round();
            if !px.is_finite() || px < 1.0 || px > f64::from(i32::MAX as u32) {
                return Err(PlotError::InvalidData(format!(
                    "figure size {inches} in at {} dpi is not a drawable surface",
                    self.dpi
                )));
            }
            Ok(px as u32)
        };
        Ok(Viewport::new(
            to_px(self.figure_width_in)?,
            to_px(self.figure_height_in)?,
        ))
    }
}

fn default_true() -> bool {
    true
}

fn default_dpi() -> u32 {
    DEFAULT_DPI
}

fn default_figure_size_in() -> f64 {
    DEFAULT_FIGURE_SIZE_IN
}
