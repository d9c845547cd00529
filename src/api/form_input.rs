use serde::{Deserialize, Serialize};

use crate::core::CircleSpec;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

use super::{ExportMetadata, PlotOptions};

pub const MIN_POINT_SIZE: u32 = 1;
pub const MAX_POINT_SIZE: u32 = 20;

/// Snapshot of every form field, passed by value into one render cycle.
///
/// Missing fields take the form defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub center_x: f64,
    #[serde(default)]
    pub center_y: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_point_count")]
    pub point_count: u32,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_point_color")]
    pub point_color: String,
    #[serde(default = "default_point_size")]
    pub point_size: u32,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_contact: String,
    #[serde(default)]
    pub notes: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            radius: default_radius(),
            point_count: default_point_count(),
            unit: default_unit(),
            point_color: default_point_color(),
            point_size: default_point_size(),
            show_grid: true,
            show_labels: true,
            author_name: String::new(),
            author_contact: String::new(),
            notes: String::new(),
        }
    }
}

impl FormInput {
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidInput(format!("failed to parse form input json: {e}")))
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize form input: {e}")))
    }

    #[must_use]
    pub fn with_center(mut self, center_x: f64, center_y: f64) -> Self {
        self.center_x = center_x;
        self.center_y = center_y;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_point_count(mut self, point_count: u32) -> Self {
        self.point_count = point_count;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Range checks shared by every consumer of the form.
    pub fn validate(&self) -> PlotResult<CircleSpec> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(PlotError::InvalidInput(
                "center coordinates must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(PlotError::InvalidInput(
                "radius must be finite and >= 0".to_owned(),
            ));
        }
        if self.point_count < 1 {
            return Err(PlotError::InvalidInput(
                "point count must be >= 1".to_owned(),
            ));
        }
        if !(MIN_POINT_SIZE..=MAX_POINT_SIZE).contains(&self.point_size) {
            return Err(PlotError::InvalidInput(format!(
                "point size must be in {MIN_POINT_SIZE}..={MAX_POINT_SIZE}"
            )));
        }
        let point_color = Color::from_hex(&self.point_color)?;

        Ok(CircleSpec {
            center_x: self.center_x,
            center_y: self.center_y,
            radius: self.radius,
            point_count: self.point_count,
            unit: self.unit.clone(),
            point_color,
            point_size: self.point_size,
        })
    }

    #[must_use]
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions::default()
            .with_grid(self.show_grid)
            .with_labels(self.show_labels)
    }

    #[must_use]
    pub fn export_metadata(&self) -> ExportMetadata {
        let optional = |value: &str| (!value.is_empty()).then(|| value.to_owned());
        ExportMetadata {
            author_name: optional(&self.author_name),
            author_contact: optional(&self.author_contact),
            notes: optional(&self.notes),
        }
    }
}

fn default_radius() -> f64 {
    1.0
}

fn default_point_count() -> u32 {
    12
}

fn default_unit() -> String {
    "m".to_owned()
}

fn default_point_color() -> String {
    "#ff0000".to_owned()
}

fn default_point_size() -> u32 {
    6
}

fn default_true() -> bool {
    true
}
