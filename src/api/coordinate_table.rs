use serde::{Deserialize, Serialize};

use crate::core::PointSample;
use crate::error::{PlotError, PlotResult};

/// Decimal places shown in the coordinate table.
pub const TABLE_DECIMALS: u32 = 6;

pub const TABLE_COLUMNS: [&str; 5] = ["index", "x", "y", "unit_x", "unit_y"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub index: u32,
    pub x: f64,
    pub y: f64,
    pub unit_x: String,
    pub unit_y: String,
}

/// Display table of the sampled points, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTable {
    rows: Vec<CoordinateRow>,
}

impl CoordinateTable {
    #[must_use]
    pub fn rows(&self) -> &[CoordinateRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as display strings, coordinates printed with six decimals.
    #[must_use]
    pub fn formatted_rows(&self) -> Vec<[String; 5]> {
        let decimals = TABLE_DECIMALS as usize;
        self.rows
            .iter()
            .map(|row| {
                [
                    row.index.to_string(),
                    format!("{:.decimals$}", row.x),
                    format!("{:.decimals$}", row.y),
                    row.unit_x.clone(),
                    row.unit_y.clone(),
                ]
            })
            .collect()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.rows).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize coordinate table: {e}"))
        })
    }
}

/// One row per point with x/y rounded to six decimals and the unit repeated
/// for both axes.
#[must_use]
pub fn build_table(points: &[PointSample], unit: &str) -> CoordinateTable {
    CoordinateTable {
        rows: points
            .iter()
            .map(|point| CoordinateRow {
                index: point.index,
                x: round_to_decimals(point.x, TABLE_DECIMALS),
                y: round_to_decimals(point.y, TABLE_DECIMALS),
                unit_x: unit.to_owned(),
                unit_y: unit.to_owned(),
            })
            .collect(),
    }
}

/// Rounds half-to-even at `decimals` places; `-0.0` comes back as `0.0`.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(decimals as i32);
    let rounded = (value * factor).round_ties_even() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}
