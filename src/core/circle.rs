use crate::core::types::DataPoint;
use crate::render::Color;

/// Validated parameters of one circle-and-points configuration.
///
/// Built fresh for every render cycle (see `api::FormInput::validate`) and
/// never mutated afterwards. Core functions assume `radius >= 0` and
/// `point_count >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSpec {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub point_count: u32,
    pub unit: String,
    pub point_color: Color,
    pub point_size: u32,
}

impl CircleSpec {
    #[must_use]
    pub fn center(&self) -> DataPoint {
        DataPoint::new(self.center_x, self.center_y)
    }
}
