use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;

/// Sample count used for the drawn circle curve.
pub const OUTLINE_RESOLUTION: usize = 400;

/// One computed coordinate on the circle with its 1-based display index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSample {
    pub index: u32,
    pub x: f64,
    pub y: f64,
}

impl PointSample {
    #[must_use]
    pub fn position(self) -> DataPoint {
        DataPoint::new(self.x, self.y)
    }
}

/// Returns `count` points evenly spaced by angle `2π / count`, starting at
/// angle 0 (the rightmost point) and running counter-clockwise.
///
/// `count == 0` yields an empty sequence.
#[must_use]
pub fn sample_points(center: DataPoint, radius: f64, count: u32) -> Vec<PointSample> {
    let step = TAU / f64::from(count.max(1));
    (0..count)
        .map(|k| {
            let angle = step * f64::from(k);
            PointSample {
                index: k + 1,
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect()
}

/// Dense closed curve over `[0, 2π]` for drawing the circle itself.
///
/// Both endpoints are included, so the first and last samples coincide.
#[must_use]
pub fn outline_points(center: DataPoint, radius: f64, resolution: usize) -> Vec<DataPoint> {
    match resolution {
        0 => Vec::new(),
        1 => vec![DataPoint::new(center.x + radius, center.y)],
        _ => {
            let last = (resolution - 1) as f64;
            (0..resolution)
                .map(|i| {
                    let theta = TAU * (i as f64) / last;
                    DataPoint::new(
                        center.x + radius * theta.cos(),
                        center.y + radius * theta.sin(),
                    )
                })
                .collect()
        }
    }
}
