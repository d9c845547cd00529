pub mod bounds;
pub mod circle;
pub mod geometry;
pub mod scale;
pub mod types;

pub use bounds::{PlotBounds, padding_for_radius};
pub use circle::CircleSpec;
pub use geometry::{OUTLINE_RESOLUTION, PointSample, outline_points, sample_points};
pub use scale::LinearScale;
pub use types::{DataPoint, Viewport};
