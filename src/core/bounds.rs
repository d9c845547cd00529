use crate::core::circle::CircleSpec;

/// Minimum margin around the circle, in data units.
///
/// Keeps a visible margin when the radius is zero.
pub const MIN_PADDING: f64 = 0.1;

/// Relative margin around the circle.
pub const PADDING_RATIO: f64 = 0.1;

/// `max(0.1 * radius, 0.1)`.
#[must_use]
pub fn padding_for_radius(radius: f64) -> f64 {
    (PADDING_RATIO * radius).max(MIN_PADDING)
}

/// Square data-space window shown by the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub padding: f64,
}

impl PlotBounds {
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        let padding = padding_for_radius(radius);
        Self {
            x_min: center_x - radius - padding,
            x_max: center_x + radius + padding,
            y_min: center_y - radius - padding,
            y_max: center_y + radius + padding,
            padding,
        }
    }

    #[must_use]
    pub fn around(spec: &CircleSpec) -> Self {
        Self::new(spec.center_x, spec.center_y, spec.radius)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}
