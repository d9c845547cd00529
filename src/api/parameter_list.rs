use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::CircleSpec;

/// Ordered label → value listing printed in the exported document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterList {
    entries: IndexMap<String, String>,
}

impl ParameterList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry; re-inserting a label replaces its value in place.
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(label.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The parameters of one circle, in form order.
    #[must_use]
    pub fn from_spec(spec: &CircleSpec) -> Self {
        Self::new()
            .with("Center x", format!("{:?}", spec.center_x))
            .with("Center y", format!("{:?}", spec.center_y))
            .with("Radius", format!("{:?}", spec.radius))
            .with("Point count", spec.point_count.to_string())
            .with("Point color", spec.point_color.to_hex())
            .with("Unit", spec.unit.clone())
    }
}
