use std::collections::BTreeMap;

use crate::geometry::{MeasuredRoute, Route};

slotmap::new_key_type! {
    /// Unique identifier for a feature in a route layer.
    pub struct RouteId;
}

/// A route feature: geometry, numeric attributes, and the measured geometry
/// once calibrated.
#[derive(Debug, Clone)]
pub struct RouteFeature {
    /// Human-readable route name, used in reports and logs.
    pub name: String,
    /// Source geometry. Never modified by calibration.
    pub geometry: Route,
    /// Numeric attribute fields, such as endpoint measures.
    pub attributes: BTreeMap<String, f64>,
    /// Measured geometry written by the last successful calibration.
    pub measured: Option<MeasuredRoute>,
}

impl RouteFeature {
    /// Creates an uncalibrated feature with no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, geometry: Route) -> Self {
        Self {
            name: name.into(),
            geometry,
            attributes: BTreeMap::new(),
            measured: None,
        }
    }

    /// Sets a numeric attribute.
    #[must_use]
    pub fn with_attribute(mut self, field: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(field.into(), value);
        self
    }

    /// Returns the value of an attribute field, if present.
    #[must_use]
    pub fn attribute(&self, field: &str) -> Option<f64> {
        self.attributes.get(field).copied()
    }
}
