pub mod feature;

pub use feature::{RouteFeature, RouteId};

use crate::error::LayerError;
use slotmap::SlotMap;

/// An in-memory layer of route features.
///
/// Features are addressed by typed IDs and visited in insertion order,
/// which is the order a calibration pass walks them.
#[derive(Debug, Default)]
pub struct RouteLayer {
    features: SlotMap<RouteId, RouteFeature>,
    order: Vec<RouteId>,
}

impl RouteLayer {
    /// Creates a new, empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a feature and returns its ID.
    pub fn insert(&mut self, feature: RouteFeature) -> RouteId {
        let id = self.features.insert(feature);
        self.order.push(id);
        id
    }

    /// Returns a reference to the feature, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature is not in the layer.
    pub fn feature(&self, id: RouteId) -> Result<&RouteFeature, LayerError> {
        self.features
            .get(id)
            .ok_or_else(|| LayerError::FeatureNotFound(format!("{id:?}")))
    }

    /// Returns a mutable reference to the feature, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature is not in the layer.
    pub fn feature_mut(&mut self, id: RouteId) -> Result<&mut RouteFeature, LayerError> {
        self.features
            .get_mut(id)
            .ok_or_else(|| LayerError::FeatureNotFound(format!("{id:?}")))
    }

    /// Removes a feature, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature is not in the layer.
    pub fn remove(&mut self, id: RouteId) -> Result<RouteFeature, LayerError> {
        let feature = self
            .features
            .remove(id)
            .ok_or_else(|| LayerError::FeatureNotFound(format!("{id:?}")))?;
        self.order.retain(|&other| other != id);
        Ok(feature)
    }

    /// Number of features in the layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the layer has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature IDs in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[RouteId] {
        &self.order
    }

    /// Iterates over features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &RouteFeature)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.features.get(id).map(|f| (id, f)))
    }
}
