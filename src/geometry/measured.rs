use crate::geometry::route::Route;
use crate::math::Point3;

/// A route vertex with an optional linear-referencing measure (M value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredVertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: Option<f64>,
}

impl MeasuredVertex {
    /// Creates a new vertex.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, m: Option<f64>) -> Self {
        Self { x, y, z, m }
    }

    /// Position of the vertex without its measure.
    #[must_use]
    pub fn position(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

/// A route whose vertices carry measures, as written back to the caller's
/// feature store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasuredRoute {
    pub parts: Vec<Vec<MeasuredVertex>>,
}

impl MeasuredRoute {
    /// Iterates over every vertex in traversal order.
    pub fn vertices(&self) -> impl Iterator<Item = &MeasuredVertex> + '_ {
        self.parts.iter().flatten()
    }

    /// Total number of vertices across all parts.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    /// Per-vertex measures in traversal order.
    #[must_use]
    pub fn measures(&self) -> Vec<Option<f64>> {
        self.vertices().map(|v| v.m).collect()
    }

    /// Returns `true` if every vertex carries a measure.
    #[must_use]
    pub fn is_fully_measured(&self) -> bool {
        self.vertices().all(|v| v.m.is_some())
    }

    /// Returns the `(min, max)` of the assigned measures, or `None` if no
    /// vertex is measured.
    #[must_use]
    pub fn measure_range(&self) -> Option<(f64, f64)> {
        self.vertices().filter_map(|v| v.m).fold(None, |acc, m| match acc {
            None => Some((m, m)),
            Some((lo, hi)) => Some((lo.min(m), hi.max(m))),
        })
    }

    /// Strips the measures, returning the underlying geometry.
    #[must_use]
    pub fn to_route(&self) -> Route {
        Route::new(
            self.parts
                .iter()
                .map(|part| part.iter().map(MeasuredVertex::position).collect())
                .collect(),
        )
    }
}
