use crate::geometry::measured::{MeasuredRoute, MeasuredVertex};
use crate::math::Point3;

/// A route polyline made of one or more parts.
///
/// Parts are traversed in order and their vertices are treated as one
/// flattened sequence for measuring, the way a multi-part feature is walked
/// vertex by vertex. Z is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub parts: Vec<Vec<Point3>>,
}

impl Route {
    /// Creates a route from its parts.
    #[must_use]
    pub fn new(parts: Vec<Vec<Point3>>) -> Self {
        Self { parts }
    }

    /// Creates a single-part route.
    #[must_use]
    pub fn single(points: Vec<Point3>) -> Self {
        Self {
            parts: vec![points],
        }
    }

    /// Creates a single-part route from planar `(x, y)` pairs with Z = 0.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::single(coords.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect())
    }

    /// Total number of vertices across all parts.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the route has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Iterates over every vertex in traversal order.
    pub fn vertices(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.parts.iter().flatten()
    }

    /// Collects the flattened vertex sequence.
    #[must_use]
    pub fn to_points(&self) -> Vec<Point3> {
        self.vertices().copied().collect()
    }

    /// Returns a new route traversed from the last vertex to the first.
    ///
    /// Part order and the vertex order inside each part are both reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let parts = self
            .parts
            .iter()
            .rev()
            .map(|part| part.iter().rev().copied().collect())
            .collect();
        Self { parts }
    }

    /// Attaches measures to the vertices by flattened index.
    ///
    /// `measures[i]` goes to the `i`-th vertex in traversal order, counting
    /// across part boundaries. Vertices past the end of `measures` get no
    /// measure. Extra measures are ignored.
    #[must_use]
    pub fn with_measures(&self, measures: &[f64]) -> MeasuredRoute {
        let mut remaining = measures.iter().copied();
        let mut parts = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            let mut measured = Vec::with_capacity(part.len());
            for p in part {
                measured.push(MeasuredVertex::new(p.x, p.y, p.z, remaining.next()));
            }
            parts.push(measured);
        }
        MeasuredRoute { parts }
    }
}
