use super::{Point2, Point3};

/// How the length of a segment between two vertices is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Euclidean distance in X/Y only. Z, when present, is ignored.
    #[default]
    Planar,
    /// Euclidean distance in X/Y/Z.
    Spatial,
}

/// A vertex position that can be measured against another of the same kind.
pub trait PathPoint: Copy {
    /// Euclidean distance in the XY plane.
    fn planar_distance(&self, other: &Self) -> f64;

    /// Euclidean distance using every available axis.
    fn spatial_distance(&self, other: &Self) -> f64;

    /// Distance to `other` under the given metric.
    fn distance_to(&self, other: &Self, metric: DistanceMetric) -> f64 {
        match metric {
            DistanceMetric::Planar => self.planar_distance(other),
            DistanceMetric::Spatial => self.spatial_distance(other),
        }
    }
}

impl PathPoint for Point2 {
    fn planar_distance(&self, other: &Self) -> f64 {
        nalgebra::distance(self, other)
    }

    fn spatial_distance(&self, other: &Self) -> f64 {
        self.planar_distance(other)
    }
}

impl PathPoint for Point3 {
    fn planar_distance(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn spatial_distance(&self, other: &Self) -> f64 {
        nalgebra::distance(self, other)
    }
}

/// Returns the length of each segment `points[i-1] → points[i]`.
///
/// The result has `points.len() - 1` entries (empty for fewer than 2 points).
#[must_use]
pub fn segment_lengths<P: PathPoint>(points: &[P], metric: DistanceMetric) -> Vec<f64> {
    points
        .windows(2)
        .map(|w| w[0].distance_to(&w[1], metric))
        .collect()
}

/// Returns the running distance from the first vertex to each vertex.
///
/// The first entry is `0.0` and the sequence is non-decreasing. The last
/// entry is the total path length. Empty input gives an empty result.
#[must_use]
pub fn cumulative_distances<P: PathPoint>(points: &[P], metric: DistanceMetric) -> Vec<f64> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut cumulative = Vec::with_capacity(points.len());
    let mut total = 0.0;
    cumulative.push(total);
    for d in segment_lengths(points, metric) {
        total += d;
        cumulative.push(total);
    }
    cumulative
}

/// Returns the total length of the path through `points`.
#[must_use]
pub fn path_length<P: PathPoint>(points: &[P], metric: DistanceMetric) -> f64 {
    segment_lengths(points, metric).iter().sum()
}
