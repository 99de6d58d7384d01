use crate::error::{MeasureError, Result};
use crate::math::{cumulative_distances, DistanceMetric, PathPoint};

/// Assigns a measure to every vertex of a polyline by linear interpolation
/// over cumulative distance.
///
/// Vertex `0` receives `from` and vertex `n-1` receives `to`, both written
/// verbatim. Every interior vertex `i` receives
/// `from + (to - from) * c_i / T`, where `c_i` is the distance travelled
/// from vertex `0` and `T` the total path length. Vertices are consumed in
/// the given order and never re-sorted.
///
/// The output is index-aligned with the input. Positions are only read.
#[derive(Debug)]
pub struct AnnotateMeasures<'a, P> {
    points: &'a [P],
    from: f64,
    to: f64,
    metric: DistanceMetric,
}

impl<'a, P: PathPoint> AnnotateMeasures<'a, P> {
    /// Creates a new annotation with the planar distance metric.
    #[must_use]
    pub fn new(points: &'a [P], from: f64, to: f64) -> Self {
        Self {
            points,
            from,
            to,
            metric: DistanceMetric::Planar,
        }
    }

    /// Sets the metric used for segment lengths.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Executes the annotation, returning one measure per input vertex.
    ///
    /// `from` and `to` may be equal or decreasing; neither direction is
    /// validated. If `from <= to` the result is non-decreasing in traversal
    /// order, otherwise non-increasing.
    ///
    /// # Errors
    ///
    /// - `MeasureError::InsufficientVertices` if fewer than 2 points are given
    /// - `MeasureError::DegenerateGeometry` if the total path length is zero
    pub fn execute(&self) -> Result<Vec<f64>> {
        self.interpolate().map_err(Into::into)
    }

    pub(crate) fn interpolate(&self) -> std::result::Result<Vec<f64>, MeasureError> {
        let n = self.points.len();
        if n < 2 {
            return Err(MeasureError::InsufficientVertices { count: n });
        }

        let cumulative = cumulative_distances(self.points, self.metric);
        let total = cumulative[n - 1];
        if total == 0.0 {
            return Err(MeasureError::DegenerateGeometry);
        }

        let span = self.to - self.from;
        let lo = self.from.min(self.to);
        let hi = self.from.max(self.to);

        let mut measures = Vec::with_capacity(n);
        measures.push(self.from);
        for &c in &cumulative[1..n - 1] {
            let m = self.from + span * (c / total);
            // Rounding may overshoot an endpoint by an ulp.
            measures.push(m.max(lo).min(hi));
        }
        measures.push(self.to);
        Ok(measures)
    }
}

/// Annotates `points` with measures running from `from` to `to`, using
/// planar distance.
///
/// See [`AnnotateMeasures`] for the interpolation rule.
///
/// # Errors
///
/// - `MeasureError::InsufficientVertices` if fewer than 2 points are given
/// - `MeasureError::DegenerateGeometry` if the total path length is zero
pub fn annotate_measures<P: PathPoint>(points: &[P], from: f64, to: f64) -> Result<Vec<f64>> {
    AnnotateMeasures::new(points, from, to).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::LinrefError;
    use crate::math::{Point2, Point3};
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn is_non_decreasing(m: &[f64]) -> bool {
        m.windows(2).all(|w| w[0] <= w[1])
    }

    fn is_non_increasing(m: &[f64]) -> bool {
        m.windows(2).all(|w| w[0] >= w[1])
    }

    #[test]
    fn l_shape_three_four() {
        let m = annotate_measures(&pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]), 0.0, 10.0).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m[0], 0.0);
        assert_relative_eq!(m[1], 30.0 / 7.0, epsilon = 1e-12);
        assert_eq!(m[2], 10.0);
    }

    #[test]
    fn straight_line_mile_markers() {
        let m = annotate_measures(&pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]), 100.0, 200.0)
            .unwrap();
        assert_eq!(m[0], 100.0);
        assert_relative_eq!(m[1], 150.0, epsilon = 1e-12);
        assert_eq!(m[2], 200.0);
    }

    #[test]
    fn single_segment_reversed() {
        let m = annotate_measures(&pts(&[(0.0, 0.0), (1.0, 0.0)]), 50.0, 10.0).unwrap();
        assert_eq!(m, vec![50.0, 10.0]);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let err = annotate_measures(&pts(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]), 0.0, 10.0)
            .unwrap_err();
        assert_eq!(err, LinrefError::Measure(MeasureError::DegenerateGeometry));
    }

    #[test]
    fn too_few_vertices() {
        let err = annotate_measures(&pts(&[(1.0, 1.0)]), 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            LinrefError::Measure(MeasureError::InsufficientVertices { count: 1 })
        );

        let err = annotate_measures::<Point2>(&[], 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            LinrefError::Measure(MeasureError::InsufficientVertices { count: 0 })
        );
    }

    #[test]
    fn endpoints_are_exact() {
        // Awkward values where recomputing the last vertex would drift.
        let line = pts(&[(0.0, 0.0), (0.1, 0.3), (0.7, 0.2), (1.3, 1.9)]);
        let (from, to) = (0.1, 0.3 + 0.6);
        let m = annotate_measures(&line, from, to).unwrap();
        assert_eq!(m[0], from);
        assert_eq!(m[3], to);
    }

    #[test]
    fn equal_endpoints_give_constant() {
        let line = pts(&[(0.0, 0.0), (1.0, 1.0), (4.0, -2.0), (9.0, 0.0)]);
        let m = annotate_measures(&line, 42.5, 42.5).unwrap();
        assert!(m.iter().all(|&v| v == 42.5));
    }

    #[test]
    fn monotonic_follows_measure_direction() {
        // Zig-zag that doubles back in X; order must be traversal order.
        let line = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 1.0),
            (10.0, 2.0),
            (10.0, 2.0),
            (3.0, 2.0),
        ]);
        let up = annotate_measures(&line, 1.0, 9.0).unwrap();
        assert!(is_non_decreasing(&up), "{up:?}");
        let down = annotate_measures(&line, 9.0, 1.0).unwrap();
        assert!(is_non_increasing(&down), "{down:?}");
        // Repeated vertex shares its predecessor's measure.
        assert_eq!(up[3], up[4]);
    }

    #[test]
    fn self_intersecting_route_keeps_order() {
        // Loops back over its own start; measures still follow traversal.
        let line = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0), (4.0, 0.0)]);
        let m = annotate_measures(&line, 0.0, 20.0).unwrap();
        for (i, expected) in [0.0, 4.0, 8.0, 12.0, 16.0, 20.0].into_iter().enumerate() {
            assert_relative_eq!(m[i], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn closed_ring_is_not_degenerate() {
        // First and last vertex coincide but the path has length.
        let ring = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let m = annotate_measures(&ring, 0.0, 1.0).unwrap();
        assert_eq!(m.len(), 4);
        assert_eq!(m[3], 1.0);
    }

    #[test]
    fn idempotent_rerun() {
        let line = pts(&[(0.0, 0.0), (2.5, 1.0), (3.0, 7.0), (8.0, 8.0)]);
        let first = annotate_measures(&line, 12.0, 3.0).unwrap();
        let second = annotate_measures(&line, 12.0, 3.0).unwrap();
        for (a, b) in first.iter().zip(&second) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn scale_invariant() {
        let line = pts(&[(0.0, 0.0), (2.5, 1.0), (3.0, 7.0), (8.0, 8.0)]);
        let base = annotate_measures(&line, 0.0, 100.0).unwrap();
        for k in [0.001, 3.0, 1.0e6] {
            let scaled: Vec<Point2> = line.iter().map(|p| Point2::new(p.x * k, p.y * k)).collect();
            let m = annotate_measures(&scaled, 0.0, 100.0).unwrap();
            for (a, b) in base.iter().zip(&m) {
                assert_relative_eq!(*a, *b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn planar_metric_ignores_elevation() {
        // Steep climb on the first segment only counts in 3D.
        let line = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 4.0),
            Point3::new(6.0, 0.0, 4.0),
        ];
        let planar = annotate_measures(&line, 0.0, 8.0).unwrap();
        assert_relative_eq!(planar[1], 4.0, epsilon = 1e-12);

        let spatial = AnnotateMeasures::new(&line, 0.0, 8.0)
            .with_metric(DistanceMetric::Spatial)
            .execute()
            .unwrap();
        assert_relative_eq!(spatial[1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn input_positions_untouched() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let before = line.clone();
        let _ = annotate_measures(&line, 0.0, 1.0).unwrap();
        assert_eq!(line, before);
    }
}
