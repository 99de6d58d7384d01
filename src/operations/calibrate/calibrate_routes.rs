use tracing::{debug, info, warn};

use super::params::{CalibrationParams, DegeneratePolicy, MeasureSource};
use super::report::{CalibrationReport, CalibrationStatus, RouteOutcome};
use crate::error::{CalibrationError, MeasureError, Result};
use crate::geometry::{MeasuredRoute, Route};
use crate::layer::{RouteFeature, RouteLayer};
use crate::operations::measure::AnnotateMeasures;

/// Calibrates route measures across a layer.
///
/// Each feature's vertices are flattened across parts, measured from its
/// from-measure to its to-measure by cumulative distance, and the measured
/// geometry is written back onto the feature. Source geometry is left as is.
///
/// Features are visited in insertion order. A feature that cannot be
/// calibrated is recorded in the report and the pass moves on, unless
/// [`CalibrationParams::abort_on_error`] is set.
#[derive(Debug)]
pub struct CalibrateRoutes {
    params: CalibrationParams,
}

impl CalibrateRoutes {
    /// Creates a new calibration pass.
    #[must_use]
    pub fn new(params: CalibrationParams) -> Self {
        Self { params }
    }

    /// Returns the parameters of this pass.
    #[must_use]
    pub fn params(&self) -> &CalibrationParams {
        &self.params
    }

    /// Executes the pass over every feature in `layer`.
    ///
    /// # Errors
    ///
    /// - `CalibrationError::InvalidParameters` if the parameters do not validate
    /// - the first per-feature `CalibrationError` when `abort_on_error` is set;
    ///   features calibrated before it keep their measures
    pub fn execute(&self, layer: &mut RouteLayer) -> Result<CalibrationReport> {
        self.params.validate()?;
        info!(
            features = layer.len(),
            source = ?self.params.source,
            "calibrating route measures"
        );

        let mut report = CalibrationReport::default();
        for id in layer.ids().to_vec() {
            let feature = layer.feature_mut(id)?;
            let vertex_count = feature.geometry.vertex_count();
            debug!(route = %feature.name, vertex_count, "processing");

            let outcome = match self.calibrate_feature(feature) {
                Ok((measures, status)) => {
                    debug!(route = %feature.name, ?measures, ?status, "updated");
                    feature.measured = Some(feature.geometry.with_measures(&measures));
                    RouteOutcome {
                        id,
                        name: feature.name.clone(),
                        status,
                        vertex_count,
                        measures,
                    }
                }
                Err(err) => {
                    warn!(route = %feature.name, error = %err, "calibration failed");
                    feature.measured = None;
                    if self.params.abort_on_error {
                        return Err(err.into());
                    }
                    RouteOutcome {
                        id,
                        name: feature.name.clone(),
                        status: CalibrationStatus::Failed(err.to_string()),
                        vertex_count,
                        measures: Vec::new(),
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        info!(
            calibrated = report.calibrated_count(),
            fallback = report.fallback_count(),
            failed = report.failed_count(),
            "calibration finished"
        );
        Ok(report)
    }

    /// Calibrates a single route from `from` to `to` with this pass's metric
    /// and zero-length policy.
    ///
    /// # Errors
    ///
    /// - `MeasureError::InsufficientVertices` if the route has fewer than 2 vertices
    /// - `MeasureError::DegenerateGeometry` if the route has zero length and
    ///   the policy is [`DegeneratePolicy::Fail`]
    pub fn calibrate_route(&self, route: &Route, from: f64, to: f64) -> Result<MeasuredRoute> {
        let (measures, _) = self.measure(route, from, to)?;
        Ok(route.with_measures(&measures))
    }

    fn calibrate_feature(
        &self,
        feature: &RouteFeature,
    ) -> std::result::Result<(Vec<f64>, CalibrationStatus), CalibrationError> {
        let (from, to) = self.endpoints(feature)?;
        self.measure(&feature.geometry, from, to)
            .map_err(|source| CalibrationError::Route {
                feature: feature.name.clone(),
                source,
            })
    }

    fn endpoints(
        &self,
        feature: &RouteFeature,
    ) -> std::result::Result<(f64, f64), CalibrationError> {
        match &self.params.source {
            MeasureSource::Fixed { from, to } => Ok((*from, *to)),
            MeasureSource::Attributes {
                from_field,
                to_field,
            } => {
                let read = |field: &String| {
                    let value = feature.attribute(field).ok_or_else(|| {
                        CalibrationError::MissingAttribute {
                            feature: feature.name.clone(),
                            field: field.clone(),
                        }
                    })?;
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(CalibrationError::NonFiniteAttribute {
                            feature: feature.name.clone(),
                            field: field.clone(),
                            value,
                        })
                    }
                };
                Ok((read(from_field)?, read(to_field)?))
            }
        }
    }

    fn measure(
        &self,
        route: &Route,
        from: f64,
        to: f64,
    ) -> std::result::Result<(Vec<f64>, CalibrationStatus), MeasureError> {
        let points = if self.params.measure_from_end {
            route.reversed().to_points()
        } else {
            route.to_points()
        };
        let annotated = AnnotateMeasures::new(&points, from, to)
            .with_metric(self.params.metric)
            .interpolate();

        let (mut measures, status) = match annotated {
            Ok(measures) => (measures, CalibrationStatus::Calibrated),
            Err(MeasureError::DegenerateGeometry)
                if self.params.degenerate == DegeneratePolicy::Constant =>
            {
                let mut measures = vec![from; points.len()];
                if let Some(last) = measures.last_mut() {
                    *last = to;
                }
                (measures, CalibrationStatus::Fallback)
            }
            Err(err) => return Err(err),
        };
        // Measures follow the geometry's own vertex order.
        if self.params.measure_from_end {
            measures.reverse();
        }
        Ok((measures, status))
    }
}
