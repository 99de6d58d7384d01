use crate::error::CalibrationError;
use crate::math::DistanceMetric;

/// Where a route's endpoint measures come from.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureSource {
    /// The same endpoint measures for every route.
    Fixed { from: f64, to: f64 },
    /// Per-feature endpoint measures read from two attribute fields.
    Attributes { from_field: String, to_field: String },
}

/// What to do with a route whose total length is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Record the route as failed.
    #[default]
    Fail,
    /// Assign the from-measure to every vertex except the last, which keeps
    /// the to-measure.
    Constant,
}

/// Parameters controlling a calibration pass.
///
/// There is no `Default`: every pass needs a measure source, so build one
/// with [`CalibrationParams::fixed`] or [`CalibrationParams::from_attributes`]
/// and adjust it with the `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationParams {
    /// Source of endpoint measures.
    pub source: MeasureSource,
    /// Metric used for segment lengths.
    pub metric: DistanceMetric,
    /// Handling of zero-length routes.
    pub degenerate: DegeneratePolicy,
    /// Stop at the first failed route instead of recording it and moving on.
    pub abort_on_error: bool,
    /// Measure from the last vertex back to the first, so the far end of
    /// the geometry receives the from-measure.
    pub measure_from_end: bool,
}

impl CalibrationParams {
    /// Calibrates every route from `from` to `to`.
    #[must_use]
    pub fn fixed(from: f64, to: f64) -> Self {
        Self::with_source(MeasureSource::Fixed { from, to })
    }

    /// Calibrates each route from the values of two attribute fields.
    #[must_use]
    pub fn from_attributes(from_field: impl Into<String>, to_field: impl Into<String>) -> Self {
        Self::with_source(MeasureSource::Attributes {
            from_field: from_field.into(),
            to_field: to_field.into(),
        })
    }

    fn with_source(source: MeasureSource) -> Self {
        Self {
            source,
            metric: DistanceMetric::default(),
            degenerate: DegeneratePolicy::default(),
            abort_on_error: false,
            measure_from_end: false,
        }
    }

    /// Sets the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the zero-length route policy.
    #[must_use]
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Sets whether the first failed route aborts the pass.
    #[must_use]
    pub fn with_abort_on_error(mut self, abort: bool) -> Self {
        self.abort_on_error = abort;
        self
    }

    /// Sets whether routes are measured from their last vertex.
    #[must_use]
    pub fn with_measure_from_end(mut self, from_end: bool) -> Self {
        self.measure_from_end = from_end;
        self
    }

    /// Checks the parameters before a pass.
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError::InvalidParameters` if fixed measures are
    /// not finite, or attribute field names are empty or identical.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        match &self.source {
            MeasureSource::Fixed { from, to } => {
                if !from.is_finite() || !to.is_finite() {
                    return Err(CalibrationError::InvalidParameters(format!(
                        "fixed measures must be finite, got {from} and {to}"
                    )));
                }
            }
            MeasureSource::Attributes {
                from_field,
                to_field,
            } => {
                if from_field.trim().is_empty() || to_field.trim().is_empty() {
                    return Err(CalibrationError::InvalidParameters(
                        "both measure fields are required".to_owned(),
                    ));
                }
                if from_field == to_field {
                    return Err(CalibrationError::InvalidParameters(format!(
                        "from and to measure fields are both `{from_field}`"
                    )));
                }
            }
        }
        Ok(())
    }
}
