use crate::layer::RouteId;

/// Result of calibrating one route.
#[derive(Debug, Clone, PartialEq)]
pub enum CalibrationStatus {
    /// Measures were interpolated along the route.
    Calibrated,
    /// The route had zero length and the constant fallback was applied.
    Fallback,
    /// The route was left unmeasured.
    Failed(String),
}

/// Outcome of one feature in a calibration pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    pub id: RouteId,
    pub name: String,
    pub status: CalibrationStatus,
    pub vertex_count: usize,
    /// Measures written to the feature. Empty when the route failed.
    pub measures: Vec<f64>,
}

/// Summary of a calibration pass, one outcome per visited feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalibrationReport {
    pub outcomes: Vec<RouteOutcome>,
}

impl CalibrationReport {
    /// Number of routes measured by interpolation.
    #[must_use]
    pub fn calibrated_count(&self) -> usize {
        self.count(|s| matches!(s, CalibrationStatus::Calibrated))
    }

    /// Number of zero-length routes given constant measures.
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.count(|s| matches!(s, CalibrationStatus::Fallback))
    }

    /// Number of routes left unmeasured.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, CalibrationStatus::Failed(_)))
    }

    /// Returns `true` if no route failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Looks up the outcome for a feature.
    #[must_use]
    pub fn outcome(&self, id: RouteId) -> Option<&RouteOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }

    fn count(&self, pred: impl Fn(&CalibrationStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}
