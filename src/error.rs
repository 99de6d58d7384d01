use thiserror::Error;

/// Top-level error type for the linear referencing crate.
#[derive(Debug, Error, PartialEq)]
pub enum LinrefError {
    #[error(transparent)]
    Measure(#[from] MeasureError),

    #[error(transparent)]
    Layer(#[from] LayerError),

    #[error(transparent)]
    Calibration(#[from] CalibrationError),
}

/// Errors raised by measure interpolation along a polyline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    #[error("at least 2 vertices are required, got {count}")]
    InsufficientVertices { count: usize },

    #[error("degenerate geometry: total path length is zero")]
    DegenerateGeometry,
}

/// Errors related to the route layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayerError {
    #[error("feature not found: {0}")]
    FeatureNotFound(String),
}

/// Errors related to route calibration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("invalid calibration parameters: {0}")]
    InvalidParameters(String),

    #[error("feature `{feature}` has no value for measure field `{field}`")]
    MissingAttribute { feature: String, field: String },

    #[error("feature `{feature}` has non-finite value {value} in measure field `{field}`")]
    NonFiniteAttribute {
        feature: String,
        field: String,
        value: f64,
    },

    #[error("route `{feature}` failed: {source}")]
    Route {
        feature: String,
        #[source]
        source: MeasureError,
    },
}

/// Convenience type alias for results using [`LinrefError`].
pub type Result<T> = std::result::Result<T, LinrefError>;
