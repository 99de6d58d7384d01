mod calibrate_routes;
mod params;
mod report;

pub use calibrate_routes::CalibrateRoutes;
pub use params::{CalibrationParams, DegeneratePolicy, MeasureSource};
pub use report::{CalibrationReport, CalibrationStatus, RouteOutcome};
