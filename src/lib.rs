pub mod error;
pub mod geometry;
pub mod layer;
pub mod math;
pub mod operations;

pub use error::{LinrefError, Result};
pub use operations::measure::annotate_measures;
