pub mod distance;

pub use distance::{cumulative_distances, path_length, segment_lengths, DistanceMetric, PathPoint};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. Planar operations ignore Z.
pub type Point3 = nalgebra::Point3<f64>;
