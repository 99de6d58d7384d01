mod annotate;

pub use annotate::{annotate_measures, AnnotateMeasures};
