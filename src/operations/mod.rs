pub mod calibrate;
pub mod measure;
