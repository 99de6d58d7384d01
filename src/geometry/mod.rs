pub mod measured;
pub mod route;

pub use measured::{MeasuredRoute, MeasuredVertex};
pub use route::Route;
