pub mod bearing;
pub mod decimal;
pub mod sqrt;
pub mod trig;

/// 2D point type used for double-precision interop.
pub type Point2 = nalgebra::Point2<f64>;
