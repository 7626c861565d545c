pub mod angle;
pub mod polygon_2d;

/// 2D point type, in rectangle-local screen coordinates (y grows downward).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
