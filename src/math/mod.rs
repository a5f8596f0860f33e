pub mod arc_2d;
pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// 2D cross product (z component of the 3D cross product) of two vectors.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Returns the arithmetic mean of two points.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Returns whether two points coincide within [`TOLERANCE`].
#[must_use]
pub fn coincident(a: &Point2, b: &Point2) -> bool {
    (a - b).norm_squared() < TOLERANCE * TOLERANCE
}

/// Signed side of `point` relative to the directed line `from -> to`.
///
/// Positive when the point is left of the line, negative when right, and zero
/// when it lies on the line.
#[must_use]
pub fn side_of_line(from: &Point2, to: &Point2, point: &Point2) -> f64 {
    cross_2d(&(to - from), &(point - from))
}
