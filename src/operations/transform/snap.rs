use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Rounds each coordinate of `point` to the nearest multiple of `step`.
///
/// Rounding is done on the magnitude, so a coordinate exactly halfway
/// between two grid lines moves toward zero on either side of the origin.
///
/// # Errors
///
/// Returns [`GeometryError::ParameterOutOfRange`] unless `step` is finite and
/// positive.
pub fn snap_to_grid(point: &Point2, step: f64) -> Result<Point2> {
    if !(step.is_finite() && step > 0.0) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "grid_step",
            value: step,
            min: f64::MIN_POSITIVE,
            max: f64::MAX,
        }
        .into());
    }
    Ok(Point2::new(snap_coordinate(point.x, step), snap_coordinate(point.y, step)))
}

fn snap_coordinate(value: f64, step: f64) -> f64 {
    let magnitude = value.abs();
    let remainder = magnitude % step;
    let snapped = if remainder <= step / 2.0 {
        magnitude - remainder
    } else {
        magnitude - remainder + step
    };
    snapped.copysign(value)
}
