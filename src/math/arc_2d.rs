//! 2D arc reconstruction from a chord and an included (sweep) angle.
//!
//! Angles are in degrees at the public boundary of the kernel; the helpers
//! here take the angle magnitude plus a rotation flag, matching how arc
//! segments store them.

use super::{midpoint, Point2, Vector2, TOLERANCE};

/// Slope below which a chord is treated as horizontal.
const HORIZONTAL_SLOPE: f64 = 1e-9;

/// Classification of the slope of a chord `A -> B`.
///
/// The slope is computed as `(A.y - B.y) / (A.x - B.x)`, so a vertical chord
/// running downward (`A` above `B`) is `+inf` and one running upward is `-inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChordSlope {
    /// `0 <= slope <= 1e-9`.
    Horizontal,
    /// Slope is `+inf`: `A` lies directly above `B`.
    VerticalDescending,
    /// Slope is `-inf`: `A` lies directly below `B`.
    VerticalAscending,
    /// Finite positive slope.
    Rising(f64),
    /// Finite negative slope (including tiny negative slopes).
    Falling(f64),
}

impl ChordSlope {
    /// Classifies the chord from `a` to `b`.
    ///
    /// Returns `None` when the endpoints coincide (the slope is undefined).
    #[must_use]
    pub fn classify(a: &Point2, b: &Point2) -> Option<Self> {
        let slope = (a.y - b.y) / (a.x - b.x);
        if slope.is_nan() {
            None
        } else if (0.0..=HORIZONTAL_SLOPE).contains(&slope) {
            Some(Self::Horizontal)
        } else if slope.is_infinite() {
            if slope > 0.0 {
                Some(Self::VerticalDescending)
            } else {
                Some(Self::VerticalAscending)
            }
        } else if slope > 0.0 {
            Some(Self::Rising(slope))
        } else {
            Some(Self::Falling(slope))
        }
    }
}

/// Radius of the circle on which a chord of squared length `chord_sq`
/// subtends `sweep_degrees` at the center (law of cosines).
///
/// Returns infinity when the sweep is a multiple of 360 degrees; callers
/// reject those sweeps before calling.
#[must_use]
pub fn radius_from_chord(chord_sq: f64, sweep_degrees: f64) -> f64 {
    (chord_sq / (2.0 * (1.0 - sweep_degrees.to_radians().cos()))).sqrt()
}

/// Whether an arc of `sweep_degrees` is the long way round its circle.
#[must_use]
pub fn is_reflex(sweep_degrees: f64) -> bool {
    sweep_degrees > 180.0
}

/// Computes the center of the circle of `radius` through `a` and `b` for an
/// arc sweeping `sweep_degrees` from `a` to `b`.
///
/// Of the two candidate circles, the one selected places the center to the
/// left of `a -> b` for counter-clockwise arcs and to the right for clockwise
/// arcs, with the sides exchanged for reflex sweeps. Each slope class derives
/// the offset direction from the same rule, `(a.x > b.x) != left` (the y-axis
/// analogue for upward vertical chords), so all quadrant configurations agree.
///
/// Returns `None` when `a` and `b` coincide.
#[must_use]
pub fn arc_center(
    a: &Point2,
    b: &Point2,
    radius: f64,
    sweep_degrees: f64,
    counter_clockwise: bool,
) -> Option<Point2> {
    let slope = ChordSlope::classify(a, b)?;
    let left = counter_clockwise != is_reflex(sweep_degrees);
    let mid = midpoint(a, b);
    let chord_sq = (a - b).norm_squared();

    // Distance from the chord midpoint to the center. Underflows to NaN or a
    // negative value when the sweep is 180 degrees.
    let offset = (radius * radius - chord_sq / 4.0).sqrt();
    let offset = if offset.is_nan() { 0.0 } else { offset };

    let flip = (a.x > b.x) != left;
    let center = match slope {
        ChordSlope::Horizontal => {
            if flip {
                Point2::new(mid.x, mid.y + offset)
            } else {
                Point2::new(mid.x, mid.y - offset)
            }
        }
        ChordSlope::VerticalDescending => {
            if flip {
                Point2::new(mid.x + offset, mid.y)
            } else {
                Point2::new(mid.x - offset, mid.y)
            }
        }
        ChordSlope::VerticalAscending => {
            if (a.y > b.y) != left {
                Point2::new(mid.x - offset, mid.y)
            } else {
                Point2::new(mid.x + offset, mid.y)
            }
        }
        ChordSlope::Rising(slope) => {
            let step = bisector_step(slope, offset);
            if flip {
                mid - step
            } else {
                mid + step
            }
        }
        ChordSlope::Falling(slope) => {
            let step = bisector_step(slope, offset);
            if flip {
                mid + step
            } else {
                mid - step
            }
        }
    };
    Some(center)
}

/// Step of length `offset` along the perpendicular bisector of a chord with
/// the given finite, non-zero slope.
fn bisector_step(slope: f64, offset: f64) -> Vector2 {
    let mid_slope = -1.0 / slope;
    let norm = (mid_slope * mid_slope + 1.0).sqrt();
    Vector2::new(offset / norm, mid_slope * offset / norm)
}

/// Computes the true midpoint of an arc: the point on the circle along the
/// direction from the center through the chord midpoint, or directly
/// opposite it for reflex sweeps.
///
/// When the chord midpoint coincides with the center (a 180 degree sweep),
/// the midpoint is taken on the chord's perpendicular at `radius`, on the
/// bulge side: right of `a -> b` for counter-clockwise arcs, left for
/// clockwise arcs. The side follows the rotation direction rather than the
/// endpoint ordering alone, so a semicircle bulges the same way as the
/// shallower arcs of the same direction.
#[must_use]
pub fn arc_midpoint(
    a: &Point2,
    b: &Point2,
    center: &Point2,
    radius: f64,
    sweep_degrees: f64,
    counter_clockwise: bool,
) -> Point2 {
    let to_mid = midpoint(a, b) - center;
    let len = to_mid.norm();
    if len < TOLERANCE {
        let chord = b - a;
        let right = Vector2::new(chord.y, -chord.x) / chord.norm();
        let bulge = if counter_clockwise { right } else { -right };
        return center + bulge * radius;
    }
    let step = to_mid * (radius / len);
    if is_reflex(sweep_degrees) {
        center - step
    } else {
        center + step
    }
}

/// Rotates `point` about `center` by `angle` radians (counter-clockwise for
/// positive angles).
#[must_use]
pub fn rotate_about(point: &Point2, center: &Point2, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Point2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}
