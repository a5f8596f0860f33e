use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Shortest distance from `point` to the segment `a -> b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        return (point - a).norm();
    }

    let t = ((point - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (point - (a + d * t)).norm()
}

/// Shortest distance from `point` to a circular arc given by `center`,
/// `radius`, the polar angle of its start point and a signed `sweep` in
/// radians (positive counter-clockwise).
///
/// Inside the arc's angular span this is the radial gap to the circle; outside
/// it, the distance to the nearer endpoint.
#[must_use]
pub fn point_to_arc_dist(
    point: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> f64 {
    let d = point - center;
    if angle_in_arc_range(d.y.atan2(d.x), start_angle, sweep) {
        return (d.norm() - radius).abs();
    }

    let on_circle = |angle: f64| center + radius * Vector2::new(angle.cos(), angle.sin());
    let start = on_circle(start_angle);
    let end = on_circle(start_angle + sweep);
    (point - start).norm().min((point - end).norm())
}

/// Whether `angle` lies in the span swept from `start_angle` by `sweep`.
fn angle_in_arc_range(angle: f64, start_angle: f64, sweep: f64) -> bool {
    const EPS: f64 = 1e-10;
    let offset = if sweep >= 0.0 {
        (angle - start_angle).rem_euclid(TAU)
    } else {
        (start_angle - angle).rem_euclid(TAU)
    };
    offset <= sweep.abs() + EPS || offset >= TAU - EPS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        let d = point_to_segment_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn arc_dist_in_range() {
        // Upper unit semicircle; (0, 2) is one unit above the arc.
        let d = point_to_arc_dist(&p(0.0, 2.0), &p(0.0, 0.0), 1.0, 0.0, PI);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn arc_dist_outside_range() {
        // (0, -2) is below the upper semicircle; nearest are the endpoints.
        let d = point_to_arc_dist(&p(0.0, -2.0), &p(0.0, 0.0), 1.0, 0.0, PI);
        assert!((d - 5.0_f64.sqrt()).abs() < 1e-6, "d={d}");
    }

    #[test]
    fn arc_dist_clockwise_sweep() {
        // Clockwise quarter from angle 0 down to -PI/2 passes through (√½, -√½).
        let h = 0.5_f64.sqrt();
        let d = point_to_arc_dist(&p(h, -h), &p(0.0, 0.0), 1.0, 0.0, -PI / 2.0);
        assert!(d.abs() < TOL, "d={d}");
        let far = point_to_arc_dist(&p(0.0, 1.0), &p(0.0, 0.0), 1.0, 0.0, -PI / 2.0);
        assert!((far - 2.0_f64.sqrt()).abs() < 1e-9, "far={far}");
    }
}
