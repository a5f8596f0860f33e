use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_center, arc_midpoint, radius_from_chord};
use crate::math::distance_2d::point_to_arc_dist;
use crate::math::{cross_2d, midpoint, Point2, Vector2, TOLERANCE};
use crate::region::{ArcRegionPolygon, SimplifiedEdge};
use crate::registry::NodeRegistry;

use super::node::NodeId;
use super::segment::BoundarySegment;

slotmap::new_key_type! {
    /// Unique identifier for an arc segment in the geometry model.
    pub struct ArcId;
}

/// Number of polyline segments a new arc is drawn with.
pub const DEFAULT_SEGMENT_COUNT: u32 = 3;

/// Derived circle data of an arc, valid for the endpoint positions it was
/// calculated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Position of the first node at calculation time.
    pub start: Point2,
    /// Position of the second node at calculation time.
    pub end: Point2,
    /// Center of the arc's circle.
    pub center: Point2,
    /// Radius of the arc's circle.
    pub radius: f64,
    /// Length along the arc.
    pub arc_length: f64,
    /// Point on the arc halfway between the endpoints.
    pub midpoint: Point2,
}

impl ArcGeometry {
    /// Angle (radians) of the start point as seen from the center.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        let d = self.start - self.center;
        d.y.atan2(d.x)
    }
}

/// A circular-arc boundary edge between two registered nodes.
///
/// The arc is defined by its endpoints and an included sweep angle. The sweep
/// is stored as a positive magnitude in degrees with the rotation direction
/// kept separately. Center, radius, length and midpoint are derived by
/// [`ArcSegment::calculate`] and must be recalculated after either endpoint
/// moves or the sweep changes; nothing tracks staleness.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    segment: BoundarySegment,
    sweep_degrees: f64,
    counter_clockwise: bool,
    segment_count: u32,
    geometry: Option<ArcGeometry>,
}

impl ArcSegment {
    /// Creates an arc from `first` to `second` sweeping `sweep_degrees`
    /// (positive for counter-clockwise, negative for clockwise).
    ///
    /// The arc has no derived geometry until [`calculate`](Self::calculate)
    /// runs.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if both ids are the same node.
    pub fn new(first: NodeId, second: NodeId, sweep_degrees: f64) -> Result<Self> {
        let mut arc = Self {
            segment: BoundarySegment::new(first, second)?,
            sweep_degrees: 0.0,
            counter_clockwise: true,
            segment_count: DEFAULT_SEGMENT_COUNT,
            geometry: None,
        };
        arc.set_sweep_angle(sweep_degrees);
        Ok(arc)
    }

    /// The underlying endpoint pair.
    #[must_use]
    pub fn segment(&self) -> &BoundarySegment {
        &self.segment
    }

    /// Id of the first (start) node.
    #[must_use]
    pub fn first(&self) -> NodeId {
        self.segment.first()
    }

    /// Id of the second (end) node.
    #[must_use]
    pub fn second(&self) -> NodeId {
        self.segment.second()
    }

    /// Sets the sweep from a signed angle in degrees. The magnitude is stored
    /// and the sign selects the rotation direction (positive is
    /// counter-clockwise).
    pub fn set_sweep_angle(&mut self, sweep_degrees: f64) {
        self.sweep_degrees = sweep_degrees.abs();
        self.counter_clockwise = sweep_degrees > 0.0;
    }

    /// Signed sweep in degrees: positive for counter-clockwise arcs.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        if self.counter_clockwise {
            self.sweep_degrees
        } else {
            -self.sweep_degrees
        }
    }

    /// Unsigned sweep magnitude in degrees.
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        self.sweep_degrees
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.counter_clockwise
    }

    /// Number of straight pieces used to draw the arc.
    #[must_use]
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// Sets the number of straight pieces used to draw the arc.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for zero.
    pub fn set_segment_count(&mut self, count: u32) -> Result<()> {
        if count == 0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "segment_count",
                value: 0.0,
                min: 1.0,
                max: f64::from(u32::MAX),
            }
            .into());
        }
        self.segment_count = count;
        Ok(())
    }

    /// Exchanges the endpoints and reverses the rotation direction, so the
    /// arc describes the same curve traversed the other way. Cached geometry
    /// stays valid.
    pub fn swap(&mut self) {
        self.segment.swap();
        self.counter_clockwise = !self.counter_clockwise;
        if let Some(geometry) = &mut self.geometry {
            std::mem::swap(&mut geometry.start, &mut geometry.end);
        }
    }

    /// Whether the endpoints are exchanged relative to creation order.
    #[must_use]
    pub fn is_swapped(&self) -> bool {
        self.segment.is_swapped()
    }

    /// Reconstructs the arc's circle from the current endpoint positions and
    /// sweep.
    ///
    /// The radius follows from the law of cosines on the isosceles triangle
    /// (center, start, end); the center is then placed on the chord's
    /// perpendicular bisector on the side selected by the rotation
    /// direction, crossing to the other side for sweeps above 180 degrees.
    /// On failure the previously derived geometry is kept.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DegenerateArc`] if the sweep is a multiple of 360.
    /// - [`GeometryError::ParameterOutOfRange`] if the sweep is not finite or
    ///   exceeds 360 degrees.
    /// - [`GeometryError::Degenerate`] if the endpoints coincide.
    /// - A registry error if either node is missing.
    pub fn calculate(&mut self, nodes: &NodeRegistry) -> Result<&ArcGeometry> {
        validate_sweep(self.sweep_degrees)?;
        let (start, end) = self.segment.endpoints(nodes)?;

        let chord_sq = (start - end).norm_squared();
        if chord_sq < TOLERANCE * TOLERANCE {
            return Err(GeometryError::Degenerate("arc endpoints coincide".into()).into());
        }

        let radius = radius_from_chord(chord_sq, self.sweep_degrees);
        if !radius.is_finite() {
            tracing::warn!(sweep = self.sweep_degrees, "arc radius is not finite");
            return Err(GeometryError::DegenerateArc {
                sweep_degrees: self.sweep_degrees,
            }
            .into());
        }

        let center = arc_center(&start, &end, radius, self.sweep_degrees, self.counter_clockwise)
            .ok_or_else(|| GeometryError::Degenerate("arc endpoints coincide".into()))?;
        let mid = arc_midpoint(
            &start,
            &end,
            &center,
            radius,
            self.sweep_degrees,
            self.counter_clockwise,
        );

        tracing::debug!(
            first = %self.first(),
            second = %self.second(),
            sweep = self.sweep_angle(),
            cx = center.x,
            cy = center.y,
            radius,
            "arc calculated"
        );

        Ok(self.geometry.insert(ArcGeometry {
            start,
            end,
            center,
            radius,
            arc_length: arc_length(radius, self.sweep_degrees),
            midpoint: mid,
        }))
    }

    /// Recomputes the arc length from the current radius and sweep.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] before the first
    /// successful [`calculate`](Self::calculate).
    pub fn calculate_distance(&mut self) -> Result<f64> {
        let sweep = self.sweep_degrees;
        let geometry = self.geometry.as_mut().ok_or(GeometryError::ArcNotCalculated)?;
        geometry.arc_length = arc_length(geometry.radius, sweep);
        Ok(geometry.arc_length)
    }

    /// The derived circle data.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] before the first
    /// successful [`calculate`](Self::calculate).
    pub fn geometry(&self) -> Result<&ArcGeometry> {
        self.geometry
            .as_ref()
            .ok_or_else(|| GeometryError::ArcNotCalculated.into())
    }

    /// Center of the arc's circle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] if not yet calculated.
    pub fn center(&self) -> Result<Point2> {
        Ok(self.geometry()?.center)
    }

    /// Radius of the arc's circle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] if not yet calculated.
    pub fn radius(&self) -> Result<f64> {
        Ok(self.geometry()?.radius)
    }

    /// Length along the arc.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] if not yet calculated.
    pub fn arc_length(&self) -> Result<f64> {
        Ok(self.geometry()?.arc_length)
    }

    /// Point on the arc halfway between its endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] if not yet calculated.
    pub fn midpoint(&self) -> Result<Point2> {
        Ok(self.geometry()?.midpoint)
    }

    /// Approximate side test against the arc, returning `1.0` or `-1.0`.
    ///
    /// A point on the same side of the chord as the center is classified by
    /// its projection onto the chord: `1.0` when the projection parameter
    /// `dot(p - a, b - a) / dot(b - a, b - a)` lies in `[0, 1]`. A point on
    /// the bulge side is classified by the circle: `1.0` when it lies inside
    /// or on it. The two rules do not meet continuously at the chord ends.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] if not yet calculated.
    pub fn left_of(&self, point: &Point2) -> Result<f64> {
        let g = self.geometry()?;
        let chord = g.end - g.start;
        let point_side = cross_2d(&(point - g.start), &chord);
        let center_side = cross_2d(&(g.center - g.start), &chord);

        let inside = if point_side.is_sign_negative() == center_side.is_sign_negative() {
            let t = (point - g.start).dot(&chord) / chord.dot(&chord);
            (0.0..=1.0).contains(&t)
        } else {
            (point - g.center).norm_squared() <= g.radius * g.radius
        };
        Ok(if inside { 1.0 } else { -1.0 })
    }

    /// Shortest distance from `point` to the arc curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] if not yet calculated.
    pub fn distance_to(&self, point: &Point2) -> Result<f64> {
        let g = self.geometry()?;
        let sweep = self.sweep_angle().to_radians();
        Ok(point_to_arc_dist(
            point,
            &g.center,
            g.radius,
            g.start_angle(),
            sweep,
        ))
    }

    /// Builds the four edges of the quadrilateral enclosing the arc's bulge.
    ///
    /// The first edge is the chord from start to end, tagged with `source`.
    /// The remaining edges run from the start outward, across the far side
    /// (passing `margin` beyond the arc midpoint) and back to the end.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcNotCalculated`] if not yet calculated.
    pub fn bounding_edges(&self, source: Option<ArcId>, margin: f64) -> Result<Vec<SimplifiedEdge>> {
        let g = self.geometry()?;
        let (start, end, center, radius) = (g.start, g.end, g.center, g.radius);

        // Polar angle of the arc midpoint about the center, from the law of
        // cosines against the reference point (center.x + radius, center.y).
        let reach = (center.x + radius - g.midpoint.x).powi(2) + (center.y - g.midpoint.y).powi(2);
        let mut theta = (1.0 - reach / (2.0 * radius * radius)).clamp(-1.0, 1.0).acos();
        if g.midpoint.y < center.y {
            theta = -theta;
        }
        let direction = Vector2::new(theta.cos(), theta.sin());

        let upper = center + direction * (radius + margin);
        let chord_mid = midpoint(&start, &end);
        let circle_radius = (upper - chord_mid).norm();
        let point1 = start + direction * circle_radius;
        let point2 = end + direction * circle_radius;

        Ok(vec![
            SimplifiedEdge::new(start, end, chord_mid, source),
            SimplifiedEdge::new(start, point1, midpoint(&start, &point1), None),
            SimplifiedEdge::new(point1, point2, upper, None),
            SimplifiedEdge::new(point2, end, midpoint(&point2, &end), None),
        ])
    }

    /// Builds the region polygon enclosing the arc (see
    /// [`bounding_edges`](Self::bounding_edges)).
    ///
    /// # Errors
    ///
    /// Returns an error if the arc is not calculated or the edges cannot be
    /// stitched into a closed loop.
    pub fn bounding_polygon(&self, source: Option<ArcId>, margin: f64) -> Result<ArcRegionPolygon> {
        ArcRegionPolygon::new(self.bounding_edges(source, margin)?, self.clone())
    }
}

fn arc_length(radius: f64, sweep_degrees: f64) -> f64 {
    radius * sweep_degrees.to_radians()
}

fn validate_sweep(sweep_degrees: f64) -> Result<()> {
    if !sweep_degrees.is_finite() || (sweep_degrees > 360.0 && sweep_degrees % 360.0 != 0.0) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "sweep_degrees",
            value: sweep_degrees,
            min: 0.0,
            max: 360.0,
        }
        .into());
    }
    if sweep_degrees % 360.0 == 0.0 {
        tracing::warn!(sweep = sweep_degrees, "rejecting degenerate arc sweep");
        return Err(GeometryError::DegenerateArc { sweep_degrees }.into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FemgeoError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn arc_between(a: Point2, b: Point2, sweep: f64) -> (NodeRegistry, ArcSegment) {
        let mut nodes = NodeRegistry::new();
        let first = nodes.create_node(a).unwrap();
        let second = nodes.create_node(b).unwrap();
        let arc = ArcSegment::new(first, second, sweep).unwrap();
        (nodes, arc)
    }

    fn calculated(a: Point2, b: Point2, sweep: f64) -> (NodeRegistry, ArcSegment) {
        let (nodes, mut arc) = arc_between(a, b, sweep);
        arc.calculate(&nodes).unwrap();
        (nodes, arc)
    }

    #[test]
    fn sweep_sign_sets_direction() {
        let (_, mut arc) = arc_between(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), -45.0);
        assert!(!arc.is_counter_clockwise());
        assert_abs_diff_eq!(arc.sweep_degrees(), 45.0);
        assert_abs_diff_eq!(arc.sweep_angle(), -45.0);
        arc.set_sweep_angle(30.0);
        assert!(arc.is_counter_clockwise());
        assert_eq!(arc.segment_count(), DEFAULT_SEGMENT_COUNT);
    }

    #[test]
    fn center_is_equidistant_from_endpoints() {
        let endpoints = [
            (Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)),
            (Point2::new(-1.5, 2.0), Point2::new(3.0, -0.5)),
            (Point2::new(4.0, 4.0), Point2::new(1.0, 7.0)),
            (Point2::new(0.0, -3.0), Point2::new(0.0, 5.0)),
            (Point2::new(10.0, 1.0), Point2::new(-2.0, 1.0)),
        ];
        for (a, b) in endpoints {
            for sweep in [1.0, 30.0, 90.0, 135.0, 179.0, 180.0, -20.0, -120.0, 200.0, -300.0] {
                let (_, arc) = calculated(a, b, sweep);
                let g = arc.geometry().unwrap();
                assert_relative_eq!((g.center - a).norm(), g.radius, max_relative = 1e-9);
                assert_relative_eq!((g.center - b).norm(), g.radius, max_relative = 1e-9);
                assert_relative_eq!((g.midpoint - g.center).norm(), g.radius, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn arc_length_grows_with_sweep() {
        let mut previous = 0.0;
        for step in 1..180 {
            let (_, arc) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), f64::from(step));
            let len = arc.arc_length().unwrap();
            assert!(len > previous, "length {len} at {step} deg not above {previous}");
            previous = len;
        }
        // Chord length is the lower bound and a semicircle the upper.
        assert!(previous > 2.0 && previous < std::f64::consts::PI);
    }

    #[test]
    fn semicircle_on_horizontal_chord() {
        let (_, ccw) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 180.0);
        let g = ccw.geometry().unwrap();
        assert_abs_diff_eq!(g.center.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.center.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.radius, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.midpoint.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.midpoint.y, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.arc_length, std::f64::consts::PI, epsilon = 1e-12);

        let (_, cw) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), -180.0);
        assert_abs_diff_eq!(cw.midpoint().unwrap().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn swapping_endpoints_keeps_the_circle() {
        for sweep in [30.0, 90.0, -150.0, 180.0, 250.0] {
            let (nodes, mut arc) = calculated(Point2::new(0.5, -1.0), Point2::new(2.5, 3.0), sweep);
            let before = *arc.geometry().unwrap();
            arc.swap();
            assert!(arc.is_swapped());
            assert_eq!(arc.is_counter_clockwise(), sweep < 0.0);
            let after = *arc.calculate(&nodes).unwrap();
            assert_abs_diff_eq!(before.center.x, after.center.x, epsilon = 1e-9);
            assert_abs_diff_eq!(before.center.y, after.center.y, epsilon = 1e-9);
            assert_abs_diff_eq!(before.radius, after.radius, epsilon = 1e-9);
            assert_abs_diff_eq!(before.midpoint.x, after.midpoint.x, epsilon = 1e-9);
            assert_abs_diff_eq!(before.midpoint.y, after.midpoint.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_sweeps_are_rejected() {
        for sweep in [0.0, 360.0, -360.0, 720.0] {
            let (nodes, mut arc) = arc_between(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), sweep);
            assert!(matches!(
                arc.calculate(&nodes),
                Err(FemgeoError::Geometry(GeometryError::DegenerateArc { .. }))
            ));
            assert!(arc.geometry().is_err());
        }
    }

    #[test]
    fn out_of_range_sweeps_are_rejected() {
        for sweep in [400.0, f64::NAN, f64::INFINITY] {
            let (nodes, mut arc) = arc_between(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), sweep);
            assert!(matches!(
                arc.calculate(&nodes),
                Err(FemgeoError::Geometry(GeometryError::ParameterOutOfRange { .. }))
            ));
        }
    }

    #[test]
    fn reflex_sweep_goes_the_long_way_round() {
        let r = 2.0_f64.sqrt();
        for (sweep, center_y, mid_y) in [(270.0, -1.0, -1.0 - r), (-270.0, 1.0, 1.0 + r)] {
            let (_, arc) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), sweep);
            let g = arc.geometry().unwrap();
            assert_abs_diff_eq!(g.radius, r, epsilon = 1e-12);
            assert_abs_diff_eq!(g.center.x, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(g.center.y, center_y, epsilon = 1e-12);
            assert_relative_eq!((g.start - g.center).norm(), r, max_relative = 1e-12);
            assert_relative_eq!((g.end - g.center).norm(), r, max_relative = 1e-12);
            assert_abs_diff_eq!(g.midpoint.x, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(g.midpoint.y, mid_y, epsilon = 1e-12);
            assert_abs_diff_eq!(g.arc_length, r * 1.5 * std::f64::consts::PI, epsilon = 1e-12);

            // The far side of the circle is not on the arc.
            let opposite = g.center + (g.center - g.midpoint);
            assert!(arc.distance_to(&opposite).unwrap() > 0.5);
            assert_abs_diff_eq!(arc.distance_to(&g.midpoint).unwrap(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn failed_calculation_keeps_previous_geometry() {
        let (nodes, mut arc) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 90.0);
        let before = *arc.geometry().unwrap();
        arc.set_sweep_angle(360.0);
        assert!(arc.calculate(&nodes).is_err());
        assert_eq!(*arc.geometry().unwrap(), before);
    }

    #[test]
    fn queries_before_calculation_fail() {
        let (_, arc) = arc_between(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 90.0);
        assert!(matches!(
            arc.center(),
            Err(FemgeoError::Geometry(GeometryError::ArcNotCalculated))
        ));
        assert!(arc.left_of(&Point2::origin()).is_err());
        assert!(arc.bounding_edges(None, 0.1).is_err());
    }

    #[test]
    fn calculate_distance_tracks_sweep_change() {
        let (_, mut arc) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 180.0);
        arc.set_sweep_angle(90.0);
        let len = arc.calculate_distance().unwrap();
        assert_abs_diff_eq!(len, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn zero_segment_count_is_rejected() {
        let (_, mut arc) = arc_between(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 90.0);
        assert!(arc.set_segment_count(0).is_err());
        arc.set_segment_count(12).unwrap();
        assert_eq!(arc.segment_count(), 12);
    }

    #[test]
    fn left_of_mixes_chord_and_circle_tests() {
        // Center (1, 1), radius √2, bulge below the chord.
        let (_, arc) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 90.0);
        // Center side: projection decides.
        assert_abs_diff_eq!(arc.left_of(&Point2::new(1.0, 0.5)).unwrap(), 1.0);
        assert_abs_diff_eq!(arc.left_of(&Point2::new(3.0, 0.5)).unwrap(), -1.0);
        // Bulge side: circle decides.
        assert_abs_diff_eq!(arc.left_of(&Point2::new(1.0, -0.2)).unwrap(), 1.0);
        assert_abs_diff_eq!(arc.left_of(&Point2::new(1.0, -1.0)).unwrap(), -1.0);
    }

    #[test]
    fn distance_to_arc_curve() {
        let (_, arc) = calculated(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 180.0);
        // Bulge of the counter-clockwise semicircle is below the chord.
        assert_abs_diff_eq!(arc.distance_to(&Point2::new(1.0, -1.5)).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.distance_to(&Point2::new(1.0, 1.0)).unwrap(), 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn bounding_edges_start_with_tagged_chord() {
        let (_, arc) = calculated(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), 90.0);
        let id = ArcId::default();
        let edges = arc.bounding_edges(Some(id), 0.1).unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].source_arc(), Some(id));
        assert!(edges[1..].iter().all(|e| e.source_arc().is_none()));
        assert_eq!(edges[0].start(), Point2::new(0.0, 0.0));
        assert_eq!(edges[0].end(), Point2::new(1.0, 1.0));
        assert_eq!(edges[1].end(), edges[2].start());
        assert_eq!(edges[2].end(), edges[3].start());
    }
}
