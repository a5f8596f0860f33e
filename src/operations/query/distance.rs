use crate::error::Result;
use crate::geometry::{ArcId, LineId};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;
use crate::model::GeometryModel;

/// Computes the shortest distance from a point to a straight segment.
pub struct LineDistance {
    line: LineId,
    point: Point2,
}

impl LineDistance {
    /// Creates a new `LineDistance` query.
    #[must_use]
    pub fn new(line: LineId, point: Point2) -> Self {
        Self { line, point }
    }

    /// Executes the query, returning the distance.
    ///
    /// # Errors
    ///
    /// Returns an error if the line or one of its nodes is not found.
    pub fn execute(&self, model: &GeometryModel) -> Result<f64> {
        let (a, b) = model.line(self.line)?.endpoints(model.nodes())?;
        Ok(point_to_segment_dist(&self.point, &a, &b))
    }
}

/// Computes the shortest distance from a point to an arc curve.
pub struct ArcDistance {
    arc: ArcId,
    point: Point2,
}

impl ArcDistance {
    /// Creates a new `ArcDistance` query.
    #[must_use]
    pub fn new(arc: ArcId, point: Point2) -> Self {
        Self { arc, point }
    }

    /// Executes the query, returning the distance.
    ///
    /// Uses the arc's calculated geometry, which may lag behind node moves
    /// that were not followed by a recalculation.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc is not found.
    pub fn execute(&self, model: &GeometryModel) -> Result<f64> {
        model.arc(self.arc)?.distance_to(&self.point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn line_distance_to_interior_and_end() {
        let mut model = GeometryModel::new();
        let a = model.add_node(Point2::new(0.0, 0.0)).unwrap();
        let b = model.add_node(Point2::new(4.0, 0.0)).unwrap();
        let line = model.add_line(a, b).unwrap();

        let d = LineDistance::new(line, Point2::new(2.0, 3.0)).execute(&model).unwrap();
        assert_abs_diff_eq!(d, 3.0, epsilon = 1e-12);
        let d = LineDistance::new(line, Point2::new(7.0, 4.0)).execute(&model).unwrap();
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn arc_distance_on_semicircle() {
        let mut model = GeometryModel::new();
        let a = model.add_node(Point2::new(0.0, 0.0)).unwrap();
        let b = model.add_node(Point2::new(2.0, 0.0)).unwrap();
        let arc = model.add_arc(a, b, 180.0, None).unwrap();

        let d = ArcDistance::new(arc, Point2::new(1.0, -3.0)).execute(&model).unwrap();
        assert_abs_diff_eq!(d, 2.0, epsilon = 1e-12);
        let d = ArcDistance::new(arc, Point2::new(1.0, 0.0)).execute(&model).unwrap();
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn unknown_ids_fail() {
        let mut model = GeometryModel::new();
        let a = model.add_node(Point2::new(0.0, 0.0)).unwrap();
        let b = model.add_node(Point2::new(2.0, 0.0)).unwrap();
        let line = model.add_line(a, b).unwrap();
        model.remove_line(line).unwrap();
        assert!(LineDistance::new(line, Point2::origin()).execute(&model).is_err());
    }
}
