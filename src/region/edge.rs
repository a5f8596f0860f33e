use crate::geometry::ArcId;
use crate::math::{side_of_line, Point2};

/// A lightweight straight edge: two endpoints and an associated midpoint.
///
/// Used to assemble region polygons without touching the node registry. When
/// the edge stands in for an arc's chord, `source_arc` names that arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifiedEdge {
    start: Point2,
    end: Point2,
    mid: Point2,
    source_arc: Option<ArcId>,
    swapped: bool,
    marked_for_deletion: bool,
}

impl SimplifiedEdge {
    /// Creates an edge from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2, mid: Point2, source_arc: Option<ArcId>) -> Self {
        Self {
            start,
            end,
            mid,
            source_arc,
            swapped: false,
            marked_for_deletion: false,
        }
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// The edge's associated midpoint. For the far edge of an arc box this is
    /// the reference point beyond the arc, not the geometric midpoint.
    #[must_use]
    pub fn mid(&self) -> Point2 {
        self.mid
    }

    /// The arc this edge represents, if any.
    #[must_use]
    pub fn source_arc(&self) -> Option<ArcId> {
        self.source_arc
    }

    #[must_use]
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    #[must_use]
    pub fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }

    pub fn mark_for_deletion(&mut self) {
        self.marked_for_deletion = true;
    }

    /// Exchanges start and end and toggles the swapped flag.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.swapped = !self.swapped;
    }

    /// Signed side of `point` relative to start -> end: positive left,
    /// negative right, zero on the line.
    #[must_use]
    pub fn side_of(&self, point: &Point2) -> f64 {
        side_of_line(&self.start, &self.end, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_toggles_and_flips_side() {
        let mut edge = SimplifiedEdge::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.0),
            None,
        );
        let above = Point2::new(0.5, 1.0);
        assert!(edge.side_of(&above) > 0.0);
        edge.swap();
        assert!(edge.is_swapped());
        assert_eq!(edge.start(), Point2::new(1.0, 0.0));
        assert!(edge.side_of(&above) < 0.0);
        edge.swap();
        assert!(!edge.is_swapped());
    }

    #[test]
    fn deletion_mark_is_sticky() {
        let mut edge = SimplifiedEdge::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.5),
            None,
        );
        assert!(!edge.is_marked_for_deletion());
        edge.mark_for_deletion();
        edge.swap();
        assert!(edge.is_marked_for_deletion());
    }
}
