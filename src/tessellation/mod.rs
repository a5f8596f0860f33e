mod tessellate_arc;

pub use tessellate_arc::TessellateArc;

use crate::math::Point2;

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Number of straight pieces in the polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}
