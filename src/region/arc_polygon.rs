use crate::error::Result;
use crate::geometry::ArcSegment;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

use super::stitch::{stitch_edge_loop, LoopOrientation};
use super::SimplifiedEdge;

/// A closed quadrilateral enclosing an arc's bulge, used for point
/// containment.
///
/// The edges are stitched into a consistent loop on construction, so
/// [`is_inside`](Self::is_inside) is a pure query and gives the same answer
/// regardless of the order or direction the edges were supplied in.
#[derive(Debug, Clone)]
pub struct ArcRegionPolygon {
    edges: Vec<SimplifiedEdge>,
    arc: ArcSegment,
    orientation: LoopOrientation,
}

impl ArcRegionPolygon {
    /// Stitches `edges` into a closed loop around `arc`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::MalformedRegion`](crate::error::RegionError::MalformedRegion)
    /// if the edges do not form a single closed loop of at least four edges.
    pub fn new(mut edges: Vec<SimplifiedEdge>, arc: ArcSegment) -> Result<Self> {
        let orientation = stitch_edge_loop(&mut edges)?;
        Ok(Self {
            edges,
            arc,
            orientation,
        })
    }

    /// The stitched edges, each ending where the next begins.
    #[must_use]
    pub fn edges(&self) -> &[SimplifiedEdge] {
        &self.edges
    }

    #[must_use]
    pub fn into_edges(self) -> Vec<SimplifiedEdge> {
        self.edges
    }

    /// The arc this region encloses.
    #[must_use]
    pub fn arc(&self) -> &ArcSegment {
        &self.arc
    }

    #[must_use]
    pub fn first_edge_swapped(&self) -> bool {
        self.orientation.first_edge_swapped
    }

    #[must_use]
    pub fn reverse_winding(&self) -> bool {
        self.orientation.reverse_winding
    }

    /// Signed area of the stitched loop, negative when it runs clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let corners: Vec<Point2> = self.edges.iter().map(SimplifiedEdge::start).collect();
        signed_area_2d(&corners)
    }

    /// Winding count of the loop around `point`.
    ///
    /// Every edge crossing the horizontal through `point` contributes the sign
    /// of the point's side of that edge, negated for clockwise loops. An
    /// enclosed point therefore scores 2 and an outside point 0.
    #[must_use]
    pub fn winding_number(&self, point: &Point2) -> i32 {
        self.edges
            .iter()
            .map(|edge| {
                let (start, end) = (edge.start(), edge.end());
                let upward = start.y <= point.y && end.y > point.y;
                let downward = start.y > point.y && end.y <= point.y;
                if !(upward || downward) {
                    return 0;
                }
                let mut side = edge.side_of(point);
                if self.orientation.reverse_winding {
                    side = -side;
                }
                if side > 0.0 {
                    1
                } else if side < 0.0 {
                    -1
                } else {
                    0
                }
            })
            .sum()
    }

    /// Whether `point` lies inside the region. Points exactly on an edge may
    /// fall either way.
    #[must_use]
    pub fn is_inside(&self, point: &Point2) -> bool {
        self.winding_number(point) != 0
    }
}
