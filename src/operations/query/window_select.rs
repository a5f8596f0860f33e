use crate::error::Result;
use crate::geometry::{ArcId, BoundarySegment, LabelId, LineId, NodeId};
use crate::math::Point2;
use crate::model::GeometryModel;

/// Shapes captured by a selection window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub nodes: Vec<NodeId>,
    pub labels: Vec<LabelId>,
    pub lines: Vec<LineId>,
    pub arcs: Vec<ArcId>,
}

impl Selection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.labels.is_empty() && self.lines.is_empty() && self.arcs.is_empty()
    }
}

/// Selects every shape inside an axis-aligned window.
///
/// Nodes and labels are selected by position. A line or arc is selected when
/// both of its endpoint nodes are.
pub struct WindowSelect {
    min: Point2,
    max: Point2,
}

impl WindowSelect {
    /// Creates a new `WindowSelect` query from two opposite corners, given in
    /// any order.
    #[must_use]
    pub fn new(corner_a: Point2, corner_b: Point2) -> Self {
        Self {
            min: Point2::new(corner_a.x.min(corner_b.x), corner_a.y.min(corner_b.y)),
            max: Point2::new(corner_a.x.max(corner_b.x), corner_a.y.max(corner_b.y)),
        }
    }

    fn contains(&self, point: &Point2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    fn captures(&self, segment: &BoundarySegment, model: &GeometryModel) -> Result<bool> {
        let (a, b) = segment.endpoints(model.nodes())?;
        Ok(self.contains(&a) && self.contains(&b))
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment refers to a missing node.
    pub fn execute(&self, model: &GeometryModel) -> Result<Selection> {
        let mut selection = Selection {
            nodes: model
                .nodes()
                .iter()
                .filter(|n| self.contains(&n.point))
                .map(|n| n.id())
                .collect(),
            labels: model
                .labels()
                .filter(|(_, l)| self.contains(&l.point))
                .map(|(id, _)| id)
                .collect(),
            ..Selection::default()
        };
        for (id, line) in model.lines() {
            if self.captures(line, model)? {
                selection.lines.push(id);
            }
        }
        for (id, arc) in model.arcs() {
            if self.captures(arc.segment(), model)? {
                selection.arcs.push(id);
            }
        }
        Ok(selection)
    }
}
