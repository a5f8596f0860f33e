use crate::error::{FemgeoError, Result};
use crate::geometry::{ArcId, NodeId};
use crate::math::Point2;
use crate::model::GeometryModel;

/// Outcome of a [`MoveNode`] operation.
#[derive(Debug, Default)]
pub struct MovedNode {
    /// Incident arcs recalculated against the new position.
    pub recalculated: Vec<ArcId>,
    /// Incident arcs that could not be recalculated and keep their previous
    /// geometry.
    pub failed: Vec<(ArcId, FemgeoError)>,
}

/// Moves a node and recalculates every arc that ends at it.
///
/// Straight segments hold no derived state and need no update.
pub struct MoveNode {
    node: NodeId,
    to: Point2,
}

impl MoveNode {
    /// Creates a new `MoveNode` operation.
    #[must_use]
    pub fn new(node: NodeId, to: Point2) -> Self {
        Self { node, to }
    }

    /// Executes the move.
    ///
    /// An incident arc that becomes degenerate (for example when both of its
    /// endpoints now coincide) is reported in [`MovedNode::failed`] rather
    /// than aborting the move.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is unknown.
    pub fn execute(&self, model: &mut GeometryModel) -> Result<MovedNode> {
        model.nodes_mut().move_node(self.node, self.to)?;

        let mut moved = MovedNode::default();
        for arc in model.segments_at(self.node).arcs {
            match model.recalculate_arc(arc) {
                Ok(_) => moved.recalculated.push(arc),
                Err(err) => {
                    tracing::warn!(?arc, node = %self.node, %err, "arc not recalculated after move");
                    moved.failed.push((arc, err));
                }
            }
        }
        Ok(moved)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn incident_arcs_follow_the_node() {
        let mut model = GeometryModel::new();
        let a = model.add_node(Point2::new(0.0, 0.0)).unwrap();
        let b = model.add_node(Point2::new(2.0, 0.0)).unwrap();
        let arc = model.add_arc(a, b, 90.0, None).unwrap();

        let moved = MoveNode::new(b, Point2::new(0.0, 2.0)).execute(&mut model).unwrap();
        assert_eq!(moved.recalculated, vec![arc]);
        assert!(moved.failed.is_empty());

        let g = model.arc(arc).unwrap().geometry().unwrap();
        assert_eq!(g.end, Point2::new(0.0, 2.0));
        assert_relative_eq!((g.center - g.end).norm(), g.radius, max_relative = 1e-9);
    }

    #[test]
    fn collapsing_an_arc_reports_failure() {
        let mut model = GeometryModel::new();
        let a = model.add_node(Point2::new(0.0, 0.0)).unwrap();
        let b = model.add_node(Point2::new(2.0, 0.0)).unwrap();
        let arc = model.add_arc(a, b, 90.0, None).unwrap();
        let before = *model.arc(arc).unwrap().geometry().unwrap();

        let moved = MoveNode::new(b, Point2::new(0.0, 0.0)).execute(&mut model).unwrap();
        assert!(moved.recalculated.is_empty());
        assert_eq!(moved.failed.len(), 1);
        assert_eq!(*model.arc(arc).unwrap().geometry().unwrap(), before);
    }

    #[test]
    fn unknown_node_fails() {
        let mut model = GeometryModel::new();
        assert!(MoveNode::new(NodeId::new(3), Point2::origin()).execute(&mut model).is_err());
    }
}
