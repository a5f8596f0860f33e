use crate::error::{GeometryError, RegistryError, Result};
use crate::math::{midpoint, side_of_line, Point2};
use crate::region::SimplifiedEdge;
use crate::registry::NodeRegistry;

use super::node::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for a straight boundary segment in the geometry model.
    pub struct LineId;
}

/// A straight boundary edge between two registered nodes.
///
/// Only node ids are stored; coordinates are resolved through the
/// [`NodeRegistry`] on every query, so moving a node is immediately visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySegment {
    first: NodeId,
    second: NodeId,
    swapped: bool,
}

impl BoundarySegment {
    /// Creates a segment running from `first` to `second`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if both ids are the same node.
    pub fn new(first: NodeId, second: NodeId) -> Result<Self> {
        if first == second {
            return Err(GeometryError::Degenerate(format!(
                "segment endpoints must differ, both are node {first}"
            ))
            .into());
        }
        Ok(Self {
            first,
            second,
            swapped: false,
        })
    }

    /// Returns the id of the first (start) node.
    #[must_use]
    pub fn first(&self) -> NodeId {
        self.first
    }

    /// Returns the id of the second (end) node.
    #[must_use]
    pub fn second(&self) -> NodeId {
        self.second
    }

    /// Whether the endpoints are exchanged relative to creation order.
    #[must_use]
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    /// Returns whether `node` is one of the segment's endpoints.
    #[must_use]
    pub fn references(&self, node: NodeId) -> bool {
        self.first == node || self.second == node
    }

    /// Exchanges the endpoints and toggles the swapped flag. The geometric
    /// meaning of the segment does not change.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.first, &mut self.second);
        self.swapped = !self.swapped;
    }

    /// Resolves both endpoint positions.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NodeNotFound`] if either node is missing.
    pub fn endpoints(&self, nodes: &NodeRegistry) -> std::result::Result<(Point2, Point2), RegistryError> {
        Ok((nodes.point(self.first)?, nodes.point(self.second)?))
    }

    /// Euclidean length of the segment.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is missing.
    pub fn length(&self, nodes: &NodeRegistry) -> Result<f64> {
        let (a, b) = self.endpoints(nodes)?;
        Ok((b - a).norm())
    }

    /// Midpoint of the segment.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is missing.
    pub fn midpoint(&self, nodes: &NodeRegistry) -> Result<Point2> {
        let (a, b) = self.endpoints(nodes)?;
        Ok(midpoint(&a, &b))
    }

    /// Signed side of `point` relative to the directed line first -> second.
    ///
    /// Positive when left, negative when right, zero when on the line. No
    /// tolerance is applied; callers compare against their own epsilon.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is missing.
    pub fn side_of(&self, nodes: &NodeRegistry, point: &Point2) -> Result<f64> {
        let (a, b) = self.endpoints(nodes)?;
        Ok(side_of_line(&a, &b, point))
    }

    /// The segment as a single simplified edge, for region assembly.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is missing.
    pub fn bounding_edges(&self, nodes: &NodeRegistry) -> Result<Vec<SimplifiedEdge>> {
        let (a, b) = self.endpoints(nodes)?;
        Ok(vec![SimplifiedEdge::new(a, b, midpoint(&a, &b), None)])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FemgeoError;
    use approx::assert_abs_diff_eq;

    fn setup() -> (NodeRegistry, BoundarySegment) {
        let mut nodes = NodeRegistry::new();
        let a = nodes.create_node(Point2::new(0.0, 0.0)).unwrap();
        let b = nodes.create_node(Point2::new(3.0, 4.0)).unwrap();
        (nodes, BoundarySegment::new(a, b).unwrap())
    }

    #[test]
    fn length_and_midpoint() {
        let (nodes, seg) = setup();
        assert_abs_diff_eq!(seg.length(&nodes).unwrap(), 5.0, epsilon = 1e-12);
        let m = seg.midpoint(&nodes).unwrap();
        assert_abs_diff_eq!(m.x, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(m.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn side_of_follows_direction() {
        let (nodes, mut seg) = setup();
        let left = Point2::new(0.0, 4.0);
        assert!(seg.side_of(&nodes, &left).unwrap() > 0.0);
        seg.swap();
        assert!(seg.is_swapped());
        assert!(seg.side_of(&nodes, &left).unwrap() < 0.0);
        seg.swap();
        assert!(!seg.is_swapped());
    }

    #[test]
    fn same_node_twice_is_rejected() {
        let id = NodeId::new(7);
        assert!(matches!(
            BoundarySegment::new(id, id),
            Err(FemgeoError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn dangling_node_fails() {
        let (mut nodes, seg) = setup();
        nodes.remove(seg.second()).unwrap();
        assert!(matches!(
            seg.length(&nodes),
            Err(FemgeoError::Registry(RegistryError::NodeNotFound(_)))
        ));
    }

    #[test]
    fn bounding_edges_is_single_chord() {
        let (nodes, seg) = setup();
        let edges = seg.bounding_edges(&nodes).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source_arc(), None);
        assert_abs_diff_eq!(edges[0].mid().x, 1.5, epsilon = 1e-12);
    }
}
