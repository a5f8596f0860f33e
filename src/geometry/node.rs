use std::fmt;

use crate::math::Point2;

/// Stable numeric identity of a node.
///
/// Assigned monotonically by the [`NodeRegistry`](crate::registry::NodeRegistry)
/// and never reused, so segments can refer to nodes by id alone and a
/// geometry set can be saved as ids plus coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw id, e.g. one read back from a saved file.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A boundary endpoint placed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    /// Position of the node in model coordinates.
    pub point: Point2,
}

impl Node {
    /// Creates a node with the given identity.
    #[must_use]
    pub fn new(id: NodeId, point: Point2) -> Self {
        Self { id, point }
    }

    /// Returns the node's identity.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Distance from the node to `point`.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        (self.point - point).norm()
    }
}
