use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::geometry::{Node, NodeId};
use crate::math::Point2;

/// Owns every node and hands out stable numeric identities.
///
/// Segments store only [`NodeId`]s and resolve them here on demand. Ids come
/// from a monotonic counter and are never reused, even after a node is
/// removed, so a stale id fails with [`RegistryError::NodeNotFound`] instead
/// of silently aliasing a newer node.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: BTreeMap<NodeId, Node>,
    next_id: u64,
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl NodeRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new node at `point` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdsExhausted`] once the id counter has no
    /// successor left.
    pub fn create_node(&mut self, point: Point2) -> Result<NodeId, RegistryError> {
        let id = NodeId::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(RegistryError::IdsExhausted)?;
        self.nodes.insert(id, Node::new(id, point));
        tracing::trace!(%id, x = point.x, y = point.y, "node created");
        Ok(id)
    }

    /// Re-inserts a node under a previously assigned id (reloading saved
    /// geometry). The counter is advanced past `id` so later nodes never
    /// collide with it.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateNode`] if the id is already in use.
    /// - [`RegistryError::IdsExhausted`] if no id would be left after `id`.
    pub fn restore(&mut self, id: NodeId, point: Point2) -> Result<(), RegistryError> {
        if self.nodes.contains_key(&id) {
            return Err(RegistryError::DuplicateNode(id));
        }
        let after = id.get().checked_add(1).ok_or(RegistryError::IdsExhausted)?;
        self.nodes.insert(id, Node::new(id, point));
        self.next_id = self.next_id.max(after);
        Ok(())
    }

    /// Returns the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NodeNotFound`] if the id is unknown.
    pub fn resolve(&self, id: NodeId) -> Result<&Node, RegistryError> {
        self.nodes.get(&id).ok_or(RegistryError::NodeNotFound(id))
    }

    /// Returns a mutable reference to the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NodeNotFound`] if the id is unknown.
    pub fn resolve_mut(&mut self, id: NodeId) -> Result<&mut Node, RegistryError> {
        self.nodes.get_mut(&id).ok_or(RegistryError::NodeNotFound(id))
    }

    /// Returns the position of the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NodeNotFound`] if the id is unknown.
    pub fn point(&self, id: NodeId) -> Result<Point2, RegistryError> {
        self.resolve(id).map(|node| node.point)
    }

    /// Moves a node. Segments referencing it keep stale derived state until
    /// they are recalculated.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NodeNotFound`] if the id is unknown.
    pub fn move_node(&mut self, id: NodeId, to: Point2) -> Result<(), RegistryError> {
        self.resolve_mut(id)?.point = to;
        Ok(())
    }

    /// Removes a node and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NodeNotFound`] if the id is unknown.
    pub fn remove(&mut self, id: NodeId) -> Result<Node, RegistryError> {
        self.nodes.remove(&id).ok_or(RegistryError::NodeNotFound(id))
    }

    /// Returns whether a node with the given id exists.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the registry holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over nodes in ascending id (creation) order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }
}
