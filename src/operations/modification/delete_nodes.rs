use crate::error::Result;
use crate::geometry::{ArcId, LineId, NodeId};
use crate::model::GeometryModel;

/// Everything removed by a [`DeleteNodes`] operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedShapes {
    pub nodes: Vec<NodeId>,
    pub lines: Vec<LineId>,
    pub arcs: Vec<ArcId>,
}

/// Deletes nodes together with every line and arc that ends at one of them,
/// so no segment is left referring to a missing node.
pub struct DeleteNodes {
    nodes: Vec<NodeId>,
}

impl DeleteNodes {
    /// Creates a new `DeleteNodes` operation.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Executes the deletion.
    ///
    /// # Errors
    ///
    /// Returns an error if any node is unknown; the model is left untouched
    /// in that case.
    pub fn execute(&self, model: &mut GeometryModel) -> Result<DeletedShapes> {
        for &id in &self.nodes {
            model.nodes().resolve(id)?;
        }

        let mut deleted = DeletedShapes::default();
        for &id in &self.nodes {
            if !model.nodes().contains(id) {
                continue;
            }
            let incident = model.segments_at(id);
            for line in incident.lines {
                model.remove_line(line)?;
                deleted.lines.push(line);
            }
            for arc in incident.arcs {
                model.remove_arc(arc)?;
                deleted.arcs.push(arc);
            }
            model.nodes_mut().remove(id)?;
            deleted.nodes.push(id);
        }

        tracing::debug!(
            nodes = deleted.nodes.len(),
            lines = deleted.lines.len(),
            arcs = deleted.arcs.len(),
            "nodes deleted"
        );
        Ok(deleted)
    }
}
