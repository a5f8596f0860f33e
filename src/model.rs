use slotmap::SlotMap;

use crate::error::{RegistryError, Result};
use crate::geometry::{
    ArcGeometry, ArcId, ArcSegment, BlockLabel, BoundarySegment, LabelId, LineId, NodeId, ShapeRef,
};
use crate::math::Point2;
use crate::region::ArcRegionPolygon;
use crate::registry::NodeRegistry;
use crate::settings::KernelSettings;

/// Lines and arcs incident to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentSegments {
    pub lines: Vec<LineId>,
    pub arcs: Vec<ArcId>,
}

impl IncidentSegments {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.arcs.is_empty()
    }
}

/// Central arena that owns the boundary geometry of one problem.
///
/// Nodes live in a [`NodeRegistry`]; lines, arcs and block labels live in
/// generational arenas and refer to nodes by id.
#[derive(Debug, Default)]
pub struct GeometryModel {
    nodes: NodeRegistry,
    lines: SlotMap<LineId, BoundarySegment>,
    arcs: SlotMap<ArcId, ArcSegment>,
    labels: SlotMap<LabelId, BlockLabel>,
    settings: KernelSettings,
}

impl GeometryModel {
    /// Creates a new, empty model with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty model with the given settings.
    #[must_use]
    pub fn with_settings(settings: KernelSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> &KernelSettings {
        &self.settings
    }

    #[must_use]
    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    /// Mutable access to the node registry. Moving a node this way leaves
    /// incident arcs with stale geometry; see
    /// [`MoveNode`](crate::operations::modification::MoveNode).
    pub fn nodes_mut(&mut self) -> &mut NodeRegistry {
        &mut self.nodes
    }

    // --- Node operations ---

    /// Inserts a node and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if node ids are exhausted.
    pub fn add_node(&mut self, point: Point2) -> Result<NodeId> {
        Ok(self.nodes.create_node(point)?)
    }

    /// Inserts a node unless an existing node lies within `tolerance` of
    /// `point`, in which case the nearest such node's ID is returned instead.
    ///
    /// # Errors
    ///
    /// Returns an error if node ids are exhausted.
    pub fn add_node_within(&mut self, point: Point2, tolerance: f64) -> Result<NodeId> {
        let existing = self
            .nodes
            .iter()
            .map(|n| (n.id(), n.distance_to(&point)))
            .filter(|(_, d)| *d < tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((id, _)) = existing {
            tracing::trace!(%id, "node placement merged with existing node");
            return Ok(id);
        }
        self.add_node(point)
    }

    // --- Line operations ---

    /// Inserts a straight segment between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is unknown or both ids are equal.
    pub fn add_line(&mut self, first: NodeId, second: NodeId) -> Result<LineId> {
        self.nodes.resolve(first)?;
        self.nodes.resolve(second)?;
        Ok(self.lines.insert(BoundarySegment::new(first, second)?))
    }

    /// Returns a reference to the line, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn line(&self, id: LineId) -> Result<&BoundarySegment> {
        Ok(self
            .lines
            .get(id)
            .ok_or(RegistryError::EntityNotFound("line"))?)
    }

    /// Returns a mutable reference to the line, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn line_mut(&mut self, id: LineId) -> Result<&mut BoundarySegment> {
        Ok(self
            .lines
            .get_mut(id)
            .ok_or(RegistryError::EntityNotFound("line"))?)
    }

    /// Removes a line and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn remove_line(&mut self, id: LineId) -> Result<BoundarySegment> {
        Ok(self
            .lines
            .remove(id)
            .ok_or(RegistryError::EntityNotFound("line"))?)
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &BoundarySegment)> {
        self.lines.iter()
    }

    // --- Arc operations ---

    /// Inserts an arc between two existing nodes and calculates its circle.
    ///
    /// `segment_count` falls back to
    /// [`KernelSettings::default_segment_count`] when `None`. Nothing is
    /// inserted if the arc cannot be calculated.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is unknown, the segment count is zero,
    /// or the arc is degenerate.
    pub fn add_arc(
        &mut self,
        first: NodeId,
        second: NodeId,
        sweep_degrees: f64,
        segment_count: Option<u32>,
    ) -> Result<ArcId> {
        let mut arc = ArcSegment::new(first, second, sweep_degrees)?;
        arc.set_segment_count(segment_count.unwrap_or(self.settings.default_segment_count))?;
        arc.calculate(&self.nodes)?;
        let id = self.arcs.insert(arc);
        tracing::debug!(?id, %first, %second, sweep = sweep_degrees, "arc added");
        Ok(id)
    }

    /// Returns a reference to the arc, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn arc(&self, id: ArcId) -> Result<&ArcSegment> {
        Ok(self
            .arcs
            .get(id)
            .ok_or(RegistryError::EntityNotFound("arc"))?)
    }

    /// Returns a mutable reference to the arc, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn arc_mut(&mut self, id: ArcId) -> Result<&mut ArcSegment> {
        Ok(self
            .arcs
            .get_mut(id)
            .ok_or(RegistryError::EntityNotFound("arc"))?)
    }

    /// Recalculates an arc against the current node positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc is not found or cannot be calculated; the
    /// arc keeps its previous geometry in the latter case.
    pub fn recalculate_arc(&mut self, id: ArcId) -> Result<&ArcGeometry> {
        let arc = self
            .arcs
            .get_mut(id)
            .ok_or(RegistryError::EntityNotFound("arc"))?;
        arc.calculate(&self.nodes)
    }

    /// Builds the containment region of an arc, with its chord tagged by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc is not found or not calculated.
    pub fn arc_region(&self, id: ArcId, margin: f64) -> Result<ArcRegionPolygon> {
        self.arc(id)?.bounding_polygon(Some(id), margin)
    }

    /// Removes an arc and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn remove_arc(&mut self, id: ArcId) -> Result<ArcSegment> {
        Ok(self
            .arcs
            .remove(id)
            .ok_or(RegistryError::EntityNotFound("arc"))?)
    }

    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &ArcSegment)> {
        self.arcs.iter()
    }

    // --- Block label operations ---

    /// Inserts a block label and returns its ID.
    pub fn add_label(&mut self, point: Point2) -> LabelId {
        self.labels.insert(BlockLabel::new(point))
    }

    /// Inserts a block label unless an existing label lies within `tolerance`
    /// of `point`, in which case the nearest such label's ID is returned.
    pub fn add_label_within(&mut self, point: Point2, tolerance: f64) -> LabelId {
        let existing = self
            .labels
            .iter()
            .map(|(id, l)| (id, l.distance_to(&point)))
            .filter(|(_, d)| *d < tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        match existing {
            Some((id, _)) => id,
            None => self.add_label(point),
        }
    }

    /// Returns a reference to the label, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn label(&self, id: LabelId) -> Result<&BlockLabel> {
        Ok(self
            .labels
            .get(id)
            .ok_or(RegistryError::EntityNotFound("block label"))?)
    }

    /// Returns a mutable reference to the label, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn label_mut(&mut self, id: LabelId) -> Result<&mut BlockLabel> {
        Ok(self
            .labels
            .get_mut(id)
            .ok_or(RegistryError::EntityNotFound("block label"))?)
    }

    /// Removes a label and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn remove_label(&mut self, id: LabelId) -> Result<BlockLabel> {
        Ok(self
            .labels
            .remove(id)
            .ok_or(RegistryError::EntityNotFound("block label"))?)
    }

    pub fn labels(&self) -> impl Iterator<Item = (LabelId, &BlockLabel)> {
        self.labels.iter()
    }

    // --- Whole-model queries ---

    /// Every entity of the model: nodes, then block labels, lines and arcs.
    pub fn shapes(&self) -> impl Iterator<Item = ShapeRef<'_>> {
        self.nodes
            .iter()
            .map(ShapeRef::Node)
            .chain(self.labels.iter().map(|(id, l)| ShapeRef::BlockLabel(id, l)))
            .chain(self.lines.iter().map(|(id, s)| ShapeRef::Line(id, s)))
            .chain(self.arcs.iter().map(|(id, a)| ShapeRef::Arc(id, a)))
    }

    /// Lines and arcs that have `node` as an endpoint.
    #[must_use]
    pub fn segments_at(&self, node: NodeId) -> IncidentSegments {
        IncidentSegments {
            lines: self
                .lines
                .iter()
                .filter(|(_, s)| s.references(node))
                .map(|(id, _)| id)
                .collect(),
            arcs: self
                .arcs
                .iter()
                .filter(|(_, a)| a.segment().references(node))
                .map(|(id, _)| id)
                .collect(),
        }
    }
}
