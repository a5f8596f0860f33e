use super::arc::{ArcId, ArcSegment};
use super::block_label::{BlockLabel, LabelId};
use super::node::{Node, NodeId};
use super::segment::{BoundarySegment, LineId};

/// Identity of any drawable entity in a geometry model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Node(NodeId),
    Line(LineId),
    Arc(ArcId),
    BlockLabel(LabelId),
}

/// Borrowed view of a drawable entity, for renderers and other consumers that
/// dispatch on the kind of shape.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Node(&'a Node),
    Line(LineId, &'a BoundarySegment),
    Arc(ArcId, &'a ArcSegment),
    BlockLabel(LabelId, &'a BlockLabel),
}

impl ShapeRef<'_> {
    /// The identity of the viewed entity.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Node(node) => Shape::Node(node.id()),
            Self::Line(id, _) => Shape::Line(*id),
            Self::Arc(id, _) => Shape::Arc(*id),
            Self::BlockLabel(id, _) => Shape::BlockLabel(*id),
        }
    }
}
