pub mod arc;
pub mod block_label;
pub mod node;
pub mod segment;
pub mod shape;

pub use arc::{ArcGeometry, ArcId, ArcSegment, DEFAULT_SEGMENT_COUNT};
pub use block_label::{BlockLabel, LabelId};
pub use node::{Node, NodeId};
pub use segment::{BoundarySegment, LineId};
pub use shape::{Shape, ShapeRef};
