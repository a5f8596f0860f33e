//! Closed edge loops used for point containment against curved boundaries.
//!
//! An arc cannot be tested with straight-edge algorithms directly, so it is
//! enclosed in a four-edge quadrilateral ([`ArcRegionPolygon`]) whose edges
//! are [`SimplifiedEdge`]s detached from the node graph.

mod arc_polygon;
mod edge;
mod stitch;

pub use arc_polygon::ArcRegionPolygon;
pub use edge::SimplifiedEdge;
pub use stitch::{stitch_edge_loop, LoopOrientation, MIN_REGION_EDGES};
