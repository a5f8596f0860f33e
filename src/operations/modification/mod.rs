mod delete_nodes;
mod move_node;

pub use delete_nodes::{DeleteNodes, DeletedShapes};
pub use move_node::{MoveNode, MovedNode};
