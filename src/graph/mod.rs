//! Shared object-graph and naming infrastructure used by the optimizer,
//! the code generator, and diagnostic exports.

pub mod namer;
pub mod object_graph;

pub use namer::generate_node_names;
pub use object_graph::{Edge, GraphNode, GraphObject, NodeId, NodeKind, ObjectGraph};
