//! A derived, reference-tracked view over the IR.
//!
//! The graph is an arena: one node per distinct reachable object (by
//! `Arc` pointer identity), indexed by [`NodeId`], with incoming edges
//! stored as index pairs. Traversal is depth-first in declared child
//! order, so positions — and everything downstream that sorts by them —
//! are reproducible run to run. The graph is rebuilt fresh for each
//! consumer and discarded afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::animatables::animatable::Animatable;
use crate::animatables::bezier::PathGeometry;
use crate::ir::effect::Effect;
use crate::ir::layer::{CompositionIr, Layer};
use crate::ir::shape::{
    LinearGradientBrush, RadialGradientBrush, ShapeContent, SolidColorBrush,
};
use crate::ir::transform::Transform;

/// Index of a node in an [`ObjectGraph`]. Ids are assigned in traversal
/// order, so sorting by id is sorting by discovery position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Category of object a node wraps; naming and dedup group by this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Layer,
    Shape,
    Transform,
    Effect,
    SolidColorBrush,
    LinearGradientBrush,
    RadialGradientBrush,
    Geometry,
}

/// A shared reference to one of the IR's object families.
#[derive(Clone, Debug)]
pub enum GraphObject {
    Layer(Arc<Layer>),
    Shape(Arc<ShapeContent>),
    Transform(Arc<Transform>),
    Effect(Arc<Effect>),
    SolidColorBrush(Arc<SolidColorBrush>),
    LinearGradientBrush(Arc<LinearGradientBrush>),
    RadialGradientBrush(Arc<RadialGradientBrush>),
    Geometry(Arc<Animatable<PathGeometry>>),
}

impl GraphObject {
    /// The node category this object belongs to.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Layer(_) => NodeKind::Layer,
            Self::Shape(_) => NodeKind::Shape,
            Self::Transform(_) => NodeKind::Transform,
            Self::Effect(_) => NodeKind::Effect,
            Self::SolidColorBrush(_) => NodeKind::SolidColorBrush,
            Self::LinearGradientBrush(_) => NodeKind::LinearGradientBrush,
            Self::RadialGradientBrush(_) => NodeKind::RadialGradientBrush,
            Self::Geometry(_) => NodeKind::Geometry,
        }
    }

    /// Pointer surrogate used as the identity key.
    fn ptr_key(&self) -> usize {
        match self {
            Self::Layer(rc) => Arc::as_ptr(rc) as usize,
            Self::Shape(rc) => Arc::as_ptr(rc) as usize,
            Self::Transform(rc) => Arc::as_ptr(rc) as usize,
            Self::Effect(rc) => Arc::as_ptr(rc) as usize,
            Self::SolidColorBrush(rc) => Arc::as_ptr(rc) as usize,
            Self::LinearGradientBrush(rc) => Arc::as_ptr(rc) as usize,
            Self::RadialGradientBrush(rc) => Arc::as_ptr(rc) as usize,
            Self::Geometry(rc) => Arc::as_ptr(rc) as usize,
        }
    }

    /// `true` for value-like leaves that [`ObjectGraph::from_composition`]
    /// can be asked to leave out.
    fn is_leaf_value(&self) -> bool {
        matches!(
            self,
            Self::SolidColorBrush(_)
                | Self::LinearGradientBrush(_)
                | Self::RadialGradientBrush(_)
                | Self::Geometry(_)
        )
    }
}

/// An incoming reference: who refers to this node, and at which global
/// discovery position the reference was seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub position: u32,
}

/// One distinct reachable object.
#[derive(Debug)]
pub struct GraphNode {
    pub object: GraphObject,
    /// Position in traversal order; equals the node's id.
    pub position: u32,
    pub in_edges: Vec<Edge>,
}

impl GraphNode {
    /// Number of references to this object from within the graph.
    pub fn reference_count(&self) -> usize {
        self.in_edges.len()
    }
}

/// The reachability graph of a composition.
#[derive(Debug)]
pub struct ObjectGraph {
    nodes: Vec<GraphNode>,
    ids_by_ptr: HashMap<usize, NodeId>,
    /// Top-level layers in draw order. May repeat an id when dedup made
    /// two top-level layers share one object.
    roots: Vec<NodeId>,
    include_leaf_values: bool,
    edge_counter: u32,
}

impl ObjectGraph {
    /// Build the graph of everything reachable from a composition's
    /// layers. When `include_leaf_values` is false, value-like leaves
    /// (brushes, path geometries) are not given nodes.
    pub fn from_composition(ir: &CompositionIr, include_leaf_values: bool) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            ids_by_ptr: HashMap::new(),
            roots: Vec::new(),
            include_leaf_values,
            edge_counter: 0,
        };

        for layer in &ir.layers {
            let id = graph.reference(None, GraphObject::Layer(Arc::clone(layer)));
            graph.roots.push(id.expect("layers are never leaf values"));
        }

        graph
    }

    /// All nodes, in traversal order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Top-level layer nodes in draw order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.0 as usize]
    }

    /// The id assigned to `object`, if it was reachable.
    pub fn id_of(&self, object: &GraphObject) -> Option<NodeId> {
        self.ids_by_ptr.get(&object.ptr_key()).copied()
    }

    /// Record a reference to `object` from `from`, creating the node
    /// and traversing its children on first sight. Returns `None` when
    /// the object is an excluded leaf value.
    fn reference(&mut self, from: Option<NodeId>, object: GraphObject) -> Option<NodeId> {
        if !self.include_leaf_values && object.is_leaf_value() {
            return None;
        }

        let key = object.ptr_key();
        let id = match self.ids_by_ptr.get(&key) {
            Some(id) => *id,
            None => {
                let id = NodeId(self.nodes.len() as u32);
                self.ids_by_ptr.insert(key, id);
                self.nodes.push(GraphNode {
                    object: object.clone(),
                    position: id.0,
                    in_edges: Vec::new(),
                });
                self.visit_children(id, &object);
                id
            }
        };

        if let Some(from) = from {
            let position = self.edge_counter;
            self.edge_counter += 1;
            self.nodes[id.0 as usize]
                .in_edges
                .push(Edge { from, position });
        }

        Some(id)
    }

    fn visit_children(&mut self, id: NodeId, object: &GraphObject) {
        match object.clone() {
            GraphObject::Layer(layer) => self.visit_layer(id, &layer),
            GraphObject::Shape(shape) => self.visit_shape(id, &shape),
            // Transforms, effects, brushes, and geometries hold no
            // object references of their own.
            GraphObject::Transform(_)
            | GraphObject::Effect(_)
            | GraphObject::SolidColorBrush(_)
            | GraphObject::LinearGradientBrush(_)
            | GraphObject::RadialGradientBrush(_)
            | GraphObject::Geometry(_) => {}
        }
    }

    fn visit_layer(&mut self, id: NodeId, layer: &Layer) {
        let props = layer.props();
        self.reference(Some(id), GraphObject::Transform(Arc::clone(&props.transform)));
        for mask in &props.masks {
            self.reference(Some(id), GraphObject::Geometry(Arc::clone(&mask.geometry)));
        }
        for effect in &props.effects {
            self.reference(Some(id), GraphObject::Effect(Arc::clone(effect)));
        }

        match layer {
            Layer::PreComp(pre) => {
                for nested in &pre.layers {
                    self.reference(Some(id), GraphObject::Layer(Arc::clone(nested)));
                }
            }
            Layer::Shape(shape) => {
                for content in &shape.contents {
                    self.reference(Some(id), GraphObject::Shape(Arc::clone(content)));
                }
            }
            Layer::Solid(_) | Layer::Image(_) | Layer::Null(_) | Layer::Text(_) => {}
        }
    }

    fn visit_shape(&mut self, id: NodeId, shape: &ShapeContent) {
        match shape {
            ShapeContent::Group(group) => {
                for content in &group.contents {
                    self.reference(Some(id), GraphObject::Shape(Arc::clone(content)));
                }
            }
            ShapeContent::Transform(transform) => {
                self.reference(Some(id), GraphObject::Transform(Arc::clone(transform)));
            }
            ShapeContent::Path(path) => {
                self.reference(Some(id), GraphObject::Geometry(Arc::clone(&path.geometry)));
            }
            ShapeContent::Repeater(repeater) => {
                self.reference(
                    Some(id),
                    GraphObject::Transform(Arc::clone(&repeater.transform)),
                );
            }
            ShapeContent::SolidColorFill(fill) => {
                self.reference(
                    Some(id),
                    GraphObject::SolidColorBrush(Arc::clone(&fill.brush)),
                );
            }
            ShapeContent::SolidColorStroke(stroke) => {
                self.reference(
                    Some(id),
                    GraphObject::SolidColorBrush(Arc::clone(&stroke.brush)),
                );
            }
            ShapeContent::LinearGradientFill(fill) => {
                self.reference(
                    Some(id),
                    GraphObject::LinearGradientBrush(Arc::clone(&fill.brush)),
                );
            }
            ShapeContent::LinearGradientStroke(stroke) => {
                self.reference(
                    Some(id),
                    GraphObject::LinearGradientBrush(Arc::clone(&stroke.brush)),
                );
            }
            ShapeContent::RadialGradientFill(fill) => {
                self.reference(
                    Some(id),
                    GraphObject::RadialGradientBrush(Arc::clone(&fill.brush)),
                );
            }
            ShapeContent::RadialGradientStroke(stroke) => {
                self.reference(
                    Some(id),
                    GraphObject::RadialGradientBrush(Arc::clone(&stroke.brush)),
                );
            }
            ShapeContent::Ellipse(_)
            | ShapeContent::Rectangle(_)
            | ShapeContent::Polystar(_)
            | ShapeContent::TrimPath(_)
            | ShapeContent::MergePaths(_)
            | ShapeContent::RoundCorners(_) => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/object_graph.rs"]
mod tests;
