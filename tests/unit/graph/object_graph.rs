use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::animatables::Animatable;
use crate::foundation::core::{Color, Opacity};
use crate::ir::layer::{
    CompositionIr, LayerProps, ShapeLayer, SolidLayer,
};
use crate::ir::shape::{ShapeGroup, SolidColorFill};

fn props(name: &str, index: i64) -> LayerProps {
    LayerProps {
        name: name.to_owned(),
        index,
        parent_index: None,
        in_point: 0.0,
        out_point: 60.0,
        is_hidden: false,
        blend_mode: Default::default(),
        matte_mode: Default::default(),
        transform: Arc::new(Transform::identity()),
        masks: vec![],
        effects: vec![],
    }
}

fn brush(r: f64) -> Arc<SolidColorBrush> {
    Arc::new(SolidColorBrush {
        color: Animatable::new_static(Color::from_floats(1.0, r, 0.0, 0.0)),
        opacity: Animatable::new_static(Opacity::OPAQUE),
    })
}

fn fill(brush: &Arc<SolidColorBrush>) -> Arc<ShapeContent> {
    Arc::new(ShapeContent::SolidColorFill(SolidColorFill {
        name: String::new(),
        fill_rule: Default::default(),
        brush: Arc::clone(brush),
    }))
}

fn composition(layers: Vec<Arc<Layer>>) -> CompositionIr {
    CompositionIr {
        name: "g".to_owned(),
        width: 100.0,
        height: 100.0,
        frame_rate: 30.0,
        in_point: 0.0,
        out_point: 60.0,
        layers,
        markers: vec![],
    }
}

/// Two fills sharing one brush; a group wrapping one of them.
fn shared_brush_composition() -> CompositionIr {
    let shared = brush(1.0);
    let group = Arc::new(ShapeContent::Group(ShapeGroup {
        name: "wrap".to_owned(),
        contents: vec![fill(&shared)],
    }));
    composition(vec![Arc::new(Layer::Shape(ShapeLayer {
        props: props("art", 0),
        contents: vec![group, fill(&shared)],
    }))])
}

#[test]
fn traversal_is_depth_first_in_declared_order() {
    let graph = ObjectGraph::from_composition(&shared_brush_composition(), true);
    let kinds: Vec<NodeKind> = graph.nodes().iter().map(|n| n.object.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Layer,
            NodeKind::Transform,
            NodeKind::Shape,           // group
            NodeKind::Shape,           // fill inside group
            NodeKind::SolidColorBrush, // shared brush
            NodeKind::Shape,           // second fill
        ]
    );
    // Positions equal ids equal traversal order.
    for (i, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.position as usize, i);
    }
}

#[test]
fn shared_objects_get_one_node_and_two_in_edges() {
    let graph = ObjectGraph::from_composition(&shared_brush_composition(), true);
    let brush_nodes: Vec<&GraphNode> = graph
        .nodes()
        .iter()
        .filter(|n| n.object.kind() == NodeKind::SolidColorBrush)
        .collect();
    assert_eq!(brush_nodes.len(), 1);
    assert_eq!(brush_nodes[0].reference_count(), 2);

    // Edge discovery positions are distinct and increasing.
    let positions: Vec<u32> = brush_nodes[0].in_edges.iter().map(|e| e.position).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn leaf_values_can_be_excluded() {
    let graph = ObjectGraph::from_composition(&shared_brush_composition(), false);
    assert!(
        graph
            .nodes()
            .iter()
            .all(|n| n.object.kind() != NodeKind::SolidColorBrush)
    );
}

#[test]
fn roots_are_top_level_layers_in_draw_order() {
    let bottom = Arc::new(Layer::Solid(SolidLayer {
        props: props("bg", 0),
        width: 100.0,
        height: 100.0,
        color: Color::BLACK,
    }));
    let top = Arc::new(Layer::Solid(SolidLayer {
        props: props("fg", 1),
        width: 10.0,
        height: 10.0,
        color: Color::BLACK,
    }));
    let graph = ObjectGraph::from_composition(&composition(vec![bottom, top]), true);

    assert_eq!(graph.roots().len(), 2);
    let first = graph.node(graph.roots()[0]);
    match &first.object {
        GraphObject::Layer(layer) => assert_eq!(layer.props().name, "bg"),
        other => panic!("expected layer, got {other:?}"),
    }
}

#[test]
fn rebuilding_the_graph_reproduces_positions() {
    let comp = shared_brush_composition();
    let a = ObjectGraph::from_composition(&comp, true);
    let b = ObjectGraph::from_composition(&comp, true);
    assert_eq!(a.nodes().len(), b.nodes().len());
    for (x, y) in a.nodes().iter().zip(b.nodes()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.object.kind(), y.object.kind());
        assert_eq!(x.reference_count(), y.reference_count());
    }
}
