use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::animatables::Animatable;
use crate::foundation::core::Opacity;
use crate::graph::object_graph::NodeKind;
use crate::ir::layer::{CompositionIr, LayerProps, ShapeLayer};
use crate::ir::shape::{ShapeContent, SolidColorBrush, SolidColorFill};
use crate::ir::transform::Transform;

fn named_fill(name: &str, r: f64) -> Arc<ShapeContent> {
    Arc::new(ShapeContent::SolidColorFill(SolidColorFill {
        name: name.to_owned(),
        fill_rule: Default::default(),
        brush: Arc::new(SolidColorBrush {
            color: Animatable::new_static(Color::from_floats(1.0, r, 0.0, 0.0)),
            opacity: Animatable::new_static(Opacity::OPAQUE),
        }),
    }))
}

fn graph_for(contents: Vec<Arc<ShapeContent>>) -> ObjectGraph {
    let comp = CompositionIr {
        name: String::new(),
        width: 10.0,
        height: 10.0,
        frame_rate: 30.0,
        in_point: 0.0,
        out_point: 10.0,
        layers: vec![Arc::new(Layer::Shape(ShapeLayer {
            props: LayerProps {
                name: "my shape!".to_owned(),
                index: 0,
                parent_index: None,
                in_point: 0.0,
                out_point: 10.0,
                is_hidden: false,
                blend_mode: Default::default(),
                matte_mode: Default::default(),
                transform: Arc::new(Transform::identity()),
                masks: vec![],
                effects: vec![],
            },
            contents,
        }))],
        markers: vec![],
    };
    ObjectGraph::from_composition(&comp, true)
}

#[test]
fn names_are_unique_and_counter_suffixed() {
    let graph = graph_for(vec![named_fill("a", 1.0), named_fill("a", 0.5)]);
    let names = generate_node_names(&graph);

    assert_eq!(names.len(), graph.nodes().len());
    let mut values: Vec<&String> = names.values().collect();
    values.sort();
    values.dedup();
    assert_eq!(values.len(), names.len());

    // Both fills share the base name and get counter suffixes in
    // traversal order.
    let fills: Vec<&String> = names
        .iter()
        .filter(|(id, _)| graph.node(**id).object.kind() == NodeKind::Shape)
        .map(|(_, name)| name)
        .collect();
    assert_eq!(fills, vec!["SolidColorFill_a_0", "SolidColorFill_a_1"]);
}

#[test]
fn display_names_are_sanitized_for_identifiers() {
    let graph = graph_for(vec![named_fill("fancy name (2)", 1.0)]);
    let names = generate_node_names(&graph);

    assert!(
        names
            .values()
            .any(|n| n == "SolidColorFill_fancy_name_2_0"),
        "got {names:?}"
    );
    // The layer's own punctuation is stripped too.
    assert!(names.values().any(|n| n == "ShapeLayer_my_shape_0"));
}

#[test]
fn brush_names_describe_their_color() {
    let graph = graph_for(vec![named_fill("x", 1.0)]);
    let names = generate_node_names(&graph);
    assert!(names.values().any(|n| n == "ColorBrush_Red_0"), "{names:?}");
}

#[test]
fn naming_is_stable_across_runs() {
    let graph = graph_for(vec![named_fill("a", 1.0), named_fill("b", 0.25)]);
    let first = generate_node_names(&graph);
    let second = generate_node_names(&graph);
    assert_eq!(first, second);
}
