use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::animatables::vectors::AnimatableVector2;
use crate::foundation::core::{Color, Opacity, Vector2};
use crate::graph::object_graph::{NodeKind, ObjectGraph};
use crate::ir::shape::Ellipse;

fn props(index: i64) -> LayerProps {
    LayerProps {
        name: format!("layer{index}"),
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

fn red_fill() -> Arc<ShapeContent> {
    Arc::new(ShapeContent::SolidColorFill(SolidColorFill {
        name: String::new(),
        fill_rule: Default::default(),
        brush: Arc::new(SolidColorBrush {
            color: Animatable::new_static(Color::from_floats(1.0, 1.0, 0.0, 0.0)),
            opacity: Animatable::new_static(Opacity::OPAQUE),
        }),
    }))
}

fn dot(at: f64) -> Arc<ShapeContent> {
    Arc::new(ShapeContent::Ellipse(Ellipse {
        name: String::new(),
        direction: Default::default(),
        position: AnimatableVector2::new_static(Vector2::new(at, at)),
        diameter: AnimatableVector2::new_static(Vector2::new(4.0, 4.0)),
    }))
}

fn composition(layers: Vec<Arc<Layer>>) -> CompositionIr {
    CompositionIr {
        name: String::new(),
        width: 100.0,
        height: 100.0,
        frame_rate: 30.0,
        in_point: 0.0,
        out_point: 60.0,
        layers,
        markers: vec![],
    }
}

#[test]
fn equal_brushes_collapse_to_one_canonical_instance() {
    // Two value-equal brushes behind distinct pointers.
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props(0),
        contents: vec![dot(1.0), red_fill(), dot(2.0), red_fill()],
    }));
    let deduped = canonicalize(&composition(vec![layer]));

    let graph = ObjectGraph::from_composition(&deduped, true);
    let brushes: Vec<_> = graph
        .nodes()
        .iter()
        .filter(|n| n.object.kind() == NodeKind::SolidColorBrush)
        .collect();
    assert_eq!(brushes.len(), 1);
    assert_eq!(brushes[0].reference_count(), 2);
}

#[test]
fn equal_groups_collapse_as_whole_subtrees() {
    let make_group = || {
        Arc::new(ShapeContent::Group(ShapeGroup {
            name: "badge".to_owned(),
            contents: vec![dot(3.0), red_fill()],
        }))
    };
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props(0),
        contents: vec![make_group(), make_group()],
    }));
    let deduped = canonicalize(&composition(vec![layer]));

    match deduped.layers[0].as_ref() {
        Layer::Shape(shape) => {
            assert!(Arc::ptr_eq(&shape.contents[0], &shape.contents[1]));
        }
        other => panic!("expected shape layer, got {other:?}"),
    }
}

#[test]
fn unequal_values_survive_dedup_untouched() {
    let blue_fill = Arc::new(ShapeContent::SolidColorFill(SolidColorFill {
        name: String::new(),
        fill_rule: Default::default(),
        brush: Arc::new(SolidColorBrush {
            color: Animatable::new_static(Color::from_floats(1.0, 0.0, 0.0, 1.0)),
            opacity: Animatable::new_static(Opacity::OPAQUE),
        }),
    }));
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props(0),
        contents: vec![dot(1.0), red_fill(), dot(2.0), blue_fill],
    }));
    let deduped = canonicalize(&composition(vec![layer]));

    let graph = ObjectGraph::from_composition(&deduped, true);
    let brushes: Vec<_> = graph
        .nodes()
        .iter()
        .filter(|n| n.object.kind() == NodeKind::SolidColorBrush)
        .collect();
    assert_eq!(brushes.len(), 2);
}

#[test]
fn dedup_preserves_tree_shape_and_order() {
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props(0),
        contents: vec![dot(1.0), red_fill(), dot(2.0), red_fill()],
    }));
    let comp = composition(vec![layer]);
    let deduped = canonicalize(&comp);

    // Value-equality of the whole tree is untouched; only sharing
    // changed underneath.
    assert_eq!(comp, deduped);
}

#[test]
fn identity_transforms_share_one_instance_across_layers() {
    let layers = vec![
        Arc::new(Layer::Shape(ShapeLayer {
            props: props(0),
            contents: vec![dot(1.0), red_fill()],
        })),
        Arc::new(Layer::Shape(ShapeLayer {
            props: props(1),
            contents: vec![dot(2.0), red_fill()],
        })),
    ];
    let deduped = canonicalize(&composition(layers));

    let a = Arc::clone(&deduped.layers[0].props().transform);
    let b = Arc::clone(&deduped.layers[1].props().transform);
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn shared_input_pointers_stay_shared() {
    let shared = Arc::new(ShapeContent::Group(ShapeGroup {
        name: "one".to_owned(),
        contents: vec![dot(5.0), red_fill()],
    }));
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props(0),
        contents: vec![Arc::clone(&shared), shared],
    }));
    let deduped = canonicalize(&composition(vec![layer]));

    match deduped.layers[0].as_ref() {
        Layer::Shape(shape) => assert!(Arc::ptr_eq(&shape.contents[0], &shape.contents[1])),
        other => panic!("expected shape layer, got {other:?}"),
    }
}
