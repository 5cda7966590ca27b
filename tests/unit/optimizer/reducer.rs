use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::animatables::animatable::KeyFrame;
use crate::animatables::easing::Easing;
use crate::foundation::core::Color;
use crate::ir::layer::{LayerProps, NullLayer, SolidLayer};
use crate::ir::shape::{Ellipse, SolidColorBrush, SolidColorFill};

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

fn ellipse() -> Arc<ShapeContent> {
    Arc::new(ShapeContent::Ellipse(Ellipse {
        name: String::new(),
        direction: Default::default(),
        position: AnimatableVector2::new_static(Vector2::new(5.0, 5.0)),
        diameter: AnimatableVector2::new_static(Vector2::new(4.0, 4.0)),
    }))
}

fn fill() -> Arc<ShapeContent> {
    Arc::new(ShapeContent::SolidColorFill(SolidColorFill {
        name: String::new(),
        fill_rule: Default::default(),
        brush: Arc::new(SolidColorBrush {
            color: Animatable::new_static(Color::BLACK),
            opacity: Animatable::new_static(Opacity::OPAQUE),
        }),
    }))
}

fn group(name: &str, contents: Vec<Arc<ShapeContent>>) -> Arc<ShapeContent> {
    Arc::new(ShapeContent::Group(ShapeGroup {
        name: name.to_owned(),
        contents,
    }))
}

fn transform_item(t: Transform) -> Arc<ShapeContent> {
    Arc::new(ShapeContent::Transform(Arc::new(t)))
}

fn shape_layer(contents: Vec<Arc<ShapeContent>>) -> Arc<Layer> {
    Arc::new(Layer::Shape(ShapeLayer {
        props: props("art", 0),
        contents,
    }))
}

fn only_position(x: f64, y: f64) -> Transform {
    Transform {
        position: AnimatableVector2::new_static(Vector2::new(x, y)),
        ..Transform::identity()
    }
}

#[test]
fn recursively_empty_groups_vanish() {
    let nested_empty = group("a", vec![group("b", vec![group("c", vec![])])]);
    let layer = shape_layer(vec![nested_empty, ellipse(), fill()]);
    let reduced = reduce(&composition(vec![layer]));

    match reduced.layers[0].as_ref() {
        Layer::Shape(shape) => {
            let kinds: Vec<&str> = shape.contents.iter().map(|c| c.kind_name()).collect();
            assert_eq!(kinds, vec!["Ellipse", "SolidColorFill"]);
        }
        other => panic!("expected shape layer, got {other:?}"),
    }
}

#[test]
fn sibling_order_is_preserved_when_a_middle_group_is_removed() {
    let layer = shape_layer(vec![
        group("first", vec![ellipse(), fill()]),
        group("empty", vec![transform_item(only_position(1.0, 1.0))]),
        group("last", vec![ellipse(), fill()]),
    ]);
    let reduced = reduce(&composition(vec![layer]));

    match reduced.layers[0].as_ref() {
        Layer::Shape(shape) => {
            let names: Vec<&str> = shape.contents.iter().map(|c| c.name()).collect();
            assert_eq!(names, vec!["first", "last"]);
        }
        other => panic!("expected shape layer, got {other:?}"),
    }
}

#[test]
fn single_child_groups_coalesce_and_compose_positions() {
    let inner = group(
        "inner",
        vec![ellipse(), fill(), transform_item(only_position(1.0, 2.0))],
    );
    let outer = group("outer", vec![inner, transform_item(only_position(10.0, 20.0))]);
    let reduced = reduce(&composition(vec![shape_layer(vec![outer])]));

    match reduced.layers[0].as_ref() {
        Layer::Shape(shape) => {
            assert_eq!(shape.contents.len(), 1);
            match shape.contents[0].as_ref() {
                ShapeContent::Group(merged) => {
                    assert_eq!(merged.name, "outer");
                    let kinds: Vec<&str> =
                        merged.contents.iter().map(|c| c.kind_name()).collect();
                    assert_eq!(kinds, vec!["Ellipse", "SolidColorFill", "Transform"]);
                    match merged.contents[2].as_ref() {
                        ShapeContent::Transform(t) => {
                            assert_eq!(
                                t.position.initial_value(),
                                Vector2::new(11.0, 22.0)
                            );
                        }
                        other => panic!("expected transform, got {other:?}"),
                    }
                }
                other => panic!("expected merged group, got {other:?}"),
            }
        }
        other => panic!("expected shape layer, got {other:?}"),
    }
}

#[test]
fn conflicting_animated_transforms_do_not_coalesce() {
    let animated_position = Transform {
        position: AnimatableVector2::Packed(
            Animatable::new(vec![
                KeyFrame::new(0.0, Vector2::ZERO, Easing::Linear),
                KeyFrame::new(10.0, Vector2::new(5.0, 5.0), Easing::Linear),
            ])
            .unwrap(),
        ),
        ..Transform::identity()
    };

    let inner = group(
        "inner",
        vec![ellipse(), fill(), transform_item(animated_position.clone())],
    );
    let outer = group("outer", vec![inner, transform_item(animated_position)]);
    let reduced = reduce(&composition(vec![shape_layer(vec![outer])]));

    match reduced.layers[0].as_ref() {
        Layer::Shape(shape) => match shape.contents[0].as_ref() {
            ShapeContent::Group(g) => {
                assert_eq!(g.name, "outer");
                // Still nested: the animated-over-animated composition
                // has no single-transform equivalent.
                assert!(
                    g.contents
                        .iter()
                        .any(|c| matches!(c.as_ref(), ShapeContent::Group(_)))
                );
            }
            other => panic!("expected group, got {other:?}"),
        },
        other => panic!("expected shape layer, got {other:?}"),
    }
}

#[test]
fn opacity_only_transforms_compose_multiplicatively() {
    let half = Transform {
        opacity: Animatable::new_static(Opacity::from_fraction(0.5)),
        ..Transform::identity()
    };
    let inner = group("inner", vec![ellipse(), fill(), transform_item(half.clone())]);
    let outer = group("", vec![inner, transform_item(half)]);
    let reduced = reduce(&composition(vec![shape_layer(vec![outer])]));

    match reduced.layers[0].as_ref() {
        Layer::Shape(shape) => match shape.contents[0].as_ref() {
            ShapeContent::Group(merged) => {
                // Outer group had no name; the child's survives.
                assert_eq!(merged.name, "inner");
                match merged.contents.last().unwrap().as_ref() {
                    ShapeContent::Transform(t) => {
                        assert_eq!(t.opacity.initial_value().fraction(), 0.25);
                    }
                    other => panic!("expected transform, got {other:?}"),
                }
            }
            other => panic!("expected group, got {other:?}"),
        },
        other => panic!("expected shape layer, got {other:?}"),
    }
}

#[test]
fn hidden_layers_are_dropped_unless_parented_to() {
    let mut hidden_props = props("ghost", 3);
    hidden_props.is_hidden = true;
    let hidden = Arc::new(Layer::Solid(SolidLayer {
        props: hidden_props,
        width: 10.0,
        height: 10.0,
        color: Color::BLACK,
    }));
    let visible = Arc::new(Layer::Solid(SolidLayer {
        props: props("bg", 0),
        width: 10.0,
        height: 10.0,
        color: Color::BLACK,
    }));

    let reduced = reduce(&composition(vec![visible.clone(), hidden]));
    assert_eq!(reduced.layers.len(), 1);
    assert_eq!(reduced.layers[0].props().name, "bg");
}

#[test]
fn null_parents_of_surviving_layers_are_kept() {
    let rig = Arc::new(Layer::Null(NullLayer {
        props: props("rig", 1),
    }));
    let mut child_props = props("bg", 2);
    child_props.parent_index = Some(1);
    let child = Arc::new(Layer::Solid(SolidLayer {
        props: child_props,
        width: 10.0,
        height: 10.0,
        color: Color::BLACK,
    }));

    let reduced = reduce(&composition(vec![rig, child]));
    let names: Vec<&str> = reduced
        .layers
        .iter()
        .map(|l| l.props().name.as_str())
        .collect();
    assert_eq!(names, vec!["rig", "bg"]);

    // An unreferenced null disappears.
    let lonely = Arc::new(Layer::Null(NullLayer {
        props: props("lonely", 9),
    }));
    let reduced = reduce(&composition(vec![lonely]));
    assert!(reduced.layers.is_empty());
}

#[test]
fn empty_shape_layers_are_dropped() {
    let layer = shape_layer(vec![group("empty", vec![])]);
    let reduced = reduce(&composition(vec![layer]));
    assert!(reduced.layers.is_empty());
}
