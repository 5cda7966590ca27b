use pretty_assertions::assert_eq;

use super::*;
use crate::animatables::vectors::VectorAnimation;
use crate::composition::model::{GradientKindDef, ShapeItemDef, TransformDef, VectorPropertyDef};
use crate::foundation::core::Vector2;

fn collector() -> IssueCollector {
    IssueCollector::new(false)
}

#[test]
fn fill_builds_a_solid_color_brush() {
    let mut issues = collector();
    let items = translate_shape_items(
        &mut issues,
        &[ShapeItemDef::Fill {
            name: "paint".to_owned(),
            fill_rule: Default::default(),
            color: PropertyDef::Value([1.0, 0.0, 0.0, 1.0]),
            opacity: PropertyDef::Value(50.0),
        }],
        0.0,
    )
    .unwrap();

    match items[0].as_ref() {
        ShapeContent::SolidColorFill(fill) => {
            assert_eq!(fill.name, "paint");
            assert_eq!(
                *fill.brush.color.initial_value(),
                Color::from_floats(1.0, 1.0, 0.0, 0.0)
            );
            assert_eq!(fill.brush.opacity.initial_value().fraction(), 0.5);
        }
        other => panic!("expected solid fill, got {other:?}"),
    }
    assert!(issues.into_issues().is_empty());
}

#[test]
fn groups_translate_recursively_in_order() {
    let mut issues = collector();
    let items = translate_shape_items(
        &mut issues,
        &[ShapeItemDef::Group {
            name: "outer".to_owned(),
            items: vec![
                ShapeItemDef::Ellipse {
                    name: "dot".to_owned(),
                    direction: Default::default(),
                    position: VectorPropertyDef::constant(5.0, 5.0),
                    diameter: VectorPropertyDef::constant(4.0, 4.0),
                },
                ShapeItemDef::Fill {
                    name: String::new(),
                    fill_rule: Default::default(),
                    color: PropertyDef::Value([0.0, 0.0, 0.0, 1.0]),
                    opacity: PropertyDef::Value(100.0),
                },
                ShapeItemDef::Transform {
                    name: String::new(),
                    transform: TransformDef::default(),
                },
            ],
        }],
        0.0,
    )
    .unwrap();

    match items[0].as_ref() {
        ShapeContent::Group(group) => {
            assert_eq!(group.name, "outer");
            let kinds: Vec<&str> = group.contents.iter().map(|c| c.kind_name()).collect();
            assert_eq!(kinds, vec!["Ellipse", "SolidColorFill", "Transform"]);
        }
        other => panic!("expected group, got {other:?}"),
    }
}

#[test]
fn trim_path_converts_percent_and_degrees() {
    let mut issues = collector();
    let items = translate_shape_items(
        &mut issues,
        &[ShapeItemDef::TrimPath {
            name: String::new(),
            start: PropertyDef::Value(25.0),
            end: PropertyDef::Value(75.0),
            offset: PropertyDef::Value(180.0),
            multiple_shapes: Default::default(),
        }],
        0.0,
    )
    .unwrap();

    match items[0].as_ref() {
        ShapeContent::TrimPath(trim) => {
            assert_eq!(*trim.start.initial_value(), 0.25);
            assert_eq!(*trim.end.initial_value(), 0.75);
            assert_eq!(trim.offset.initial_value().degrees, 180.0);
        }
        other => panic!("expected trim path, got {other:?}"),
    }
}

#[test]
fn gradient_stops_unpack_colors_then_opacities() {
    let stops = GradientStopsDef {
        count: 2,
        values: PropertyDef::Value(vec![
            0.0, 1.0, 0.0, 0.0, // red at 0
            1.0, 0.0, 0.0, 1.0, // blue at 1
            0.0, 1.0, // opaque at 0
            1.0, 0.5, // half at 1
        ]),
    };
    let mut issues = collector();
    let items = translate_shape_items(
        &mut issues,
        &[ShapeItemDef::GradientFill {
            name: "g".to_owned(),
            fill_rule: Default::default(),
            gradient_kind: GradientKindDef::Linear,
            start_point: VectorPropertyDef::constant(0.0, 0.0),
            end_point: VectorPropertyDef::constant(10.0, 0.0),
            highlight_length: None,
            highlight_angle: None,
            stops,
            opacity: PropertyDef::Value(100.0),
        }],
        0.0,
    )
    .unwrap();

    match items[0].as_ref() {
        ShapeContent::LinearGradientFill(fill) => {
            let stops = &fill.brush.stops.initial_value().stops;
            assert_eq!(stops.len(), 4);
            assert!(matches!(stops[0], GradientStop::Color { offset, .. } if offset == 0.0));
            assert!(
                matches!(stops[3], GradientStop::Opacity { opacity, .. } if opacity.fraction() == 0.5)
            );
            assert_eq!(
                fill.brush.end_point.initial_value(),
                Vector2::new(10.0, 0.0)
            );
        }
        other => panic!("expected linear gradient fill, got {other:?}"),
    }
    assert!(issues.into_issues().is_empty());
}

#[test]
fn malformed_gradient_stops_are_reported_not_fatal() {
    let stops = GradientStopsDef {
        count: 2,
        values: PropertyDef::Value(vec![0.0, 1.0, 0.0]),
    };
    let mut issues = collector();
    let items = translate_shape_items(
        &mut issues,
        &[ShapeItemDef::GradientFill {
            name: "broken".to_owned(),
            fill_rule: Default::default(),
            gradient_kind: GradientKindDef::Radial,
            start_point: VectorPropertyDef::constant(0.0, 0.0),
            end_point: VectorPropertyDef::constant(10.0, 0.0),
            highlight_length: None,
            highlight_angle: None,
            stops,
            opacity: PropertyDef::Value(100.0),
        }],
        0.0,
    )
    .unwrap();

    assert!(matches!(
        items[0].as_ref(),
        ShapeContent::RadialGradientFill(_)
    ));
    let issues = issues.into_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "VL0004");
}
