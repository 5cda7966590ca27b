use pretty_assertions::assert_eq;

use super::*;
use crate::codegen::stringifier::CSharpStringifier;
use crate::foundation::core::{Color, Vector2};
use crate::ir::layer::{LayerProps, ShapeLayer, SolidLayer};
use crate::ir::shape::{Ellipse, ShapeGroup, SolidColorBrush, SolidColorFill};

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

fn options() -> InstantiatorOptions {
    InstantiatorOptions {
        class_name: "TestScene".to_owned(),
        test_mode: true,
        source_description: "test.json".to_owned(),
    }
}

fn red_brush() -> Arc<SolidColorBrush> {
    Arc::new(SolidColorBrush {
        color: Animatable::new_static(Color::from_argb_bytes(0xFF, 0xFF, 0, 0)),
        opacity: Animatable::new_static(crate::foundation::core::Opacity::OPAQUE),
    })
}

fn fill_with(brush: &Arc<SolidColorBrush>) -> Arc<ShapeContent> {
    Arc::new(ShapeContent::SolidColorFill(SolidColorFill {
        name: String::new(),
        fill_rule: Default::default(),
        brush: Arc::clone(brush),
    }))
}

fn composition(layers: Vec<Arc<Layer>>) -> CompositionIr {
    CompositionIr {
        name: "scene".to_owned(),
        width: 60.0,
        height: 60.0,
        frame_rate: 30.0,
        in_point: 0.0,
        out_point: 60.0,
        layers,
        markers: vec![],
    }
}

#[test]
fn shared_nodes_become_named_methods_and_singletons_inline() {
    let shared = red_brush();
    let dot = Arc::new(ShapeContent::Ellipse(Ellipse {
        name: String::new(),
        direction: Default::default(),
        position: AnimatableVector2::new_static(Vector2::new(5.0, 5.0)),
        diameter: AnimatableVector2::new_static(Vector2::new(4.0, 4.0)),
    }));
    let group = Arc::new(ShapeContent::Group(ShapeGroup {
        name: "g".to_owned(),
        contents: vec![Arc::clone(&dot), fill_with(&shared)],
    }));
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props("art", 0),
        contents: vec![group, fill_with(&shared)],
    }));

    let output = generate(&composition(vec![layer]), &CSharpStringifier, &options());
    let text = &output.files[0].text;

    // The shared brush is hoisted into one factory method referenced
    // twice; the ellipse is inlined where it is used.
    assert!(text.contains("Brush ColorBrush_Red_0()"), "{text}");
    assert_eq!(text.matches("ColorBrush_Red_0()").count(), 3);
    assert!(!text.contains("Ellipse_0()"));
    assert!(text.contains("f.Ellipse("));
}

#[test]
fn methods_are_declared_before_first_use() {
    let shared = red_brush();
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props("art", 0),
        contents: vec![fill_with(&shared), fill_with(&shared)],
    }));
    let output = generate(&composition(vec![layer]), &CSharpStringifier, &options());
    let text = &output.files[0].text;

    let declaration = text.find("Brush ColorBrush_Red_0()").unwrap();
    let first_use = text.find("f.SolidColorFill(").unwrap();
    assert!(declaration < first_use);
}

#[test]
fn root_builds_the_composition_with_layers_in_draw_order() {
    let bottom = Arc::new(Layer::Solid(SolidLayer {
        props: props("bg", 0),
        width: 60.0,
        height: 60.0,
        color: Color::from_argb_bytes(0xFF, 0xFF, 0, 0),
    }));
    let top = Arc::new(Layer::Solid(SolidLayer {
        props: props("fg", 1),
        width: 10.0,
        height: 10.0,
        color: Color::from_argb_bytes(0xFF, 0, 0, 0),
    }));

    let output = generate(
        &composition(vec![bottom, top]),
        &CSharpStringifier,
        &options(),
    );
    let text = &output.files[0].text;

    assert!(text.contains("SceneNode Root()"));
    let bg = text.find("\"bg\"").unwrap();
    let fg = text.find("\"fg\"").unwrap();
    assert!(bg < fg);
}

#[test]
fn test_mode_suppresses_the_version_header() {
    let layer = Arc::new(Layer::Solid(SolidLayer {
        props: props("bg", 0),
        width: 60.0,
        height: 60.0,
        color: Color::from_argb_bytes(0xFF, 0, 0, 0),
    }));
    let comp = composition(vec![layer]);

    let quiet = generate(&comp, &CSharpStringifier, &options());
    assert!(!quiet.files[0].text.contains("Generated by"));

    let loud = generate(
        &comp,
        &CSharpStringifier,
        &InstantiatorOptions {
            test_mode: false,
            ..options()
        },
    );
    assert!(loud.files[0].text.contains("Generated by"));
    assert!(loud.files[0].text.contains("test.json"));
}

#[test]
fn image_uris_surface_as_asset_references() {
    let image = Arc::new(Layer::Image(crate::ir::layer::ImageLayer {
        props: props("hero", 0),
        asset_id: "img_0".to_owned(),
        uri: "images/hero.png".to_owned(),
        width: 32.0,
        height: 32.0,
    }));
    let output = generate(&composition(vec![image]), &CSharpStringifier, &options());
    assert_eq!(output.asset_references, vec!["images/hero.png"]);
}

#[test]
fn generation_is_deterministic() {
    let shared = red_brush();
    let layer = Arc::new(Layer::Shape(ShapeLayer {
        props: props("art", 0),
        contents: vec![fill_with(&shared), fill_with(&shared)],
    }));
    let comp = composition(vec![layer]);

    let a = generate(&comp, &CSharpStringifier, &options());
    let b = generate(&comp, &CSharpStringifier, &options());
    assert_eq!(a.files[0].text, b.files[0].text);
}
