use pretty_assertions::assert_eq;

use super::*;

fn scenario_json() -> serde_json::Value {
    serde_json::json!({
        "name": "scene",
        "width": 60.0,
        "height": 60.0,
        "frame_rate": 30.0,
        "in_point": 0.0,
        "out_point": 60.0,
        "layers": [
            {
                "name": "bg",
                "index": 0,
                "in_point": 0.0,
                "out_point": 60.0,
                "kind": "solid",
                "width": 60.0,
                "height": 60.0,
                "color": "#FF0000"
            },
            {
                "name": "circle",
                "index": 1,
                "in_point": 0.0,
                "out_point": 60.0,
                "kind": "shape",
                "shapes": [
                    {
                        "type": "group",
                        "name": "g",
                        "items": [
                            { "type": "ellipse", "position": [30.0, 30.0], "diameter": [20.0, 20.0] },
                            { "type": "fill", "color": [1.0, 0.0, 0.0, 1.0] }
                        ]
                    }
                ]
            }
        ]
    })
}

fn options() -> TranslationOptions {
    TranslationOptions {
        languages: vec![Language::CSharp, Language::Cpp],
        test_mode: true,
        ..TranslationOptions::default()
    }
}

#[test]
fn parse_failure_is_a_typed_parse_error() {
    let err = parse_composition("{ not json").unwrap_err();
    assert!(matches!(err, LottiecError::Parse(_)));
}

#[test]
fn run_composition_produces_one_output_per_language() {
    let source: CompositionDef = serde_json::from_value(scenario_json()).unwrap();
    let result = run_composition(&source, "Scene", "scene.json", &options()).unwrap();

    assert_eq!(result.outputs.len(), 2);
    assert_eq!(result.outputs[0].language_name, "csharp");
    assert_eq!(result.outputs[0].files.len(), 1);
    assert_eq!(result.outputs[1].language_name, "cpp");
    assert_eq!(result.outputs[1].files.len(), 2);
    assert!(result.issues.is_empty());
    assert_eq!(result.stats.solid_layers, 1);
    assert_eq!(result.stats.shape_layers, 1);
}

#[test]
fn optimizer_flags_bisect_the_passes() {
    let mut source: CompositionDef = serde_json::from_value(scenario_json()).unwrap();
    // Add an empty group that only the translation optimizer removes.
    if let crate::composition::model::LayerContentDef::Shape { shapes } =
        &mut source.layers[1].content
    {
        shapes.push(crate::composition::model::ShapeItemDef::Group {
            name: "empty".to_owned(),
            items: vec![],
        });
    }

    let optimized = run_composition(&source, "Scene", "s.json", &options()).unwrap();
    let unoptimized = run_composition(
        &source,
        "Scene",
        "s.json",
        &TranslationOptions {
            disable_translation_optimizer: true,
            ..options()
        },
    )
    .unwrap();

    let count_groups = |ir: &CompositionIr| match ir.layers.last().unwrap().as_ref() {
        crate::ir::layer::Layer::Shape(shape) => shape.contents.len(),
        other => panic!("expected shape layer, got {other:?}"),
    };
    assert_eq!(count_groups(&optimized.ir), 1);
    assert_eq!(count_groups(&unoptimized.ir), 2);
}

#[test]
fn pipeline_is_deterministic_in_test_mode() {
    let source: CompositionDef = serde_json::from_value(scenario_json()).unwrap();
    let a = run_composition(&source, "Scene", "scene.json", &options()).unwrap();
    let b = run_composition(&source, "Scene", "scene.json", &options()).unwrap();

    for (x, y) in a.outputs.iter().zip(&b.outputs) {
        for (fx, fy) in x.files.iter().zip(&y.files) {
            assert_eq!(fx.file_name, fy.file_name);
            assert_eq!(fx.text, fy.text);
        }
    }
}

#[test]
fn strict_mode_fails_the_file() {
    let mut source: CompositionDef = serde_json::from_value(scenario_json()).unwrap();
    source.layers[0].time_stretch = 2.0;

    let err = run_composition(
        &source,
        "Scene",
        "s.json",
        &TranslationOptions {
            strict: true,
            ..options()
        },
    )
    .unwrap_err();
    assert!(matches!(err, LottiecError::Strict(_)));
}
