use pretty_assertions::assert_eq;

use super::*;

#[test]
fn double_formatting_is_stable() {
    assert_eq!(format_double(60.0), "60.0");
    assert_eq!(format_double(1.5), "1.5");
    assert_eq!(format_double(-0.25), "-0.25");
}

#[test]
fn csharp_literals() {
    let s = CSharpStringifier;
    assert_eq!(s.double(60.0), "60.0d");
    assert_eq!(s.bool(true), "true");
    assert_eq!(s.string("a \"b\"\n"), "\"a \\\"b\\\"\\n\"");
    assert_eq!(
        s.color(Color::from_argb_bytes(0xFF, 0x12, 0x00, 0xAB)),
        "Color.FromArgb(0xFF, 0x12, 0x00, 0xAB)"
    );
    assert_eq!(s.vector2(Vector2::new(1.0, 2.0)), "new Vector2(1.0d, 2.0d)");
    assert_eq!(s.enum_value("FillRule", "NonZero"), "FillRule.NonZero");
    assert_eq!(
        s.array("Mask", &["a".to_owned(), "b".to_owned()]),
        "new Mask[] { a, b }"
    );
    assert_eq!(s.null(), "null");
}

#[test]
fn cpp_literals() {
    let s = CppStringifier;
    assert_eq!(s.double(60.0), "60.0");
    assert_eq!(
        s.color(Color::from_argb_bytes(0xFF, 0x12, 0x00, 0xAB)),
        "Color{0xFF, 0x12, 0x00, 0xAB}"
    );
    assert_eq!(s.vector2(Vector2::new(1.0, 2.0)), "Vector2{1.0, 2.0}");
    assert_eq!(s.enum_value("FillRule", "NonZero"), "FillRule::NonZero");
    assert_eq!(
        s.array("Mask", &["a".to_owned()]),
        "std::vector<Mask>{ a }"
    );
    assert_eq!(s.null(), "std::nullopt");
}

#[test]
fn csharp_renders_a_single_file() {
    let s = CSharpStringifier;
    let files = s.render_files(
        "MyScene",
        &["Scene-graph factory.".to_owned()],
        &[Method {
            name: "Root".to_owned(),
            return_type: "SceneNode".to_owned(),
            body: "f.Composition()".to_owned(),
        }],
    );

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "MyScene.cs");
    let text = &files[0].text;
    assert!(text.contains("sealed class MyScene"));
    assert!(text.contains("SceneNode Root()"));
    assert!(text.contains("return f.Composition();"));
    assert!(text.contains("// Scene-graph factory."));
}

#[test]
fn cpp_renders_header_and_source() {
    let s = CppStringifier;
    let files = s.render_files(
        "MyScene",
        &[],
        &[Method {
            name: "Root".to_owned(),
            return_type: "SceneNode".to_owned(),
            body: "f.Composition()".to_owned(),
        }],
    );

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].file_name, "MyScene.h");
    assert_eq!(files[1].file_name, "MyScene.cpp");
    assert!(files[0].text.contains("SceneNode Root();"));
    assert!(files[1].text.contains("#include \"MyScene.h\""));
    assert!(files[1].text.contains("SceneNode MyScene::Root()"));
}
