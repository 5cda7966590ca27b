//! Per-language literal formatting and file scaffolding.
//!
//! A [`Stringifier`] formats scalars, vectors, colors, and collection
//! literals in one target language's syntax, and renders the factory
//! methods produced by the instantiator into that language's file
//! shape. The instantiator itself is language-agnostic.

use crate::codegen::builder::CodeBuilder;
use crate::foundation::core::{Color, Vector2, Vector3};

/// One generated text artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub text: String,
}

/// One factory method: a named, typed expression.
#[derive(Clone, Debug)]
pub struct Method {
    pub name: String,
    pub return_type: String,
    pub body: String,
}

/// Formats literals and file scaffolding for one target language.
pub trait Stringifier {
    fn language_name(&self) -> &'static str;

    fn bool(&self, value: bool) -> String {
        if value { "true" } else { "false" }.to_owned()
    }

    /// A double-precision literal.
    fn double(&self, value: f64) -> String;

    fn int(&self, value: i64) -> String {
        value.to_string()
    }

    /// A quoted, escaped string literal.
    fn string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
        }
        out.push('"');
        out
    }

    fn color(&self, value: Color) -> String;

    fn vector2(&self, value: Vector2) -> String;

    fn vector3(&self, value: Vector3) -> String;

    /// Member access on the factory object (`.` or `->`).
    fn deref(&self) -> &'static str {
        "."
    }

    /// The absent-value literal for optional arguments.
    fn null(&self) -> &'static str {
        "null"
    }

    /// Scope resolution for enum members (`.` or `::`).
    fn scope_resolve(&self) -> &'static str;

    /// `EnumType<sep>Member`.
    fn enum_value(&self, type_name: &str, member: &str) -> String {
        format!("{type_name}{}{member}", self.scope_resolve())
    }

    /// A typed collection literal.
    fn array(&self, element_type: &str, items: &[String]) -> String;

    /// Render the factory methods as this language's file set. `Root`
    /// is always the last method.
    fn render_files(
        &self,
        class_name: &str,
        header_lines: &[String],
        methods: &[Method],
    ) -> Vec<GeneratedFile>;
}

/// Shortest round-trip decimal text for a double, with a stable `.0`
/// form for integral values so output never depends on locale.
pub(crate) fn format_double(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// C# literal syntax and a single-file class scaffold.
#[derive(Debug, Default)]
pub struct CSharpStringifier;

impl Stringifier for CSharpStringifier {
    fn language_name(&self) -> &'static str {
        "csharp"
    }

    fn double(&self, value: f64) -> String {
        format!("{}d", format_double(value))
    }

    fn color(&self, value: Color) -> String {
        let [a, r, g, b] = value.to_argb_bytes();
        format!("Color.FromArgb(0x{a:02X}, 0x{r:02X}, 0x{g:02X}, 0x{b:02X})")
    }

    fn vector2(&self, value: Vector2) -> String {
        format!(
            "new Vector2({}, {})",
            self.double(value.x),
            self.double(value.y)
        )
    }

    fn vector3(&self, value: Vector3) -> String {
        format!(
            "new Vector3({}, {}, {})",
            self.double(value.x),
            self.double(value.y),
            self.double(value.z)
        )
    }

    fn scope_resolve(&self) -> &'static str {
        "."
    }

    fn array(&self, element_type: &str, items: &[String]) -> String {
        format!("new {element_type}[] {{ {} }}", items.join(", "))
    }

    fn render_files(
        &self,
        class_name: &str,
        header_lines: &[String],
        methods: &[Method],
    ) -> Vec<GeneratedFile> {
        let mut b = CodeBuilder::new();
        for line in header_lines {
            b.line(&format!("// {line}"));
        }
        b.blank_line();
        b.line(&format!("sealed class {class_name}"));
        b.open_brace();
        b.line("readonly ISceneFactory f;");
        b.blank_line();
        b.line(&format!("{class_name}(ISceneFactory factory)"));
        b.open_brace();
        b.line("f = factory;");
        b.close_brace("}");
        b.blank_line();
        b.line("public static SceneNode Create(ISceneFactory factory)");
        b.open_brace();
        b.line(&format!("return new {class_name}(factory).Root();"));
        b.close_brace("}");

        for method in methods {
            b.blank_line();
            b.line(&format!("{} {}()", method.return_type, method.name));
            b.open_brace();
            b.line(&format!("return {};", method.body));
            b.close_brace("}");
        }

        b.close_brace("}");

        vec![GeneratedFile {
            file_name: format!("{class_name}.cs"),
            text: b.into_text(),
        }]
    }
}

/// C++ literal syntax with a header/source file pair.
#[derive(Debug, Default)]
pub struct CppStringifier;

impl Stringifier for CppStringifier {
    fn language_name(&self) -> &'static str {
        "cpp"
    }

    fn double(&self, value: f64) -> String {
        format_double(value)
    }

    fn color(&self, value: Color) -> String {
        let [a, r, g, b] = value.to_argb_bytes();
        format!("Color{{0x{a:02X}, 0x{r:02X}, 0x{g:02X}, 0x{b:02X}}}")
    }

    fn vector2(&self, value: Vector2) -> String {
        format!("Vector2{{{}, {}}}", self.double(value.x), self.double(value.y))
    }

    fn vector3(&self, value: Vector3) -> String {
        format!(
            "Vector3{{{}, {}, {}}}",
            self.double(value.x),
            self.double(value.y),
            self.double(value.z)
        )
    }

    fn null(&self) -> &'static str {
        "std::nullopt"
    }

    fn scope_resolve(&self) -> &'static str {
        "::"
    }

    fn array(&self, element_type: &str, items: &[String]) -> String {
        format!("std::vector<{element_type}>{{ {} }}", items.join(", "))
    }

    fn render_files(
        &self,
        class_name: &str,
        header_lines: &[String],
        methods: &[Method],
    ) -> Vec<GeneratedFile> {
        let mut h = CodeBuilder::new();
        h.line("#pragma once");
        for line in header_lines {
            h.line(&format!("// {line}"));
        }
        h.blank_line();
        h.line(&format!("class {class_name} final"));
        h.open_brace();
        h.unindent();
        h.line("public:");
        h.indent();
        h.line("static SceneNode Create(SceneFactory& factory);");
        h.blank_line();
        h.unindent();
        h.line("private:");
        h.indent();
        h.line(&format!("explicit {class_name}(SceneFactory& factory);"));
        h.blank_line();
        h.line("SceneFactory& f;");
        h.blank_line();
        for method in methods {
            h.line(&format!("{} {}();", method.return_type, method.name));
        }
        h.close_brace("};");

        let mut s = CodeBuilder::new();
        for line in header_lines {
            s.line(&format!("// {line}"));
        }
        s.blank_line();
        s.line(&format!("#include \"{class_name}.h\""));
        s.blank_line();
        s.line(&format!(
            "{class_name}::{class_name}(SceneFactory& factory) : f(factory)"
        ));
        s.open_brace();
        s.close_brace("}");
        s.blank_line();
        s.line(&format!("SceneNode {class_name}::Create(SceneFactory& factory)"));
        s.open_brace();
        s.line(&format!("return {class_name}(factory).Root();"));
        s.close_brace("}");

        for method in methods {
            s.blank_line();
            s.line(&format!(
                "{} {class_name}::{}()",
                method.return_type, method.name
            ));
            s.open_brace();
            s.line(&format!("return {};", method.body));
            s.close_brace("}");
        }

        vec![
            GeneratedFile {
                file_name: format!("{class_name}.h"),
                text: h.into_text(),
            },
            GeneratedFile {
                file_name: format!("{class_name}.cpp"),
                text: s.into_text(),
            },
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/stringifier.rs"]
mod tests;
