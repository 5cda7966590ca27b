//! The instantiator generator: a single topologically-ordered walk over
//! the named object graph that emits one factory method per shared node
//! and inlines everything referenced only once.
//!
//! The output is a self-contained factory routine against an abstract
//! scene-construction API (`f.SolidLayer(...)`, `f.KeyFrames(...)`, …);
//! the per-language [`Stringifier`] owns literal syntax and file shape.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::animatables::animatable::Animatable;
use crate::animatables::bezier::PathGeometry;
use crate::animatables::easing::Easing;
use crate::animatables::vectors::AnimatableVector2;
use crate::codegen::stringifier::{GeneratedFile, Method, Stringifier};
use crate::foundation::core::{Opacity, Rotation};
use crate::graph::namer::generate_node_names;
use crate::graph::object_graph::{GraphObject, NodeId, NodeKind, ObjectGraph};
use crate::ir::layer::{CompositionIr, Layer, LayerProps, Mask, TextDocument};
use crate::ir::shape::{GradientStop, GradientStops, ShapeContent, StrokeStyle};
use crate::ir::transform::Transform;

/// Options shaping one generation run.
#[derive(Clone, Debug)]
pub struct InstantiatorOptions {
    /// Class (and file) name for the generated factory.
    pub class_name: String,
    /// Suppress run-to-run-varying header content (tool version,
    /// source path) so identical input generates identical text.
    pub test_mode: bool,
    /// Where the composition came from, for the header comment.
    pub source_description: String,
}

/// The artifacts produced for one target language.
#[derive(Clone, Debug)]
pub struct GeneratedOutput {
    pub language_name: &'static str,
    pub files: Vec<GeneratedFile>,
    /// External assets (image URIs) the generated code loads at
    /// runtime, in first-reference order.
    pub asset_references: Vec<String>,
}

/// Generate the factory routine for one composition and language.
pub fn generate(
    ir: &CompositionIr,
    stringifier: &dyn Stringifier,
    options: &InstantiatorOptions,
) -> GeneratedOutput {
    let graph = ObjectGraph::from_composition(ir, true);
    let names = generate_node_names(&graph);

    let mut emitter = Emitter {
        graph: &graph,
        names: &names,
        s: stringifier,
        emitted: HashSet::new(),
        methods: Vec::new(),
    };

    let layer_exprs: Vec<String> = graph
        .roots()
        .iter()
        .map(|id| emitter.node_expr(*id))
        .collect();

    let root_body = call(
        stringifier,
        "Composition",
        &[
            stringifier.string(&ir.name),
            stringifier.double(ir.width),
            stringifier.double(ir.height),
            stringifier.double(ir.frame_rate),
            stringifier.double(ir.in_point),
            stringifier.double(ir.out_point),
            stringifier.array("SceneNode", &layer_exprs),
        ],
    );
    emitter.methods.push(Method {
        name: "Root".to_owned(),
        return_type: "SceneNode".to_owned(),
        body: root_body,
    });

    let mut header_lines = vec![format!(
        "Scene-graph factory for composition \"{}\".",
        ir.name
    )];
    if !options.test_mode {
        header_lines.push(format!(
            "Generated by lottiec {} from {}.",
            env!("CARGO_PKG_VERSION"),
            options.source_description
        ));
    }

    let files = stringifier.render_files(&options.class_name, &header_lines, &emitter.methods);
    debug!(
        language = stringifier.language_name(),
        methods = emitter.methods.len(),
        "generated factory"
    );

    GeneratedOutput {
        language_name: stringifier.language_name(),
        files,
        asset_references: collect_asset_references(ir),
    }
}

fn collect_asset_references(ir: &CompositionIr) -> Vec<String> {
    fn visit(layers: &[Arc<Layer>], seen: &mut HashSet<String>, out: &mut Vec<String>) {
        for layer in layers {
            match layer.as_ref() {
                Layer::Image(image) => {
                    if seen.insert(image.uri.clone()) {
                        out.push(image.uri.clone());
                    }
                }
                Layer::PreComp(pre) => visit(&pre.layers, seen, out),
                _ => {}
            }
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    visit(&ir.layers, &mut seen, &mut out);
    out
}

fn call(s: &dyn Stringifier, method: &str, args: &[String]) -> String {
    format!("f{}{method}({})", s.deref(), args.join(", "))
}

fn return_type(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Layer | NodeKind::Shape => "SceneNode",
        NodeKind::Transform => "Transform",
        NodeKind::Effect => "Effect",
        NodeKind::SolidColorBrush
        | NodeKind::LinearGradientBrush
        | NodeKind::RadialGradientBrush => "Brush",
        NodeKind::Geometry => "Geometry",
    }
}

struct Emitter<'a> {
    graph: &'a ObjectGraph,
    names: &'a BTreeMap<NodeId, String>,
    s: &'a dyn Stringifier,
    emitted: HashSet<NodeId>,
    methods: Vec<Method>,
}

impl Emitter<'_> {
    /// The expression for a node: a factory-method call when the node
    /// is shared, the inlined constructor expression otherwise. Shared
    /// nodes emit their method on first sight, after their children,
    /// so declarations are forward-reference free.
    fn node_expr(&mut self, id: NodeId) -> String {
        let node = self.graph.node(id);
        let shared = node.reference_count() > 1;
        if !shared {
            let object = node.object.clone();
            return self.object_expr(&object);
        }

        if self.emitted.insert(id) {
            let object = node.object.clone();
            let body = self.object_expr(&object);
            self.methods.push(Method {
                name: self.names[&id].clone(),
                return_type: return_type(object.kind()).to_owned(),
                body,
            });
        }
        format!("{}()", self.names[&id])
    }

    /// The expression for a child object, shared-aware when the object
    /// has a node in the graph.
    fn child(&mut self, object: GraphObject) -> String {
        match self.graph.id_of(&object) {
            Some(id) => self.node_expr(id),
            None => self.object_expr(&object),
        }
    }

    fn object_expr(&mut self, object: &GraphObject) -> String {
        match object {
            GraphObject::Layer(layer) => self.layer_expr(layer),
            GraphObject::Shape(shape) => self.shape_expr(shape),
            GraphObject::Transform(transform) => transform_expr(self.s, transform),
            GraphObject::Effect(effect) => effect_expr(self.s, effect),
            GraphObject::SolidColorBrush(brush) => call(
                self.s,
                "ColorBrush",
                &[
                    animatable_expr(self.s, &brush.color, &|v| self.s.color(*v)),
                    opacity_expr(self.s, &brush.opacity),
                ],
            ),
            GraphObject::LinearGradientBrush(brush) => call(
                self.s,
                "LinearGradientBrush",
                &[
                    vector2_anim_expr(self.s, &brush.start_point),
                    vector2_anim_expr(self.s, &brush.end_point),
                    stops_expr(self.s, &brush.stops),
                    opacity_expr(self.s, &brush.opacity),
                ],
            ),
            GraphObject::RadialGradientBrush(brush) => call(
                self.s,
                "RadialGradientBrush",
                &[
                    vector2_anim_expr(self.s, &brush.start_point),
                    vector2_anim_expr(self.s, &brush.end_point),
                    scalar_expr(self.s, &brush.highlight_length),
                    scalar_expr(self.s, &brush.highlight_degrees),
                    stops_expr(self.s, &brush.stops),
                    opacity_expr(self.s, &brush.opacity),
                ],
            ),
            GraphObject::Geometry(geometry) => geometry_expr(self.s, geometry),
        }
    }

    fn layer_expr(&mut self, layer: &Layer) -> String {
        let s = self.s;
        let props = layer.props();
        let transform = self.child(GraphObject::Transform(Arc::clone(&props.transform)));

        let base = match layer {
            Layer::PreComp(pre) => {
                let nested: Vec<String> = pre
                    .layers
                    .iter()
                    .map(|l| self.child(GraphObject::Layer(Arc::clone(l))))
                    .collect();
                call(
                    s,
                    "PreCompLayer",
                    &[
                        s.string(&props.name),
                        transform,
                        s.double(pre.width),
                        s.double(pre.height),
                        s.array("SceneNode", &nested),
                    ],
                )
            }
            Layer::Solid(solid) => call(
                s,
                "SolidLayer",
                &[
                    s.string(&props.name),
                    transform,
                    s.double(solid.width),
                    s.double(solid.height),
                    s.color(solid.color),
                ],
            ),
            Layer::Image(image) => call(
                s,
                "ImageLayer",
                &[
                    s.string(&props.name),
                    transform,
                    s.string(&image.uri),
                    s.double(image.width),
                    s.double(image.height),
                ],
            ),
            Layer::Null(_) => call(s, "NullLayer", &[s.string(&props.name), transform]),
            Layer::Shape(shape) => {
                let contents: Vec<String> = shape
                    .contents
                    .iter()
                    .map(|c| self.child(GraphObject::Shape(Arc::clone(c))))
                    .collect();
                call(
                    s,
                    "ShapeLayer",
                    &[
                        s.string(&props.name),
                        transform,
                        s.array("SceneNode", &contents),
                    ],
                )
            }
            Layer::Text(text) => call(
                s,
                "TextLayer",
                &[
                    s.string(&props.name),
                    transform,
                    animatable_expr(s, &text.document, &|d| text_document_expr(s, d)),
                ],
            ),
        };

        self.wrap_layer_props(base, props)
    }

    fn wrap_layer_props(&mut self, base: String, props: &LayerProps) -> String {
        let s = self.s;
        let mut expr = call(
            s,
            "WithTiming",
            &[base, s.double(props.in_point), s.double(props.out_point)],
        );

        if let Some(parent) = props.parent_index {
            expr = call(s, "WithParent", &[expr, s.int(parent)]);
        }
        if !props.masks.is_empty() {
            let masks: Vec<String> = props
                .masks
                .iter()
                .map(|m| self.mask_expr(m))
                .collect();
            expr = call(s, "WithMasks", &[expr, s.array("Mask", &masks)]);
        }
        if !props.effects.is_empty() {
            let effects: Vec<String> = props
                .effects
                .iter()
                .map(|e| self.child(GraphObject::Effect(Arc::clone(e))))
                .collect();
            expr = call(s, "WithEffects", &[expr, s.array("Effect", &effects)]);
        }
        if props.matte_mode != crate::ir::layer::MatteMode::None {
            expr = call(
                s,
                "WithMatte",
                &[expr, s.enum_value("MatteMode", &format!("{:?}", props.matte_mode))],
            );
        }
        if props.blend_mode != crate::ir::layer::BlendMode::Normal {
            expr = call(
                s,
                "WithBlendMode",
                &[
                    expr,
                    s.enum_value("BlendMode", &format!("{:?}", props.blend_mode)),
                ],
            );
        }

        expr
    }

    fn mask_expr(&mut self, mask: &Mask) -> String {
        let s = self.s;
        let geometry = self.child(GraphObject::Geometry(Arc::clone(&mask.geometry)));
        call(
            s,
            "Mask",
            &[
                s.string(&mask.name),
                s.bool(mask.inverted),
                s.enum_value("MaskMode", mask.mode.name()),
                geometry,
                opacity_expr(s, &mask.opacity),
            ],
        )
    }

    fn shape_expr(&mut self, shape: &ShapeContent) -> String {
        let s = self.s;
        match shape {
            ShapeContent::Group(group) => {
                let contents: Vec<String> = group
                    .contents
                    .iter()
                    .map(|c| self.child(GraphObject::Shape(Arc::clone(c))))
                    .collect();
                call(
                    s,
                    "ShapeGroup",
                    &[s.string(&group.name), s.array("SceneNode", &contents)],
                )
            }
            ShapeContent::Transform(transform) => {
                let inner = self.child(GraphObject::Transform(Arc::clone(transform)));
                call(s, "TransformItem", &[inner])
            }
            ShapeContent::Ellipse(e) => call(
                s,
                "Ellipse",
                &[
                    s.string(&e.name),
                    s.enum_value("Direction", &format!("{:?}", e.direction)),
                    vector2_anim_expr(s, &e.position),
                    vector2_anim_expr(s, &e.diameter),
                ],
            ),
            ShapeContent::Rectangle(r) => call(
                s,
                "Rectangle",
                &[
                    s.string(&r.name),
                    s.enum_value("Direction", &format!("{:?}", r.direction)),
                    vector2_anim_expr(s, &r.position),
                    vector2_anim_expr(s, &r.size),
                    scalar_expr(s, &r.corner_radius),
                ],
            ),
            ShapeContent::Path(p) => {
                let geometry = self.child(GraphObject::Geometry(Arc::clone(&p.geometry)));
                call(
                    s,
                    "Path",
                    &[
                        s.string(&p.name),
                        s.enum_value("Direction", &format!("{:?}", p.direction)),
                        geometry,
                    ],
                )
            }
            ShapeContent::Polystar(p) => {
                let optional = |value: &Option<Animatable<f64>>| match value {
                    Some(v) => scalar_expr(s, v),
                    None => s.null().to_owned(),
                };
                call(
                    s,
                    "Polystar",
                    &[
                        s.string(&p.name),
                        s.enum_value("StarKind", &format!("{:?}", p.star_kind)),
                        scalar_expr(s, &p.points),
                        vector2_anim_expr(s, &p.position),
                        rotation_expr(s, &p.rotation),
                        optional(&p.inner_radius),
                        optional(&p.inner_roundness),
                        scalar_expr(s, &p.outer_radius),
                        scalar_expr(s, &p.outer_roundness),
                    ],
                )
            }
            ShapeContent::TrimPath(t) => call(
                s,
                "TrimPath",
                &[
                    s.string(&t.name),
                    scalar_expr(s, &t.start),
                    scalar_expr(s, &t.end),
                    rotation_expr(s, &t.offset),
                    s.enum_value("TrimMultipleShapes", &format!("{:?}", t.multiple_shapes)),
                ],
            ),
            ShapeContent::MergePaths(m) => call(
                s,
                "MergePaths",
                &[
                    s.string(&m.name),
                    s.enum_value("MergeMode", &format!("{:?}", m.mode)),
                ],
            ),
            ShapeContent::Repeater(r) => {
                let transform = self.child(GraphObject::Transform(Arc::clone(&r.transform)));
                call(
                    s,
                    "Repeater",
                    &[
                        s.string(&r.name),
                        scalar_expr(s, &r.count),
                        scalar_expr(s, &r.offset),
                        opacity_expr(s, &r.start_opacity),
                        opacity_expr(s, &r.end_opacity),
                        transform,
                    ],
                )
            }
            ShapeContent::RoundCorners(r) => call(
                s,
                "RoundCorners",
                &[s.string(&r.name), scalar_expr(s, &r.radius)],
            ),
            ShapeContent::SolidColorFill(fill) => {
                let brush = self.child(GraphObject::SolidColorBrush(Arc::clone(&fill.brush)));
                call(
                    s,
                    "SolidColorFill",
                    &[
                        s.string(&fill.name),
                        s.enum_value("FillRule", &format!("{:?}", fill.fill_rule)),
                        brush,
                    ],
                )
            }
            ShapeContent::SolidColorStroke(stroke) => {
                let brush = self.child(GraphObject::SolidColorBrush(Arc::clone(&stroke.brush)));
                call(
                    s,
                    "SolidColorStroke",
                    &[
                        s.string(&stroke.name),
                        stroke_style_expr(s, &stroke.style),
                        brush,
                    ],
                )
            }
            ShapeContent::LinearGradientFill(fill) => {
                let brush = self.child(GraphObject::LinearGradientBrush(Arc::clone(&fill.brush)));
                call(
                    s,
                    "LinearGradientFill",
                    &[
                        s.string(&fill.name),
                        s.enum_value("FillRule", &format!("{:?}", fill.fill_rule)),
                        brush,
                    ],
                )
            }
            ShapeContent::LinearGradientStroke(stroke) => {
                let brush =
                    self.child(GraphObject::LinearGradientBrush(Arc::clone(&stroke.brush)));
                call(
                    s,
                    "LinearGradientStroke",
                    &[
                        s.string(&stroke.name),
                        stroke_style_expr(s, &stroke.style),
                        brush,
                    ],
                )
            }
            ShapeContent::RadialGradientFill(fill) => {
                let brush = self.child(GraphObject::RadialGradientBrush(Arc::clone(&fill.brush)));
                call(
                    s,
                    "RadialGradientFill",
                    &[
                        s.string(&fill.name),
                        s.enum_value("FillRule", &format!("{:?}", fill.fill_rule)),
                        brush,
                    ],
                )
            }
            ShapeContent::RadialGradientStroke(stroke) => {
                let brush =
                    self.child(GraphObject::RadialGradientBrush(Arc::clone(&stroke.brush)));
                call(
                    s,
                    "RadialGradientStroke",
                    &[
                        s.string(&stroke.name),
                        stroke_style_expr(s, &stroke.style),
                        brush,
                    ],
                )
            }
        }
    }
}

fn text_document_expr(s: &dyn Stringifier, doc: &TextDocument) -> String {
    let fill_color = match doc.fill_color {
        Some(color) => s.color(color),
        None => s.null().to_owned(),
    };
    let line_height = match doc.line_height {
        Some(height) => s.double(height),
        None => s.null().to_owned(),
    };
    call(
        s,
        "TextDocument",
        &[
            s.string(&doc.text),
            s.string(&doc.font_family),
            s.double(doc.size),
            fill_color,
            s.enum_value("Justification", &format!("{:?}", doc.justification)),
            s.double(doc.tracking),
            line_height,
        ],
    )
}

fn animatable_expr<T: Clone + PartialEq>(
    s: &dyn Stringifier,
    anim: &Animatable<T>,
    value: &dyn Fn(&T) -> String,
) -> String {
    if !anim.is_animated() {
        return call(s, "Static", &[value(anim.initial_value())]);
    }

    let frames: Vec<String> = anim
        .key_frames()
        .iter()
        .map(|kf| {
            let easing = easing_expr(s, kf.easing);
            match kf.spatial_bezier {
                Some(sp) => call(
                    s,
                    "SpatialKeyFrame",
                    &[
                        s.double(kf.frame),
                        value(&kf.value),
                        s.vector2(sp.control_point_1),
                        s.vector2(sp.control_point_2),
                        easing,
                    ],
                ),
                None => call(
                    s,
                    "KeyFrame",
                    &[s.double(kf.frame), value(&kf.value), easing],
                ),
            }
        })
        .collect();

    call(s, "KeyFrames", &[s.array("KeyFrame", &frames)])
}

fn easing_expr(s: &dyn Stringifier, easing: Easing) -> String {
    match easing {
        Easing::Linear => call(s, "LinearEasing", &[]),
        Easing::Hold => call(s, "HoldEasing", &[]),
        Easing::CubicBezier(cb) => call(
            s,
            "CubicBezierEasing",
            &[
                s.vector2(cb.control_point_1),
                s.vector2(cb.control_point_2),
            ],
        ),
    }
}

fn scalar_expr(s: &dyn Stringifier, anim: &Animatable<f64>) -> String {
    animatable_expr(s, anim, &|v| s.double(*v))
}

fn opacity_expr(s: &dyn Stringifier, anim: &Animatable<Opacity>) -> String {
    animatable_expr(s, anim, &|v| s.double(v.fraction()))
}

fn rotation_expr(s: &dyn Stringifier, anim: &Animatable<Rotation>) -> String {
    animatable_expr(s, anim, &|v| s.double(v.degrees))
}

fn vector2_anim_expr(s: &dyn Stringifier, anim: &AnimatableVector2) -> String {
    match anim {
        AnimatableVector2::Packed(v) => animatable_expr(s, v, &|value| s.vector2(*value)),
        AnimatableVector2::Split { x, y } => call(
            s,
            "SplitVector2",
            &[scalar_expr(s, x), scalar_expr(s, y)],
        ),
    }
}

fn transform_expr(s: &dyn Stringifier, transform: &Transform) -> String {
    call(
        s,
        "Transform",
        &[
            vector2_anim_expr(s, &transform.anchor),
            vector2_anim_expr(s, &transform.position),
            vector2_anim_expr(s, &transform.scale),
            rotation_expr(s, &transform.rotation),
            opacity_expr(s, &transform.opacity),
        ],
    )
}

fn effect_expr(s: &dyn Stringifier, effect: &crate::ir::effect::Effect) -> String {
    use crate::ir::effect::Effect;

    match effect {
        Effect::DropShadow(e) => call(
            s,
            "DropShadowEffect",
            &[
                s.string(&e.name),
                s.bool(e.is_enabled),
                animatable_expr(s, &e.color, &|v| s.color(*v)),
                rotation_expr(s, &e.direction),
                scalar_expr(s, &e.distance),
                scalar_expr(s, &e.softness),
                s.bool(e.is_shadow_only),
            ],
        ),
        Effect::GaussianBlur(e) => call(
            s,
            "GaussianBlurEffect",
            &[
                s.string(&e.name),
                s.bool(e.is_enabled),
                scalar_expr(s, &e.blurriness),
            ],
        ),
        Effect::Unknown(e) => call(
            s,
            "UnknownEffect",
            &[
                s.string(&e.name),
                s.string(&e.kind),
                s.string(&e.params.to_string()),
            ],
        ),
    }
}

fn stroke_style_expr(s: &dyn Stringifier, style: &StrokeStyle) -> String {
    call(
        s,
        "StrokeStyle",
        &[
            scalar_expr(s, &style.width),
            s.enum_value("LineCap", &format!("{:?}", style.cap)),
            s.enum_value("LineJoin", &format!("{:?}", style.join)),
            s.double(style.miter_limit),
        ],
    )
}

fn stops_expr(s: &dyn Stringifier, stops: &Animatable<GradientStops>) -> String {
    animatable_expr(s, stops, &|value| {
        let items: Vec<String> = value
            .stops
            .iter()
            .map(|stop| match stop {
                GradientStop::Color { offset, color } => call(
                    s,
                    "ColorStop",
                    &[s.double(*offset), s.color(*color)],
                ),
                GradientStop::Opacity { offset, opacity } => call(
                    s,
                    "OpacityStop",
                    &[s.double(*offset), s.double(opacity.fraction())],
                ),
            })
            .collect();
        call(s, "GradientStops", &[s.array("GradientStop", &items)])
    })
}

fn geometry_expr(s: &dyn Stringifier, geometry: &Animatable<PathGeometry>) -> String {
    animatable_expr(s, geometry, &|value| {
        let segments: Vec<String> = value
            .bezier_segments
            .iter()
            .map(|seg| {
                call(
                    s,
                    "BezierSegment",
                    &[
                        s.vector2(seg.cp0),
                        s.vector2(seg.cp1),
                        s.vector2(seg.cp2),
                        s.vector2(seg.cp3),
                    ],
                )
            })
            .collect();
        call(
            s,
            "PathGeometry",
            &[s.array("BezierSegment", &segments), s.bool(value.is_closed)],
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/instantiator.rs"]
mod tests;
