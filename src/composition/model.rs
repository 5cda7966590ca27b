//! The parsed source composition object model.
//!
//! This is the read-only boundary type produced by the container reader.
//! Field names mirror the source format's meaning rather than its short
//! JSON keys; values are raw (percent opacities, degree rotations, flat
//! gradient-stop arrays) — unit conversion happens in the translator.

use serde::{Deserialize, Serialize};

/// A complete parsed composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionDef {
    /// Composition name, used for generated class/file naming.
    #[serde(default)]
    pub name: String,
    /// Source format version string.
    #[serde(default)]
    pub version: String,
    pub width: f64,
    pub height: f64,
    pub frame_rate: f64,
    pub in_point: f64,
    pub out_point: f64,
    #[serde(default)]
    pub assets: Vec<AssetDef>,
    #[serde(default)]
    pub markers: Vec<MarkerDef>,
    pub layers: Vec<LayerDef>,
}

/// A named position on the composition timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerDef {
    #[serde(default)]
    pub name: String,
    pub frame: f64,
    #[serde(default)]
    pub duration_frames: f64,
}

/// A reusable asset referenced by layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetDef {
    /// A nested layer collection instantiated by precomp layers.
    Precomp {
        id: String,
        layers: Vec<LayerDef>,
    },
    /// A bitmap referenced by image layers.
    Image {
        id: String,
        width: f64,
        height: f64,
        /// Directory or URI prefix.
        #[serde(default)]
        path: String,
        #[serde(default)]
        file_name: String,
    },
}

impl AssetDef {
    /// The asset's identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Precomp { id, .. } | Self::Image { id, .. } => id,
        }
    }
}

/// One layer of a composition or precomp asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDef {
    #[serde(default)]
    pub name: String,
    /// Drawing index; lower indices draw below higher ones.
    pub index: i64,
    /// Index of the parent layer supplying an extra transform, if any.
    #[serde(default)]
    pub parent: Option<i64>,
    pub in_point: f64,
    pub out_point: f64,
    /// Offset added to the layer's own timeline.
    #[serde(default)]
    pub start_time: f64,
    #[serde(default = "default_time_stretch")]
    pub time_stretch: f64,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub auto_orient: bool,
    #[serde(default)]
    pub blend_mode: BlendModeDef,
    #[serde(default)]
    pub matte_mode: MatteModeDef,
    #[serde(default)]
    pub transform: TransformDef,
    #[serde(default)]
    pub masks: Vec<MaskDef>,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
    #[serde(flatten)]
    pub content: LayerContentDef,
}

fn default_time_stretch() -> f64 {
    1.0
}

/// Per-kind layer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerContentDef {
    Precomp {
        ref_id: String,
        width: f64,
        height: f64,
        #[serde(default)]
        time_remap: Option<PropertyDef<f64>>,
    },
    Solid {
        width: f64,
        height: f64,
        /// `#RRGGBB` hex color.
        color: String,
    },
    Image {
        ref_id: String,
    },
    Null,
    Shape {
        shapes: Vec<ShapeItemDef>,
    },
    Text {
        document: PropertyDef<TextDocumentDef>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendModeDef {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

/// How a layer is matted by the layer below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatteModeDef {
    #[default]
    None,
    Alpha,
    InvertedAlpha,
    Luma,
    InvertedLuma,
}

/// A scalar or vector property that may be key-framed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyDef<T> {
    /// A static value.
    Value(T),
    /// A key-framed value.
    Animated { key_frames: Vec<KeyFrameDef<T>> },
}

impl<T> PropertyDef<T> {
    /// `true` when the property carries key frames.
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}

/// One raw key frame with optional easing handles and spatial tangents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyFrameDef<T> {
    pub frame: f64,
    pub value: T,
    /// Hold the value until the next key frame.
    #[serde(default)]
    pub hold: bool,
    /// Outgoing easing handle, unit square.
    #[serde(default)]
    pub ease_out: Option<[f64; 2]>,
    /// Incoming easing handle of the next key frame, unit square.
    #[serde(default)]
    pub ease_in: Option<[f64; 2]>,
    /// Outgoing spatial tangent, relative to `value`.
    #[serde(default)]
    pub tangent_out: Option<[f64; 2]>,
    /// Incoming spatial tangent, relative to the next value.
    #[serde(default)]
    pub tangent_in: Option<[f64; 2]>,
}

/// A 2D vector property, packed or split per component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VectorPropertyDef {
    Packed(PropertyDef<[f64; 2]>),
    Split {
        x: PropertyDef<f64>,
        y: PropertyDef<f64>,
    },
}

impl VectorPropertyDef {
    /// A static packed vector.
    pub fn constant(x: f64, y: f64) -> Self {
        Self::Packed(PropertyDef::Value([x, y]))
    }
}

/// RGBA color with `0..=1` channels.
pub type ColorDef = [f64; 4];

/// A layer or shape-group transform with raw units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformDef {
    #[serde(default = "VectorPropertyDef::default_zero")]
    pub anchor: VectorPropertyDef,
    #[serde(default = "VectorPropertyDef::default_zero")]
    pub position: VectorPropertyDef,
    /// Percent; `[100, 100]` is unscaled.
    #[serde(default = "VectorPropertyDef::default_hundred")]
    pub scale: VectorPropertyDef,
    /// Degrees.
    #[serde(default = "PropertyDef::default_zero")]
    pub rotation: PropertyDef<f64>,
    /// Percent; `100` is opaque.
    #[serde(default = "PropertyDef::default_hundred")]
    pub opacity: PropertyDef<f64>,
}

impl VectorPropertyDef {
    fn default_zero() -> Self {
        Self::constant(0.0, 0.0)
    }

    fn default_hundred() -> Self {
        Self::constant(100.0, 100.0)
    }
}

impl PropertyDef<f64> {
    fn default_zero() -> Self {
        Self::Value(0.0)
    }

    fn default_hundred() -> Self {
        Self::Value(100.0)
    }
}

impl Default for TransformDef {
    fn default() -> Self {
        Self {
            anchor: VectorPropertyDef::default_zero(),
            position: VectorPropertyDef::default_zero(),
            scale: VectorPropertyDef::default_hundred(),
            rotation: PropertyDef::default_zero(),
            opacity: PropertyDef::default_hundred(),
        }
    }
}

/// Raw cubic path data: per-vertex tangents plus a closed flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathDef {
    pub vertices: Vec<[f64; 2]>,
    /// Incoming tangents, relative to the matching vertex.
    #[serde(default)]
    pub in_tangents: Vec<[f64; 2]>,
    /// Outgoing tangents, relative to the matching vertex.
    #[serde(default)]
    pub out_tangents: Vec<[f64; 2]>,
    #[serde(default)]
    pub closed: bool,
}

/// Winding direction of a shape's geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionDef {
    #[default]
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRuleDef {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCapDef {
    #[default]
    Butt,
    Round,
    Projected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoinDef {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarKindDef {
    #[default]
    Star,
    Polygon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKindDef {
    #[default]
    Linear,
    Radial,
}

/// How a trim path applies across multiple sibling shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMultipleShapesDef {
    #[default]
    Individually,
    Simultaneously,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeModeDef {
    #[default]
    Merge,
    Add,
    Subtract,
    Intersect,
    ExcludeIntersections,
}

/// Gradient stops as stored in the source: a flat value array holding
/// `count` color stops (offset, r, g, b) optionally followed by opacity
/// stops (offset, opacity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientStopsDef {
    pub count: usize,
    pub values: PropertyDef<Vec<f64>>,
}

/// One item in a shape layer's content list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeItemDef {
    Group {
        #[serde(default)]
        name: String,
        items: Vec<ShapeItemDef>,
    },
    Transform {
        #[serde(default)]
        name: String,
        #[serde(flatten)]
        transform: TransformDef,
    },
    Ellipse {
        #[serde(default)]
        name: String,
        #[serde(default)]
        direction: DirectionDef,
        position: VectorPropertyDef,
        diameter: VectorPropertyDef,
    },
    Rectangle {
        #[serde(default)]
        name: String,
        #[serde(default)]
        direction: DirectionDef,
        position: VectorPropertyDef,
        size: VectorPropertyDef,
        #[serde(default = "PropertyDef::default_zero")]
        corner_radius: PropertyDef<f64>,
    },
    Path {
        #[serde(default)]
        name: String,
        #[serde(default)]
        direction: DirectionDef,
        geometry: PropertyDef<PathDef>,
    },
    Polystar {
        #[serde(default)]
        name: String,
        #[serde(default)]
        direction: DirectionDef,
        #[serde(default)]
        star_kind: StarKindDef,
        points: PropertyDef<f64>,
        position: VectorPropertyDef,
        #[serde(default = "PropertyDef::default_zero")]
        rotation: PropertyDef<f64>,
        #[serde(default)]
        inner_radius: Option<PropertyDef<f64>>,
        #[serde(default)]
        inner_roundness: Option<PropertyDef<f64>>,
        outer_radius: PropertyDef<f64>,
        #[serde(default = "PropertyDef::default_zero")]
        outer_roundness: PropertyDef<f64>,
    },
    TrimPath {
        #[serde(default)]
        name: String,
        /// Percent.
        start: PropertyDef<f64>,
        /// Percent.
        end: PropertyDef<f64>,
        /// Degrees.
        #[serde(default = "PropertyDef::default_zero")]
        offset: PropertyDef<f64>,
        #[serde(default)]
        multiple_shapes: TrimMultipleShapesDef,
    },
    MergePaths {
        #[serde(default)]
        name: String,
        #[serde(default)]
        mode: MergeModeDef,
    },
    Repeater {
        #[serde(default)]
        name: String,
        count: PropertyDef<f64>,
        #[serde(default = "PropertyDef::default_zero")]
        offset: PropertyDef<f64>,
        #[serde(default = "PropertyDef::default_hundred")]
        start_opacity: PropertyDef<f64>,
        #[serde(default = "PropertyDef::default_hundred")]
        end_opacity: PropertyDef<f64>,
        #[serde(default)]
        transform: TransformDef,
    },
    RoundCorners {
        #[serde(default)]
        name: String,
        radius: PropertyDef<f64>,
    },
    Fill {
        #[serde(default)]
        name: String,
        #[serde(default)]
        fill_rule: FillRuleDef,
        color: PropertyDef<ColorDef>,
        /// Percent.
        #[serde(default = "PropertyDef::default_hundred")]
        opacity: PropertyDef<f64>,
    },
    Stroke {
        #[serde(default)]
        name: String,
        #[serde(default)]
        cap: LineCapDef,
        #[serde(default)]
        join: LineJoinDef,
        #[serde(default = "default_miter_limit")]
        miter_limit: f64,
        color: PropertyDef<ColorDef>,
        /// Percent.
        #[serde(default = "PropertyDef::default_hundred")]
        opacity: PropertyDef<f64>,
        width: PropertyDef<f64>,
    },
    GradientFill {
        #[serde(default)]
        name: String,
        #[serde(default)]
        fill_rule: FillRuleDef,
        #[serde(default)]
        gradient_kind: GradientKindDef,
        start_point: VectorPropertyDef,
        end_point: VectorPropertyDef,
        #[serde(default)]
        highlight_length: Option<PropertyDef<f64>>,
        #[serde(default)]
        highlight_angle: Option<PropertyDef<f64>>,
        stops: GradientStopsDef,
        /// Percent.
        #[serde(default = "PropertyDef::default_hundred")]
        opacity: PropertyDef<f64>,
    },
    GradientStroke {
        #[serde(default)]
        name: String,
        #[serde(default)]
        cap: LineCapDef,
        #[serde(default)]
        join: LineJoinDef,
        #[serde(default = "default_miter_limit")]
        miter_limit: f64,
        #[serde(default)]
        gradient_kind: GradientKindDef,
        start_point: VectorPropertyDef,
        end_point: VectorPropertyDef,
        #[serde(default)]
        highlight_length: Option<PropertyDef<f64>>,
        #[serde(default)]
        highlight_angle: Option<PropertyDef<f64>>,
        stops: GradientStopsDef,
        /// Percent.
        #[serde(default = "PropertyDef::default_hundred")]
        opacity: PropertyDef<f64>,
        width: PropertyDef<f64>,
    },
}

fn default_miter_limit() -> f64 {
    4.0
}

/// An effect instance: a kind tag plus raw parameters. Known kinds are
/// parsed by the translator; unknown kinds pass through with an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectDef {
    #[serde(default)]
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub is_enabled: Option<bool>,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// One mask applied to a layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub mode: MaskModeDef,
    pub points: PropertyDef<PathDef>,
    /// Percent.
    #[serde(default = "PropertyDef::default_hundred")]
    pub opacity: PropertyDef<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskModeDef {
    None,
    #[default]
    Add,
    Subtract,
    Intersect,
    Lighten,
    Darken,
    Difference,
}

/// Static text content of a text layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDocumentDef {
    pub text: String,
    #[serde(default)]
    pub font_family: String,
    pub size: f64,
    #[serde(default)]
    pub fill_color: Option<ColorDef>,
    #[serde(default)]
    pub justification: JustificationDef,
    #[serde(default)]
    pub tracking: f64,
    #[serde(default)]
    pub line_height: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationDef {
    #[default]
    Left,
    Right,
    Center,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
