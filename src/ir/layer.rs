use std::sync::Arc;

use crate::animatables::animatable::Animatable;
use crate::animatables::bezier::PathGeometry;
use crate::foundation::core::{Color, Opacity};
use crate::ir::effect::Effect;
use crate::ir::shape::ShapeContent;
use crate::ir::transform::Transform;

/// The root of the intermediate representation: a translated, unit-
/// converted composition whose layers are stored in draw order (bottom
/// first, ascending source index).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompositionIr {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub frame_rate: f64,
    pub in_point: f64,
    pub out_point: f64,
    pub layers: Vec<Arc<Layer>>,
    pub markers: Vec<Marker>,
}

/// A named position on the timeline, carried through for metadata
/// consumers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Marker {
    pub name: String,
    pub frame: f64,
    pub duration_frames: f64,
}

/// One translated layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Layer {
    PreComp(PreCompLayer),
    Solid(SolidLayer),
    Image(ImageLayer),
    Null(NullLayer),
    Shape(ShapeLayer),
    Text(TextLayer),
}

impl Layer {
    /// The properties shared by every layer kind.
    pub fn props(&self) -> &LayerProps {
        match self {
            Self::PreComp(l) => &l.props,
            Self::Solid(l) => &l.props,
            Self::Image(l) => &l.props,
            Self::Null(l) => &l.props,
            Self::Shape(l) => &l.props,
            Self::Text(l) => &l.props,
        }
    }

    /// This layer's kind tag.
    pub fn kind(&self) -> LayerKind {
        match self {
            Self::PreComp(_) => LayerKind::PreComp,
            Self::Solid(_) => LayerKind::Solid,
            Self::Image(_) => LayerKind::Image,
            Self::Null(_) => LayerKind::Null,
            Self::Shape(_) => LayerKind::Shape,
            Self::Text(_) => LayerKind::Text,
        }
    }
}

/// Discriminant of [`Layer`], used by statistics and naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum LayerKind {
    PreComp,
    Solid,
    Image,
    Null,
    Shape,
    Text,
}

impl LayerKind {
    /// Display label.
    pub fn name(self) -> &'static str {
        match self {
            Self::PreComp => "PreComp",
            Self::Solid => "Solid",
            Self::Image => "Image",
            Self::Null => "Null",
            Self::Shape => "Shape",
            Self::Text => "Text",
        }
    }
}

/// Properties common to all layer kinds.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerProps {
    pub name: String,
    /// Draw index; lower draws below higher.
    pub index: i64,
    /// Index of the layer supplying an inherited transform, if any.
    pub parent_index: Option<i64>,
    pub in_point: f64,
    pub out_point: f64,
    pub is_hidden: bool,
    pub blend_mode: BlendMode,
    pub matte_mode: MatteMode,
    pub transform: Arc<Transform>,
    pub masks: Vec<Mask>,
    pub effects: Vec<Arc<Effect>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum BlendMode {
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

/// How a layer is matted by its neighbor below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum MatteMode {
    #[default]
    None,
    Alpha,
    InvertedAlpha,
    Luma,
    InvertedLuma,
}

/// A mask clipping a layer's content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Mask {
    pub name: String,
    pub inverted: bool,
    pub mode: MaskMode,
    pub geometry: Arc<Animatable<PathGeometry>>,
    pub opacity: Animatable<Opacity>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum MaskMode {
    None,
    #[default]
    Add,
    Subtract,
    Intersect,
    Lighten,
    Darken,
    Difference,
}

impl MaskMode {
    /// Display label.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Intersect => "Intersect",
            Self::Lighten => "Lighten",
            Self::Darken => "Darken",
            Self::Difference => "Difference",
        }
    }
}

/// A nested composition instantiated in place, its content already
/// resolved and time-shifted.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PreCompLayer {
    pub props: LayerProps,
    pub ref_id: String,
    pub width: f64,
    pub height: f64,
    pub layers: Vec<Arc<Layer>>,
}

/// A solid color rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SolidLayer {
    pub props: LayerProps,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// A bitmap referenced by URI; the bitmap itself is an external asset.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ImageLayer {
    pub props: LayerProps,
    pub asset_id: String,
    /// Path or URI the generated code will load at runtime.
    pub uri: String,
    pub width: f64,
    pub height: f64,
}

/// A content-less layer, kept because other layers parent to it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NullLayer {
    pub props: LayerProps,
}

/// Vector content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeLayer {
    pub props: LayerProps,
    pub contents: Vec<Arc<ShapeContent>>,
}

/// Text content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextLayer {
    pub props: LayerProps,
    pub document: Animatable<TextDocument>,
}

/// The static content of a text layer at one key frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextDocument {
    pub text: String,
    pub font_family: String,
    pub size: f64,
    pub fill_color: Option<Color>,
    pub justification: Justification,
    pub tracking: f64,
    pub line_height: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Justification {
    #[default]
    Left,
    Right,
    Center,
}
