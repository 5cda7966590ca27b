//! The target-agnostic intermediate representation produced by the
//! translator and consumed by the optimizer and code generator.
//!
//! Every node is immutable after construction. Children are held behind
//! `Arc` so the dedup pass can repoint references at canonical instances
//! without copying subtrees; the tree serializes for read-only
//! consumers such as the YAML dumper.

pub mod effect;
pub mod layer;
pub mod shape;
pub mod transform;

pub use effect::{DropShadowEffect, Effect, GaussianBlurEffect, UnknownEffect};
pub use layer::{
    BlendMode, CompositionIr, ImageLayer, Justification, Layer, LayerKind, LayerProps, Marker,
    Mask, MaskMode, MatteMode, NullLayer, PreCompLayer, ShapeLayer, SolidLayer, TextDocument,
    TextLayer,
};
pub use shape::{
    Direction, Ellipse, FillRule, GradientStop, GradientStops, LineCap, LineJoin,
    LinearGradientBrush, LinearGradientFill, LinearGradientStroke, MergeMode, MergePaths,
    PathShape, Polystar, RadialGradientBrush, RadialGradientFill, RadialGradientStroke,
    Rectangle, Repeater, RoundCorners, ShapeContent, ShapeGroup, SolidColorBrush,
    SolidColorFill, SolidColorStroke, StarKind, StrokeStyle, TrimMultipleShapes, TrimPath,
};
pub use transform::Transform;
