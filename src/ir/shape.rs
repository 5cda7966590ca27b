use std::sync::Arc;

use crate::animatables::animatable::Animatable;
use crate::animatables::bezier::PathGeometry;
use crate::animatables::vectors::AnimatableVector2;
use crate::foundation::core::{Color, Opacity, Rotation};
use crate::ir::transform::Transform;

/// One item in a shape layer's (or group's) content list.
///
/// Contents are stored in draw order; modifiers (trim, merge, repeat,
/// round) apply to the geometry that precedes them, and a trailing
/// `Transform` applies to the whole group.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ShapeContent {
    Group(ShapeGroup),
    Transform(Arc<Transform>),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Path(PathShape),
    Polystar(Polystar),
    TrimPath(TrimPath),
    MergePaths(MergePaths),
    Repeater(Repeater),
    RoundCorners(RoundCorners),
    SolidColorFill(SolidColorFill),
    SolidColorStroke(SolidColorStroke),
    LinearGradientFill(LinearGradientFill),
    LinearGradientStroke(LinearGradientStroke),
    RadialGradientFill(RadialGradientFill),
    RadialGradientStroke(RadialGradientStroke),
}

impl ShapeContent {
    /// The item's display name, empty when the source had none.
    pub fn name(&self) -> &str {
        match self {
            Self::Group(s) => &s.name,
            Self::Transform(_) => "",
            Self::Ellipse(s) => &s.name,
            Self::Rectangle(s) => &s.name,
            Self::Path(s) => &s.name,
            Self::Polystar(s) => &s.name,
            Self::TrimPath(s) => &s.name,
            Self::MergePaths(s) => &s.name,
            Self::Repeater(s) => &s.name,
            Self::RoundCorners(s) => &s.name,
            Self::SolidColorFill(s) => &s.name,
            Self::SolidColorStroke(s) => &s.name,
            Self::LinearGradientFill(s) => &s.name,
            Self::LinearGradientStroke(s) => &s.name,
            Self::RadialGradientFill(s) => &s.name,
            Self::RadialGradientStroke(s) => &s.name,
        }
    }

    /// A short label for the variant, used in naming and statistics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Group(_) => "Group",
            Self::Transform(_) => "Transform",
            Self::Ellipse(_) => "Ellipse",
            Self::Rectangle(_) => "Rectangle",
            Self::Path(_) => "Path",
            Self::Polystar(_) => "Polystar",
            Self::TrimPath(_) => "TrimPath",
            Self::MergePaths(_) => "MergePaths",
            Self::Repeater(_) => "Repeater",
            Self::RoundCorners(_) => "RoundCorners",
            Self::SolidColorFill(_) => "SolidColorFill",
            Self::SolidColorStroke(_) => "SolidColorStroke",
            Self::LinearGradientFill(_) => "LinearGradientFill",
            Self::LinearGradientStroke(_) => "LinearGradientStroke",
            Self::RadialGradientFill(_) => "RadialGradientFill",
            Self::RadialGradientStroke(_) => "RadialGradientStroke",
        }
    }

    /// `true` for variants that produce geometry on their own.
    pub fn is_drawable(&self) -> bool {
        match self {
            Self::Group(_)
            | Self::Ellipse(_)
            | Self::Rectangle(_)
            | Self::Path(_)
            | Self::Polystar(_) => true,
            Self::Transform(_)
            | Self::TrimPath(_)
            | Self::MergePaths(_)
            | Self::Repeater(_)
            | Self::RoundCorners(_)
            | Self::SolidColorFill(_)
            | Self::SolidColorStroke(_)
            | Self::LinearGradientFill(_)
            | Self::LinearGradientStroke(_)
            | Self::RadialGradientFill(_)
            | Self::RadialGradientStroke(_) => false,
        }
    }
}

/// A nested content list with its own transform item.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeGroup {
    pub name: String,
    pub contents: Vec<Arc<ShapeContent>>,
}

/// Winding direction of generated geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Ellipse {
    pub name: String,
    pub direction: Direction,
    pub position: AnimatableVector2,
    pub diameter: AnimatableVector2,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Rectangle {
    pub name: String,
    pub direction: Direction,
    pub position: AnimatableVector2,
    pub size: AnimatableVector2,
    pub corner_radius: Animatable<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathShape {
    pub name: String,
    pub direction: Direction,
    pub geometry: Arc<Animatable<PathGeometry>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum StarKind {
    #[default]
    Star,
    Polygon,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Polystar {
    pub name: String,
    pub direction: Direction,
    pub star_kind: StarKind,
    pub points: Animatable<f64>,
    pub position: AnimatableVector2,
    pub rotation: Animatable<Rotation>,
    /// Star-kind only.
    pub inner_radius: Option<Animatable<f64>>,
    /// Star-kind only.
    pub inner_roundness: Option<Animatable<f64>>,
    pub outer_radius: Animatable<f64>,
    pub outer_roundness: Animatable<f64>,
}

/// How a trim path applies across multiple sibling shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum TrimMultipleShapes {
    #[default]
    Individually,
    Simultaneously,
}

/// Trims the preceding geometry to a sub-range of its length. Start and
/// end are `0..=1` fractions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrimPath {
    pub name: String,
    pub start: Animatable<f64>,
    pub end: Animatable<f64>,
    pub offset: Animatable<Rotation>,
    pub multiple_shapes: TrimMultipleShapes,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum MergeMode {
    #[default]
    Merge,
    Add,
    Subtract,
    Intersect,
    ExcludeIntersections,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MergePaths {
    pub name: String,
    pub mode: MergeMode,
}

/// Repeats the preceding content with a per-copy transform delta.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Repeater {
    pub name: String,
    pub count: Animatable<f64>,
    pub offset: Animatable<f64>,
    pub start_opacity: Animatable<Opacity>,
    pub end_opacity: Animatable<Opacity>,
    pub transform: Arc<Transform>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RoundCorners {
    pub name: String,
    pub radius: Animatable<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Projected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke geometry parameters shared by solid and gradient strokes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StrokeStyle {
    pub width: Animatable<f64>,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SolidColorFill {
    pub name: String,
    pub fill_rule: FillRule,
    pub brush: Arc<SolidColorBrush>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SolidColorStroke {
    pub name: String,
    pub style: StrokeStyle,
    pub brush: Arc<SolidColorBrush>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradientFill {
    pub name: String,
    pub fill_rule: FillRule,
    pub brush: Arc<LinearGradientBrush>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradientStroke {
    pub name: String,
    pub style: StrokeStyle,
    pub brush: Arc<LinearGradientBrush>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RadialGradientFill {
    pub name: String,
    pub fill_rule: FillRule,
    pub brush: Arc<RadialGradientBrush>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RadialGradientStroke {
    pub name: String,
    pub style: StrokeStyle,
    pub brush: Arc<RadialGradientBrush>,
}

/// A solid color with its own opacity. Equality is by value, which makes
/// identical brushes dedup candidates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SolidColorBrush {
    pub color: Animatable<Color>,
    pub opacity: Animatable<Opacity>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradientBrush {
    pub start_point: AnimatableVector2,
    pub end_point: AnimatableVector2,
    pub stops: Animatable<GradientStops>,
    pub opacity: Animatable<Opacity>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RadialGradientBrush {
    pub start_point: AnimatableVector2,
    pub end_point: AnimatableVector2,
    pub highlight_length: Animatable<f64>,
    pub highlight_degrees: Animatable<f64>,
    pub stops: Animatable<GradientStops>,
    pub opacity: Animatable<Opacity>,
}

/// An ordered gradient stop sequence.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct GradientStops {
    pub stops: Vec<GradientStop>,
}

/// One gradient stop: a color stop or an opacity stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum GradientStop {
    Color { offset: f64, color: Color },
    Opacity { offset: f64, opacity: Opacity },
}
