//! Mapping from source shape items to IR shape content, one function
//! per concrete item type.

use std::sync::Arc;

use crate::composition::model::{
    DirectionDef, FillRuleDef, GradientKindDef, GradientStopsDef, LineCapDef, LineJoinDef,
    MergeModeDef, PropertyDef, ShapeItemDef, StarKindDef, TrimMultipleShapesDef,
};
use crate::foundation::core::{Color, Opacity};
use crate::foundation::error::LottiecResult;
use crate::ir::shape::{
    Direction, Ellipse, FillRule, GradientStop, GradientStops, LineCap, LineJoin,
    LinearGradientBrush, LinearGradientFill, LinearGradientStroke, MergeMode, MergePaths,
    PathShape, Polystar, RadialGradientBrush, RadialGradientFill, RadialGradientStroke,
    Rectangle, Repeater, RoundCorners, ShapeContent, ShapeGroup, SolidColorBrush,
    SolidColorFill, SolidColorStroke, StarKind, StrokeStyle, TrimMultipleShapes, TrimPath,
};
use crate::translator::issues::IssueCollector;
use crate::translator::properties;

pub(crate) fn translate_shape_items(
    issues: &mut IssueCollector,
    items: &[ShapeItemDef],
    time_offset: f64,
) -> LottiecResult<Vec<Arc<ShapeContent>>> {
    items
        .iter()
        .map(|item| translate_shape_item(issues, item, time_offset).map(Arc::new))
        .collect()
}

fn translate_shape_item(
    issues: &mut IssueCollector,
    item: &ShapeItemDef,
    time_offset: f64,
) -> LottiecResult<ShapeContent> {
    Ok(match item {
        ShapeItemDef::Group { name, items } => ShapeContent::Group(ShapeGroup {
            name: name.clone(),
            contents: translate_shape_items(issues, items, time_offset)?,
        }),
        ShapeItemDef::Transform { name: _, transform } => {
            ShapeContent::Transform(Arc::new(properties::transform(transform, time_offset)?))
        }
        ShapeItemDef::Ellipse {
            name,
            direction,
            position,
            diameter,
        } => ShapeContent::Ellipse(Ellipse {
            name: name.clone(),
            direction: direction_of(*direction),
            position: properties::vector2(position, time_offset, 1.0)?,
            diameter: properties::vector2(diameter, time_offset, 1.0)?,
        }),
        ShapeItemDef::Rectangle {
            name,
            direction,
            position,
            size,
            corner_radius,
        } => ShapeContent::Rectangle(Rectangle {
            name: name.clone(),
            direction: direction_of(*direction),
            position: properties::vector2(position, time_offset, 1.0)?,
            size: properties::vector2(size, time_offset, 1.0)?,
            corner_radius: properties::scalar(corner_radius, time_offset)?,
        }),
        ShapeItemDef::Path {
            name,
            direction,
            geometry,
        } => ShapeContent::Path(PathShape {
            name: name.clone(),
            direction: direction_of(*direction),
            geometry: Arc::new(properties::animatable_path(geometry, time_offset)?),
        }),
        ShapeItemDef::Polystar {
            name,
            direction,
            star_kind,
            points,
            position,
            rotation,
            inner_radius,
            inner_roundness,
            outer_radius,
            outer_roundness,
        } => {
            let star_kind = match star_kind {
                StarKindDef::Star => StarKind::Star,
                StarKindDef::Polygon => StarKind::Polygon,
            };
            let optional_scalar = |prop: &Option<PropertyDef<f64>>| {
                prop.as_ref()
                    .map(|p| properties::scalar(p, time_offset))
                    .transpose()
            };
            ShapeContent::Polystar(Polystar {
                name: name.clone(),
                direction: direction_of(*direction),
                star_kind,
                points: properties::scalar(points, time_offset)?,
                position: properties::vector2(position, time_offset, 1.0)?,
                rotation: properties::rotation_from_degrees(rotation, time_offset)?,
                inner_radius: optional_scalar(inner_radius)?,
                inner_roundness: optional_scalar(inner_roundness)?,
                outer_radius: properties::scalar(outer_radius, time_offset)?,
                outer_roundness: properties::scalar(outer_roundness, time_offset)?,
            })
        }
        ShapeItemDef::TrimPath {
            name,
            start,
            end,
            offset,
            multiple_shapes,
        } => ShapeContent::TrimPath(TrimPath {
            name: name.clone(),
            start: properties::fraction_from_percent(start, time_offset)?,
            end: properties::fraction_from_percent(end, time_offset)?,
            offset: properties::rotation_from_degrees(offset, time_offset)?,
            multiple_shapes: match multiple_shapes {
                TrimMultipleShapesDef::Individually => TrimMultipleShapes::Individually,
                TrimMultipleShapesDef::Simultaneously => TrimMultipleShapes::Simultaneously,
            },
        }),
        ShapeItemDef::MergePaths { name, mode } => ShapeContent::MergePaths(MergePaths {
            name: name.clone(),
            mode: match mode {
                MergeModeDef::Merge => MergeMode::Merge,
                MergeModeDef::Add => MergeMode::Add,
                MergeModeDef::Subtract => MergeMode::Subtract,
                MergeModeDef::Intersect => MergeMode::Intersect,
                MergeModeDef::ExcludeIntersections => MergeMode::ExcludeIntersections,
            },
        }),
        ShapeItemDef::Repeater {
            name,
            count,
            offset,
            start_opacity,
            end_opacity,
            transform,
        } => ShapeContent::Repeater(Repeater {
            name: name.clone(),
            count: properties::scalar(count, time_offset)?,
            offset: properties::scalar(offset, time_offset)?,
            start_opacity: properties::opacity_from_percent(start_opacity, time_offset)?,
            end_opacity: properties::opacity_from_percent(end_opacity, time_offset)?,
            transform: Arc::new(properties::transform(transform, time_offset)?),
        }),
        ShapeItemDef::RoundCorners { name, radius } => ShapeContent::RoundCorners(RoundCorners {
            name: name.clone(),
            radius: properties::scalar(radius, time_offset)?,
        }),
        ShapeItemDef::Fill {
            name,
            fill_rule,
            color,
            opacity,
        } => ShapeContent::SolidColorFill(SolidColorFill {
            name: name.clone(),
            fill_rule: fill_rule_of(*fill_rule),
            brush: Arc::new(SolidColorBrush {
                color: properties::color(color, time_offset)?,
                opacity: properties::opacity_from_percent(opacity, time_offset)?,
            }),
        }),
        ShapeItemDef::Stroke {
            name,
            cap,
            join,
            miter_limit,
            color,
            opacity,
            width,
        } => ShapeContent::SolidColorStroke(SolidColorStroke {
            name: name.clone(),
            style: stroke_style(*cap, *join, *miter_limit, width, time_offset)?,
            brush: Arc::new(SolidColorBrush {
                color: properties::color(color, time_offset)?,
                opacity: properties::opacity_from_percent(opacity, time_offset)?,
            }),
        }),
        ShapeItemDef::GradientFill {
            name,
            fill_rule,
            gradient_kind,
            start_point,
            end_point,
            highlight_length,
            highlight_angle,
            stops,
            opacity,
        } => {
            let fill_rule = fill_rule_of(*fill_rule);
            match gradient_kind {
                GradientKindDef::Linear => ShapeContent::LinearGradientFill(LinearGradientFill {
                    name: name.clone(),
                    fill_rule,
                    brush: Arc::new(linear_brush(
                        issues,
                        name,
                        start_point,
                        end_point,
                        stops,
                        opacity,
                        time_offset,
                    )?),
                }),
                GradientKindDef::Radial => ShapeContent::RadialGradientFill(RadialGradientFill {
                    name: name.clone(),
                    fill_rule,
                    brush: Arc::new(radial_brush(
                        issues,
                        name,
                        start_point,
                        end_point,
                        highlight_length,
                        highlight_angle,
                        stops,
                        opacity,
                        time_offset,
                    )?),
                }),
            }
        }
        ShapeItemDef::GradientStroke {
            name,
            cap,
            join,
            miter_limit,
            gradient_kind,
            start_point,
            end_point,
            highlight_length,
            highlight_angle,
            stops,
            opacity,
            width,
        } => {
            let style = stroke_style(*cap, *join, *miter_limit, width, time_offset)?;
            match gradient_kind {
                GradientKindDef::Linear => {
                    ShapeContent::LinearGradientStroke(LinearGradientStroke {
                        name: name.clone(),
                        style,
                        brush: Arc::new(linear_brush(
                            issues,
                            name,
                            start_point,
                            end_point,
                            stops,
                            opacity,
                            time_offset,
                        )?),
                    })
                }
                GradientKindDef::Radial => {
                    ShapeContent::RadialGradientStroke(RadialGradientStroke {
                        name: name.clone(),
                        style,
                        brush: Arc::new(radial_brush(
                            issues,
                            name,
                            start_point,
                            end_point,
                            highlight_length,
                            highlight_angle,
                            stops,
                            opacity,
                            time_offset,
                        )?),
                    })
                }
            }
        }
    })
}

fn direction_of(def: DirectionDef) -> Direction {
    match def {
        DirectionDef::Clockwise => Direction::Clockwise,
        DirectionDef::CounterClockwise => Direction::CounterClockwise,
    }
}

fn fill_rule_of(def: FillRuleDef) -> FillRule {
    match def {
        FillRuleDef::NonZero => FillRule::NonZero,
        FillRuleDef::EvenOdd => FillRule::EvenOdd,
    }
}

fn stroke_style(
    cap: LineCapDef,
    join: LineJoinDef,
    miter_limit: f64,
    width: &PropertyDef<f64>,
    time_offset: f64,
) -> LottiecResult<StrokeStyle> {
    Ok(StrokeStyle {
        width: properties::scalar(width, time_offset)?,
        cap: match cap {
            LineCapDef::Butt => LineCap::Butt,
            LineCapDef::Round => LineCap::Round,
            LineCapDef::Projected => LineCap::Projected,
        },
        join: match join {
            LineJoinDef::Miter => LineJoin::Miter,
            LineJoinDef::Round => LineJoin::Round,
            LineJoinDef::Bevel => LineJoin::Bevel,
        },
        miter_limit,
    })
}

#[allow(clippy::too_many_arguments)]
fn linear_brush(
    issues: &mut IssueCollector,
    name: &str,
    start_point: &crate::composition::model::VectorPropertyDef,
    end_point: &crate::composition::model::VectorPropertyDef,
    stops: &GradientStopsDef,
    opacity: &PropertyDef<f64>,
    time_offset: f64,
) -> LottiecResult<LinearGradientBrush> {
    Ok(LinearGradientBrush {
        start_point: properties::vector2(start_point, time_offset, 1.0)?,
        end_point: properties::vector2(end_point, time_offset, 1.0)?,
        stops: gradient_stops(issues, name, stops, time_offset)?,
        opacity: properties::opacity_from_percent(opacity, time_offset)?,
    })
}

#[allow(clippy::too_many_arguments)]
fn radial_brush(
    issues: &mut IssueCollector,
    name: &str,
    start_point: &crate::composition::model::VectorPropertyDef,
    end_point: &crate::composition::model::VectorPropertyDef,
    highlight_length: &Option<PropertyDef<f64>>,
    highlight_angle: &Option<PropertyDef<f64>>,
    stops: &GradientStopsDef,
    opacity: &PropertyDef<f64>,
    time_offset: f64,
) -> LottiecResult<RadialGradientBrush> {
    let optional = |prop: &Option<PropertyDef<f64>>,
                    convert: fn(&PropertyDef<f64>, f64) -> LottiecResult<crate::animatables::Animatable<f64>>|
     -> LottiecResult<crate::animatables::Animatable<f64>> {
        match prop {
            Some(p) => convert(p, time_offset),
            None => Ok(crate::animatables::Animatable::new_static(0.0)),
        }
    };

    Ok(RadialGradientBrush {
        start_point: properties::vector2(start_point, time_offset, 1.0)?,
        end_point: properties::vector2(end_point, time_offset, 1.0)?,
        highlight_length: optional(highlight_length, properties::fraction_from_percent)?,
        highlight_degrees: optional(highlight_angle, properties::scalar)?,
        stops: gradient_stops(issues, name, stops, time_offset)?,
        opacity: properties::opacity_from_percent(opacity, time_offset)?,
    })
}

/// Unpack the source's flat stop array: `count` color stops of
/// `(offset, r, g, b)` followed by `(offset, opacity)` pairs.
fn gradient_stops(
    issues: &mut IssueCollector,
    name: &str,
    def: &GradientStopsDef,
    time_offset: f64,
) -> LottiecResult<crate::animatables::Animatable<GradientStops>> {
    let well_formed = |values: &Vec<f64>| {
        values.len() >= def.count * 4 && (values.len() - def.count * 4) % 2 == 0
    };
    let malformed = match &def.values {
        PropertyDef::Value(v) => !well_formed(v),
        PropertyDef::Animated { key_frames } => {
            key_frames.iter().any(|kf| !well_formed(&kf.value))
        }
    };
    if malformed {
        issues.gradient_stops_malformed(name)?;
    }

    let count = def.count;
    properties::animatable(&def.values, time_offset, move |values: &Vec<f64>| {
        parse_stops(values, count)
    })
}

fn parse_stops(values: &[f64], count: usize) -> GradientStops {
    let mut stops = Vec::new();
    for i in 0..count {
        let base = i * 4;
        if base + 3 >= values.len() {
            break;
        }
        stops.push(GradientStop::Color {
            offset: values[base],
            color: Color::from_floats(1.0, values[base + 1], values[base + 2], values[base + 3]),
        });
    }

    let mut i = count * 4;
    while i + 1 < values.len() {
        stops.push(GradientStop::Opacity {
            offset: values[i],
            opacity: Opacity::from_fraction(values[i + 1]),
        });
        i += 2;
    }

    GradientStops { stops }
}

#[cfg(test)]
#[path = "../../tests/unit/translator/shapes.rs"]
mod tests;
