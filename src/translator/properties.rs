//! Conversion from raw source properties to animatable IR values.
//!
//! All unit conversion lives here: percent opacities become fractions,
//! percent scales become fractions, degree angles become [`Rotation`],
//! byte-oriented colors become float channels, and raw cubic path data
//! becomes [`PathGeometry`]. A time offset (from precomp start times)
//! is applied to every key-framed value as it is built.

use crate::animatables::animatable::{Animatable, KeyFrame, SpatialBezier};
use crate::animatables::bezier::{BezierSegment, PathGeometry};
use crate::animatables::easing::{CubicBezierEasing, Easing};
use crate::animatables::vectors::AnimatableVector2;
use crate::composition::model::{ColorDef, KeyFrameDef, PathDef, PropertyDef, VectorPropertyDef};
use crate::foundation::core::{Color, Opacity, Rotation, Vector2};
use crate::foundation::error::LottiecResult;

fn easing_of<T>(kf: &KeyFrameDef<T>) -> Easing {
    if kf.hold {
        return Easing::Hold;
    }
    match (kf.ease_out, kf.ease_in) {
        (Some(out), Some(inn)) => Easing::CubicBezier(CubicBezierEasing::new(
            Vector2::new(out[0], out[1]),
            Vector2::new(inn[0], inn[1]),
        )),
        _ => Easing::Linear,
    }
}

fn spatial_of<T>(kf: &KeyFrameDef<T>) -> Option<SpatialBezier> {
    match (kf.tangent_out, kf.tangent_in) {
        (Some(out), Some(inn)) => Some(SpatialBezier {
            control_point_1: Vector2::new(out[0], out[1]),
            control_point_2: Vector2::new(inn[0], inn[1]),
        }),
        _ => None,
    }
}

/// Convert a raw property through `convert`, preserving key-frame
/// timing and easing and applying `time_offset`.
pub(crate) fn animatable<S, T, F>(
    prop: &PropertyDef<S>,
    time_offset: f64,
    convert: F,
) -> LottiecResult<Animatable<T>>
where
    T: Clone + PartialEq,
    F: Fn(&S) -> T,
{
    match prop {
        PropertyDef::Value(v) => Ok(Animatable::new_static(convert(v))),
        PropertyDef::Animated { key_frames } => {
            let frames = key_frames
                .iter()
                .map(|kf| KeyFrame {
                    frame: kf.frame,
                    value: convert(&kf.value),
                    easing: easing_of(kf),
                    spatial_bezier: spatial_of(kf),
                })
                .collect();
            Ok(Animatable::new(frames)?.with_time_offset(time_offset))
        }
    }
}

pub(crate) fn scalar(prop: &PropertyDef<f64>, time_offset: f64) -> LottiecResult<Animatable<f64>> {
    animatable(prop, time_offset, |v| *v)
}

/// Percent in the source, `0..=1` fraction in the IR.
pub(crate) fn fraction_from_percent(
    prop: &PropertyDef<f64>,
    time_offset: f64,
) -> LottiecResult<Animatable<f64>> {
    animatable(prop, time_offset, |v| v / 100.0)
}

pub(crate) fn opacity_from_percent(
    prop: &PropertyDef<f64>,
    time_offset: f64,
) -> LottiecResult<Animatable<Opacity>> {
    animatable(prop, time_offset, |v| Opacity::from_percent(*v))
}

pub(crate) fn rotation_from_degrees(
    prop: &PropertyDef<f64>,
    time_offset: f64,
) -> LottiecResult<Animatable<Rotation>> {
    animatable(prop, time_offset, |v| Rotation::from_degrees(*v))
}

/// Source colors are `[r, g, b, a]` with `0..=1` channels.
pub(crate) fn color(
    prop: &PropertyDef<ColorDef>,
    time_offset: f64,
) -> LottiecResult<Animatable<Color>> {
    animatable(prop, time_offset, |v| {
        Color::from_floats(v[3], v[0], v[1], v[2])
    })
}

/// Convert a vector property, multiplying every component by `factor`.
/// The packed/split representation is preserved.
pub(crate) fn vector2(
    prop: &VectorPropertyDef,
    time_offset: f64,
    factor: f64,
) -> LottiecResult<AnimatableVector2> {
    Ok(match prop {
        VectorPropertyDef::Packed(p) => AnimatableVector2::Packed(animatable(
            p,
            time_offset,
            |v| Vector2::new(v[0] * factor, v[1] * factor),
        )?),
        VectorPropertyDef::Split { x, y } => AnimatableVector2::Split {
            x: animatable(x, time_offset, |v| v * factor)?,
            y: animatable(y, time_offset, |v| v * factor)?,
        },
    })
}

/// Convert a raw transform. Scale and opacity arrive as percent and
/// leave as fractions; rotation arrives as degrees.
pub(crate) fn transform(
    def: &crate::composition::model::TransformDef,
    time_offset: f64,
) -> LottiecResult<crate::ir::transform::Transform> {
    Ok(crate::ir::transform::Transform {
        anchor: vector2(&def.anchor, time_offset, 1.0)?,
        position: vector2(&def.position, time_offset, 1.0)?,
        scale: vector2(&def.scale, time_offset, 0.01)?,
        rotation: rotation_from_degrees(&def.rotation, time_offset)?,
        opacity: opacity_from_percent(&def.opacity, time_offset)?,
    })
}

pub(crate) fn path_geometry(def: &PathDef) -> PathGeometry {
    fn at(tangents: &[[f64; 2]], i: usize) -> Vector2 {
        tangents
            .get(i)
            .map(|t| Vector2::new(t[0], t[1]))
            .unwrap_or(Vector2::ZERO)
    }

    let vertices = &def.vertices;
    let n = vertices.len();
    let mut segments = Vec::new();
    if n >= 2 {
        let segment_count = if def.closed { n } else { n - 1 };
        for i in 0..segment_count {
            let j = (i + 1) % n;
            let v0 = Vector2::new(vertices[i][0], vertices[i][1]);
            let v1 = Vector2::new(vertices[j][0], vertices[j][1]);
            // Tangents are stored relative to their vertex.
            segments.push(BezierSegment::new(
                v0,
                v0 + at(&def.out_tangents, i),
                v1 + at(&def.in_tangents, j),
                v1,
            ));
        }
    }

    PathGeometry::new(segments, def.closed)
}

pub(crate) fn animatable_path(
    prop: &PropertyDef<PathDef>,
    time_offset: f64,
) -> LottiecResult<Animatable<PathGeometry>> {
    animatable(prop, time_offset, path_geometry)
}

#[cfg(test)]
#[path = "../../tests/unit/translator/properties.rs"]
mod tests;
