//! Semantics-preserving tree reduction: removal of empty or invisible
//! containers and coalescing of single-child groups whose transforms
//! can be composed.
//!
//! Every pass builds a new tree; the input is never touched. The
//! relative order of surviving siblings is always preserved, so draw
//! order cannot change.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::animatables::animatable::Animatable;
use crate::animatables::vectors::{AnimatableVector2, VectorAnimation};
use crate::foundation::core::{Opacity, Rotation, Vector2};
use crate::ir::layer::{CompositionIr, Layer, PreCompLayer, ShapeLayer};
use crate::ir::shape::{ShapeContent, ShapeGroup};
use crate::ir::transform::Transform;

/// Run the tree-reduction passes over a composition.
pub fn reduce(ir: &CompositionIr) -> CompositionIr {
    let layers = reduce_layer_list(&ir.layers);
    debug!(
        before = ir.layers.len(),
        after = layers.len(),
        "reduced layer tree"
    );

    CompositionIr {
        name: ir.name.clone(),
        width: ir.width,
        height: ir.height,
        frame_rate: ir.frame_rate,
        in_point: ir.in_point,
        out_point: ir.out_point,
        layers,
        markers: ir.markers.clone(),
    }
}

/// Reduce one layer list (a composition or a precomp's content).
///
/// A layer may only be dropped when no surviving layer in the same list
/// parents to it, since parenting borrows the target's transform.
fn reduce_layer_list(layers: &[Arc<Layer>]) -> Vec<Arc<Layer>> {
    // Rebuild each layer and decide whether it is a removal candidate.
    let rebuilt: Vec<(Arc<Layer>, bool)> = layers.iter().map(|l| reduce_layer(l)).collect();

    // A candidate stays if some kept layer parents to it, transitively.
    let mut kept: Vec<bool> = rebuilt.iter().map(|(_, candidate)| !candidate).collect();
    loop {
        let needed: HashSet<i64> = rebuilt
            .iter()
            .zip(&kept)
            .filter(|(_, kept)| **kept)
            .filter_map(|((layer, _), _)| layer.props().parent_index)
            .collect();

        let mut changed = false;
        for (i, (layer, _)) in rebuilt.iter().enumerate() {
            if !kept[i] && needed.contains(&layer.props().index) {
                kept[i] = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    rebuilt
        .into_iter()
        .zip(kept)
        .filter(|(_, kept)| *kept)
        .map(|((layer, _), _)| layer)
        .collect()
}

/// Returns the rebuilt layer and whether it is a removal candidate
/// (nothing left to draw, or hidden).
fn reduce_layer(layer: &Arc<Layer>) -> (Arc<Layer>, bool) {
    let hidden = layer.props().is_hidden;

    match layer.as_ref() {
        Layer::Shape(shape) => {
            let contents = reduce_contents(&shape.contents);
            let empty = !contents.iter().any(|c| c.is_drawable());
            let rebuilt = Arc::new(Layer::Shape(ShapeLayer {
                props: shape.props.clone(),
                contents,
            }));
            (rebuilt, empty || hidden)
        }
        Layer::PreComp(pre) => {
            let nested = reduce_layer_list(&pre.layers);
            let empty = nested.is_empty();
            let rebuilt = Arc::new(Layer::PreComp(PreCompLayer {
                props: pre.props.clone(),
                ref_id: pre.ref_id.clone(),
                width: pre.width,
                height: pre.height,
                layers: nested,
            }));
            (rebuilt, empty || hidden)
        }
        // Null layers draw nothing; they are kept only when parented to.
        Layer::Null(_) => (Arc::clone(layer), true),
        Layer::Solid(_) | Layer::Image(_) | Layer::Text(_) => (Arc::clone(layer), hidden),
    }
}

fn reduce_contents(contents: &[Arc<ShapeContent>]) -> Vec<Arc<ShapeContent>> {
    contents
        .iter()
        .filter_map(|content| match content.as_ref() {
            ShapeContent::Group(group) => reduce_group(group).map(Arc::new),
            _ => Some(Arc::clone(content)),
        })
        .collect()
}

/// Reduce one group. Returns `None` when nothing drawable remains.
fn reduce_group(group: &ShapeGroup) -> Option<ShapeContent> {
    let contents = reduce_contents(&group.contents);
    if !contents.iter().any(|c| c.is_drawable()) {
        return None;
    }

    let reduced = ShapeGroup {
        name: group.name.clone(),
        contents,
    };
    Some(ShapeContent::Group(
        try_coalesce(&reduced).unwrap_or(reduced),
    ))
}

/// Merge a group holding exactly one child group into a single group,
/// when the two transforms compose safely.
fn try_coalesce(group: &ShapeGroup) -> Option<ShapeGroup> {
    let (outer_transforms, others): (Vec<_>, Vec<_>) = group
        .contents
        .iter()
        .partition(|c| matches!(c.as_ref(), ShapeContent::Transform(_)));
    if outer_transforms.len() > 1 || others.len() != 1 {
        return None;
    }
    let ShapeContent::Group(child) = others[0].as_ref() else {
        return None;
    };

    let (inner_transforms, child_others): (Vec<_>, Vec<_>) = child
        .contents
        .iter()
        .partition(|c| matches!(c.as_ref(), ShapeContent::Transform(_)));
    if inner_transforms.len() > 1 {
        return None;
    }

    let identity = Transform::identity();
    let unwrap = |items: &[&Arc<ShapeContent>]| match items.first().map(|c| c.as_ref()) {
        Some(ShapeContent::Transform(t)) => Arc::clone(t),
        _ => Arc::new(identity.clone()),
    };
    let outer = unwrap(&outer_transforms);
    let inner = unwrap(&inner_transforms);

    let combined = compose_transforms(&outer, &inner)?;

    let name = if group.name.is_empty() {
        child.name.clone()
    } else {
        group.name.clone()
    };

    let mut contents: Vec<Arc<ShapeContent>> =
        child_others.into_iter().map(Arc::clone).collect();
    contents.push(Arc::new(ShapeContent::Transform(Arc::new(combined))));

    Some(ShapeGroup { name, contents })
}

/// Compose `outer ∘ inner` (the outer transform wraps the inner one)
/// into a single transform, or `None` when the composition cannot be
/// expressed without changing the rendered result.
fn compose_transforms(outer: &Transform, inner: &Transform) -> Option<Transform> {
    if inner.is_identity() {
        return Some(outer.clone());
    }
    if outer.is_identity() {
        return Some(inner.clone());
    }

    let opacity = combine_opacity(&outer.opacity, &inner.opacity)?;

    // One side moves nothing: keep the other side's geometry.
    if outer.has_identity_geometry() {
        return Some(Transform {
            opacity,
            ..inner.clone()
        });
    }
    if inner.has_identity_geometry() {
        return Some(Transform {
            opacity,
            ..outer.clone()
        });
    }

    // A pure translation wraps any inner transform: it adds to the
    // inner position after everything else the inner transform does.
    if is_only_position(outer) {
        let position = combine_positions(&outer.position, &inner.position)?;
        return Some(Transform {
            position,
            opacity,
            ..inner.clone()
        });
    }

    // Two pure rotations about the origin add.
    if is_only_rotation(outer) && is_only_rotation(inner) {
        let rotation = combine_rotations(&outer.rotation, &inner.rotation)?;
        return Some(Transform {
            rotation,
            opacity,
            ..Transform::identity()
        });
    }

    // Two pure scales multiply component-wise.
    if is_only_scale(outer) && is_only_scale(inner) {
        let scale = combine_scales(&outer.scale, &inner.scale)?;
        return Some(Transform {
            scale,
            opacity,
            ..Transform::identity()
        });
    }

    None
}

fn is_only_position(t: &Transform) -> bool {
    t.anchor.is_always(Vector2::ZERO)
        && t.scale.is_always(Vector2::ONE)
        && t.rotation.is_always(&Rotation::NONE)
}

fn is_only_rotation(t: &Transform) -> bool {
    t.anchor.is_always(Vector2::ZERO)
        && t.position.is_always(Vector2::ZERO)
        && t.scale.is_always(Vector2::ONE)
}

fn is_only_scale(t: &Transform) -> bool {
    t.anchor.is_always(Vector2::ZERO)
        && t.position.is_always(Vector2::ZERO)
        && t.rotation.is_always(&Rotation::NONE)
}

fn combine_opacity(
    a: &Animatable<Opacity>,
    b: &Animatable<Opacity>,
) -> Option<Animatable<Opacity>> {
    if a.is_always(&Opacity::OPAQUE) {
        return Some(b.clone());
    }
    if b.is_always(&Opacity::OPAQUE) {
        return Some(a.clone());
    }
    if !a.is_animated() {
        let factor = *a.initial_value();
        return Some(b.select(|o| *o * factor));
    }
    if !b.is_animated() {
        let factor = *b.initial_value();
        return Some(a.select(|o| *o * factor));
    }
    None
}

fn combine_positions(
    a: &AnimatableVector2,
    b: &AnimatableVector2,
) -> Option<AnimatableVector2> {
    if !a.is_animated() {
        return Some(b.with_offset(a.initial_value()));
    }
    if !b.is_animated() {
        return Some(a.with_offset(b.initial_value()));
    }
    None
}

fn combine_rotations(
    a: &Animatable<Rotation>,
    b: &Animatable<Rotation>,
) -> Option<Animatable<Rotation>> {
    if !a.is_animated() {
        let delta = *a.initial_value();
        return Some(b.select(|r| *r + delta));
    }
    if !b.is_animated() {
        let delta = *b.initial_value();
        return Some(a.select(|r| *r + delta));
    }
    None
}

fn combine_scales(a: &AnimatableVector2, b: &AnimatableVector2) -> Option<AnimatableVector2> {
    if !a.is_animated() {
        let factor = a.initial_value();
        if factor.x == factor.y {
            return Some(b.scaled(factor.x));
        }
    }
    if !b.is_animated() {
        let factor = b.initial_value();
        if factor.x == factor.y {
            return Some(a.scaled(factor.x));
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/optimizer/reducer.rs"]
mod tests;
