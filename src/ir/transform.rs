use crate::animatables::animatable::Animatable;
use crate::animatables::vectors::{AnimatableVector2, VectorAnimation};
use crate::foundation::core::{Opacity, Rotation, Vector2};

/// An animatable transform: anchor, position, scale, rotation, opacity.
///
/// Scale is a fraction (`1.0` is unscaled) and opacity a `0..=1`
/// fraction; the translator converts from the source's percent units.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Transform {
    pub anchor: AnimatableVector2,
    pub position: AnimatableVector2,
    pub scale: AnimatableVector2,
    pub rotation: Animatable<Rotation>,
    pub opacity: Animatable<Opacity>,
}

impl Transform {
    /// The transform that leaves content untouched.
    pub fn identity() -> Self {
        Self {
            anchor: AnimatableVector2::new_static(Vector2::ZERO),
            position: AnimatableVector2::new_static(Vector2::ZERO),
            scale: AnimatableVector2::new_static(Vector2::ONE),
            rotation: Animatable::new_static(Rotation::NONE),
            opacity: Animatable::new_static(Opacity::OPAQUE),
        }
    }

    /// `true` when geometry is untouched: anchor and position always
    /// zero, scale always one, rotation always none. Opacity is not
    /// considered.
    pub fn has_identity_geometry(&self) -> bool {
        self.anchor.is_always(Vector2::ZERO)
            && self.position.is_always(Vector2::ZERO)
            && self.scale.is_always(Vector2::ONE)
            && self.rotation.is_always(&Rotation::NONE)
    }

    /// `true` when the transform has no effect at all.
    pub fn is_identity(&self) -> bool {
        self.has_identity_geometry() && self.opacity.is_always(&Opacity::OPAQUE)
    }

    /// `true` when no component is animated.
    pub fn is_static(&self) -> bool {
        !self.anchor.is_animated()
            && !self.position.is_animated()
            && !self.scale.is_animated()
            && !self.rotation.is_animated()
            && !self.opacity.is_animated()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ir/transform.rs"]
mod tests;
