use crate::animatables::animatable::Animatable;
use crate::foundation::core::{Vector2, Vector3};

/// Capability shared by the two representations of an animated vector.
///
/// A vector-valued property is stored either as one packed animated
/// vector or as independently animated components; callers operate only
/// through this trait and need not know which representation underlies a
/// given property.
pub trait VectorAnimation: Sized {
    /// The vector value type produced by this animation.
    type Vector;

    /// The value at the start of the timeline.
    fn initial_value(&self) -> Self::Vector;

    /// `true` when any component changes over time.
    fn is_animated(&self) -> bool;

    /// Add `offset` to every value.
    fn with_offset(&self, offset: Self::Vector) -> Self;

    /// Multiply every value by `factor`.
    fn scaled(&self, factor: f64) -> Self;

    /// Shift every key frame by `time_offset` frames.
    fn with_time_offset(&self, time_offset: f64) -> Self;
}

/// An animated 2D vector, packed or split into components.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnimatableVector2 {
    /// One animated vector value.
    Packed(Animatable<Vector2>),
    /// Independently animated components.
    Split {
        /// Horizontal component.
        x: Animatable<f64>,
        /// Vertical component.
        y: Animatable<f64>,
    },
}

impl AnimatableVector2 {
    /// A non-animated vector.
    pub fn new_static(value: Vector2) -> Self {
        Self::Packed(Animatable::new_static(value))
    }

    /// `true` when every component is static and equal to `value`.
    pub fn is_always(&self, value: Vector2) -> bool {
        match self {
            Self::Packed(v) => v.is_always(&value),
            Self::Split { x, y } => x.is_always(&value.x) && y.is_always(&value.y),
        }
    }
}

impl VectorAnimation for AnimatableVector2 {
    type Vector = Vector2;

    fn initial_value(&self) -> Vector2 {
        match self {
            Self::Packed(v) => *v.initial_value(),
            Self::Split { x, y } => Vector2::new(*x.initial_value(), *y.initial_value()),
        }
    }

    fn is_animated(&self) -> bool {
        match self {
            Self::Packed(v) => v.is_animated(),
            Self::Split { x, y } => x.is_animated() || y.is_animated(),
        }
    }

    fn with_offset(&self, offset: Vector2) -> Self {
        match self {
            Self::Packed(v) => Self::Packed(v.select(|value| *value + offset)),
            Self::Split { x, y } => Self::Split {
                x: x.select(|value| value + offset.x),
                y: y.select(|value| value + offset.y),
            },
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        match self {
            Self::Packed(v) => Self::Packed(v.select(|value| *value * factor)),
            Self::Split { x, y } => Self::Split {
                x: x.select(|value| value * factor),
                y: y.select(|value| value * factor),
            },
        }
    }

    fn with_time_offset(&self, time_offset: f64) -> Self {
        match self {
            Self::Packed(v) => Self::Packed(v.with_time_offset(time_offset)),
            Self::Split { x, y } => Self::Split {
                x: x.with_time_offset(time_offset),
                y: y.with_time_offset(time_offset),
            },
        }
    }
}

/// An animated 3D vector, packed or split into components.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnimatableVector3 {
    /// One animated vector value.
    Packed(Animatable<Vector3>),
    /// Independently animated components.
    Split {
        /// Horizontal component.
        x: Animatable<f64>,
        /// Vertical component.
        y: Animatable<f64>,
        /// Depth component.
        z: Animatable<f64>,
    },
}

impl AnimatableVector3 {
    /// A non-animated vector.
    pub fn new_static(value: Vector3) -> Self {
        Self::Packed(Animatable::new_static(value))
    }

    /// Project onto the XY plane, dropping the depth component.
    pub fn xy(&self) -> AnimatableVector2 {
        match self {
            Self::Packed(v) => AnimatableVector2::Packed(v.select(|value| value.xy())),
            Self::Split { x, y, z: _ } => AnimatableVector2::Split {
                x: x.clone(),
                y: y.clone(),
            },
        }
    }
}

impl VectorAnimation for AnimatableVector3 {
    type Vector = Vector3;

    fn initial_value(&self) -> Vector3 {
        match self {
            Self::Packed(v) => *v.initial_value(),
            Self::Split { x, y, z } => Vector3::new(
                *x.initial_value(),
                *y.initial_value(),
                *z.initial_value(),
            ),
        }
    }

    fn is_animated(&self) -> bool {
        match self {
            Self::Packed(v) => v.is_animated(),
            Self::Split { x, y, z } => x.is_animated() || y.is_animated() || z.is_animated(),
        }
    }

    fn with_offset(&self, offset: Vector3) -> Self {
        match self {
            Self::Packed(v) => Self::Packed(v.select(|value| *value + offset)),
            Self::Split { x, y, z } => Self::Split {
                x: x.select(|value| value + offset.x),
                y: y.select(|value| value + offset.y),
                z: z.select(|value| value + offset.z),
            },
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        match self {
            Self::Packed(v) => Self::Packed(v.select(|value| *value * factor)),
            Self::Split { x, y, z } => Self::Split {
                x: x.select(|value| value * factor),
                y: y.select(|value| value * factor),
                z: z.select(|value| value * factor),
            },
        }
    }

    fn with_time_offset(&self, time_offset: f64) -> Self {
        match self {
            Self::Packed(v) => Self::Packed(v.with_time_offset(time_offset)),
            Self::Split { x, y, z } => Self::Split {
                x: x.with_time_offset(time_offset),
                y: y.with_time_offset(time_offset),
                z: z.with_time_offset(time_offset),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animatables/vectors.rs"]
mod tests;
