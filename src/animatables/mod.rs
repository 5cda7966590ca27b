//! The animatable value model: generic key-frame containers, easing
//! variants, the dual representation of animated vectors, and bezier
//! path geometry.

pub mod animatable;
pub mod bezier;
pub mod easing;
pub mod vectors;

pub use animatable::{Animatable, KeyFrame, SpatialBezier};
pub use bezier::{BezierSegment, PathGeometry, are_points_colinear};
pub use easing::{CubicBezierEasing, Easing};
pub use vectors::{AnimatableVector2, AnimatableVector3, VectorAnimation};
