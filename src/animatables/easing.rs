use crate::foundation::core::Vector2;

/// Interpolation behavior between a key frame and the next one.
///
/// `Linear` and `Hold` carry no parameters, so any two instances of the
/// same kind compare equal; `CubicBezier` equality compares control
/// points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Easing {
    /// Interpolate linearly toward the next key frame.
    Linear,
    /// Hold the current value, then jump at the next key frame.
    Hold,
    /// Interpolate along a cubic bezier described by two control points.
    CubicBezier(CubicBezierEasing),
}

/// The control-point pair of a cubic bezier easing, both in the unit
/// square.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezierEasing {
    /// First control point.
    pub control_point_1: Vector2,
    /// Second control point.
    pub control_point_2: Vector2,
}

impl CubicBezierEasing {
    /// Create an easing from its two control points.
    pub fn new(control_point_1: Vector2, control_point_2: Vector2) -> Self {
        Self {
            control_point_1,
            control_point_2,
        }
    }
}
