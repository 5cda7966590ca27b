use crate::animatables::easing::Easing;
use crate::foundation::core::Vector2;
use crate::foundation::error::{LottiecError, LottiecResult};

/// A value that may be animated over time.
///
/// Either a single static value, or an ordered-by-frame sequence of key
/// frames. A sequence of exactly one key frame is collapsed to a static
/// value at construction, so `is_animated` is derived from the key-frame
/// list and can never desync.
///
/// This type deliberately has no `Hash` impl: equality considers the
/// full key-frame sequence, and the dedup pass fingerprints the full
/// serialized value rather than relying on a hash of the initial value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animatable<T> {
    initial_value: T,
    key_frames: Vec<KeyFrame<T>>,
}

impl<T: Clone + PartialEq> Animatable<T> {
    /// Create a non-animated value.
    pub fn new_static(value: T) -> Self {
        Self {
            initial_value: value,
            key_frames: Vec::new(),
        }
    }

    /// Create an animated value from key frames.
    ///
    /// Fails when the sequence is empty or frames are not monotonically
    /// non-decreasing. A single key frame collapses to a static value.
    pub fn new(key_frames: Vec<KeyFrame<T>>) -> LottiecResult<Self> {
        let Some(first) = key_frames.first() else {
            return Err(LottiecError::validation(
                "an animatable needs at least one key frame",
            ));
        };
        if !key_frames.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(LottiecError::validation(
                "key frames must be ordered by frame",
            ));
        }

        let initial_value = first.value.clone();
        Ok(if key_frames.len() == 1 {
            // The value never changes, so the key frame carries no
            // information beyond its value.
            Self::new_static(initial_value)
        } else {
            Self {
                initial_value,
                key_frames,
            }
        })
    }

    /// The value at the start of the timeline.
    pub fn initial_value(&self) -> &T {
        &self.initial_value
    }

    /// The key frames, empty when the value is static.
    pub fn key_frames(&self) -> &[KeyFrame<T>] {
        &self.key_frames
    }

    /// `true` when the value changes over time.
    pub fn is_animated(&self) -> bool {
        !self.key_frames.is_empty()
    }

    /// `true` when the value is static and equal to `value`.
    pub fn is_always(&self, value: &T) -> bool {
        !self.is_animated() && *value == self.initial_value
    }

    /// `true` when the value equals `value` at any key frame or at the
    /// start of the timeline.
    pub fn is_ever(&self, value: &T) -> bool {
        *value == self.initial_value || self.key_frames.iter().any(|kf| kf.value == *value)
    }

    /// `true` unless the value is always `value`.
    pub fn is_ever_not(&self, value: &T) -> bool {
        !self.is_always(value)
    }

    /// Shift every key frame by `time_offset` frames. An offset of zero
    /// or a static value returns an observationally identical clone.
    pub fn with_time_offset(&self, time_offset: f64) -> Self {
        if time_offset == 0.0 || !self.is_animated() {
            return self.clone();
        }

        Self {
            initial_value: self.initial_value.clone(),
            key_frames: self
                .key_frames
                .iter()
                .map(|kf| kf.with_time_offset(time_offset))
                .collect(),
        }
    }

    /// Map the value type through `selector`, preserving key-frame
    /// timing and easing.
    pub fn select<U, F>(&self, selector: F) -> Animatable<U>
    where
        U: Clone + PartialEq,
        F: Fn(&T) -> U,
    {
        Animatable {
            initial_value: selector(&self.initial_value),
            key_frames: self
                .key_frames
                .iter()
                .map(|kf| KeyFrame {
                    frame: kf.frame,
                    value: selector(&kf.value),
                    easing: kf.easing,
                    spatial_bezier: kf.spatial_bezier,
                })
                .collect(),
        }
    }
}

/// One control point of an animated value's curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyFrame<T> {
    /// Frame at which `value` applies. Monotonically non-decreasing
    /// across a sequence.
    pub frame: f64,
    /// The value at `frame`.
    pub value: T,
    /// Easing applied between this key frame and the next.
    pub easing: Easing,
    /// For spatial values, the bezier control points of the motion path
    /// toward the next key frame.
    pub spatial_bezier: Option<SpatialBezier>,
}

impl<T: Clone> KeyFrame<T> {
    /// Create a key frame with no spatial motion path.
    pub fn new(frame: f64, value: T, easing: Easing) -> Self {
        Self {
            frame,
            value,
            easing,
            spatial_bezier: None,
        }
    }

    /// This key frame shifted by `time_offset` frames.
    pub fn with_time_offset(&self, time_offset: f64) -> Self {
        Self {
            frame: self.frame + time_offset,
            value: self.value.clone(),
            easing: self.easing,
            spatial_bezier: self.spatial_bezier,
        }
    }
}

/// Control points describing the curved motion path between two spatial
/// key frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpatialBezier {
    /// Outgoing tangent, relative to the current key frame's value.
    pub control_point_1: Vector2,
    /// Incoming tangent, relative to the next key frame's value.
    pub control_point_2: Vector2,
}

#[cfg(test)]
#[path = "../../tests/unit/animatables/animatable.rs"]
mod tests;
