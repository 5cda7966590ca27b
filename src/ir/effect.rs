use crate::animatables::animatable::Animatable;
use crate::foundation::core::{Color, Rotation};

/// A layer effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Effect {
    DropShadow(DropShadowEffect),
    GaussianBlur(GaussianBlurEffect),
    /// A recognized-but-unsupported effect, carried through untouched so
    /// downstream reporting can describe it.
    Unknown(UnknownEffect),
}

impl Effect {
    /// The effect's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::DropShadow(e) => &e.name,
            Self::GaussianBlur(e) => &e.name,
            Self::Unknown(e) => &e.name,
        }
    }

    /// `true` when the effect is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::DropShadow(e) => e.is_enabled,
            Self::GaussianBlur(e) => e.is_enabled,
            Self::Unknown(_) => true,
        }
    }
}

/// A drop shadow behind the layer's content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DropShadowEffect {
    pub name: String,
    pub is_enabled: bool,
    pub color: Animatable<Color>,
    /// Direction the shadow is cast, clockwise from up.
    pub direction: Animatable<Rotation>,
    pub distance: Animatable<f64>,
    pub softness: Animatable<f64>,
    /// Draw only the shadow, not the content.
    pub is_shadow_only: bool,
}

/// A gaussian blur over the layer's content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GaussianBlurEffect {
    pub name: String,
    pub is_enabled: bool,
    pub blurriness: Animatable<f64>,
}

/// Passthrough payload for an effect kind this compiler does not model.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnknownEffect {
    pub name: String,
    /// The source's kind tag.
    pub kind: String,
    /// Raw parameters, untouched.
    pub params: serde_json::Value,
}
