//! Mapping from source effect instances to IR effects.
//!
//! Known kinds are parsed out of the raw parameter value; anything else
//! becomes an [`Effect::Unknown`] passthrough plus an issue, so a
//! best-effort artifact can still be produced.

use std::sync::Arc;

use serde::Deserialize;

use crate::composition::model::{ColorDef, EffectDef, PropertyDef};
use crate::foundation::error::LottiecResult;
use crate::ir::effect::{DropShadowEffect, Effect, GaussianBlurEffect, UnknownEffect};
use crate::translator::issues::IssueCollector;
use crate::translator::properties;

const DROP_SHADOW: &str = "drop_shadow";
const GAUSSIAN_BLUR: &str = "gaussian_blur";

#[derive(Debug, Deserialize)]
struct DropShadowParamsDef {
    color: PropertyDef<ColorDef>,
    /// Degrees, clockwise from up.
    direction: PropertyDef<f64>,
    distance: PropertyDef<f64>,
    softness: PropertyDef<f64>,
    #[serde(default)]
    shadow_only: bool,
}

#[derive(Debug, Deserialize)]
struct GaussianBlurParamsDef {
    blurriness: PropertyDef<f64>,
}

pub(crate) fn translate_effects(
    issues: &mut IssueCollector,
    defs: &[EffectDef],
    time_offset: f64,
) -> LottiecResult<Vec<Arc<Effect>>> {
    defs.iter()
        .map(|def| translate_effect(issues, def, time_offset).map(Arc::new))
        .collect()
}

fn translate_effect(
    issues: &mut IssueCollector,
    def: &EffectDef,
    time_offset: f64,
) -> LottiecResult<Effect> {
    let is_enabled = def.is_enabled.unwrap_or(true);

    match def.kind.as_str() {
        DROP_SHADOW => match DropShadowParamsDef::deserialize(&def.params) {
            Ok(params) => Ok(Effect::DropShadow(DropShadowEffect {
                name: def.name.clone(),
                is_enabled,
                color: properties::color(&params.color, time_offset)?,
                direction: properties::rotation_from_degrees(&params.direction, time_offset)?,
                distance: properties::scalar(&params.distance, time_offset)?,
                softness: properties::scalar(&params.softness, time_offset)?,
                is_shadow_only: params.shadow_only,
            })),
            Err(_) => {
                issues.effect_params_invalid(&def.name, &def.kind)?;
                Ok(passthrough(def))
            }
        },
        GAUSSIAN_BLUR => match GaussianBlurParamsDef::deserialize(&def.params) {
            Ok(params) => Ok(Effect::GaussianBlur(GaussianBlurEffect {
                name: def.name.clone(),
                is_enabled,
                blurriness: properties::scalar(&params.blurriness, time_offset)?,
            })),
            Err(_) => {
                issues.effect_params_invalid(&def.name, &def.kind)?;
                Ok(passthrough(def))
            }
        },
        other => {
            issues.unsupported_effect(&def.name, other)?;
            Ok(passthrough(def))
        }
    }
}

fn passthrough(def: &EffectDef) -> Effect {
    Effect::Unknown(UnknownEffect {
        name: def.name.clone(),
        kind: def.kind.clone(),
        params: def.params.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/translator/effects.rs"]
mod tests;
