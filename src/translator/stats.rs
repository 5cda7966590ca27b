use std::collections::BTreeMap;

use crate::ir::effect::Effect;
use crate::ir::layer::{CompositionIr, Layer};
use crate::ir::shape::ShapeContent;

/// Counts of layer kinds, mask modes, and gradient/effect kinds for one
/// translated composition. Reporting only; never consulted by passes.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TranslationStats {
    pub precomp_layers: usize,
    pub solid_layers: usize,
    pub image_layers: usize,
    pub null_layers: usize,
    pub shape_layers: usize,
    pub text_layers: usize,

    /// Mask counts keyed by mode label.
    pub masks: BTreeMap<&'static str, usize>,

    pub linear_gradients: usize,
    pub radial_gradients: usize,

    pub drop_shadow_effects: usize,
    pub gaussian_blur_effects: usize,
    pub unknown_effects: usize,
}

impl TranslationStats {
    /// Walk a composition and count what it contains.
    pub fn from_ir(ir: &CompositionIr) -> Self {
        let mut stats = Self::default();
        for layer in &ir.layers {
            stats.visit_layer(layer);
        }
        stats
    }

    /// Total number of layers, nested precomp content included.
    pub fn layer_total(&self) -> usize {
        self.precomp_layers
            + self.solid_layers
            + self.image_layers
            + self.null_layers
            + self.shape_layers
            + self.text_layers
    }

    fn visit_layer(&mut self, layer: &Layer) {
        match layer {
            Layer::PreComp(l) => {
                self.precomp_layers += 1;
                for nested in &l.layers {
                    self.visit_layer(nested);
                }
            }
            Layer::Solid(_) => self.solid_layers += 1,
            Layer::Image(_) => self.image_layers += 1,
            Layer::Null(_) => self.null_layers += 1,
            Layer::Shape(l) => {
                self.shape_layers += 1;
                for content in &l.contents {
                    self.visit_shape(content);
                }
            }
            Layer::Text(_) => self.text_layers += 1,
        }

        let props = layer.props();
        for mask in &props.masks {
            *self.masks.entry(mask.mode.name()).or_default() += 1;
        }
        for effect in &props.effects {
            match effect.as_ref() {
                Effect::DropShadow(_) => self.drop_shadow_effects += 1,
                Effect::GaussianBlur(_) => self.gaussian_blur_effects += 1,
                Effect::Unknown(_) => self.unknown_effects += 1,
            }
        }
    }

    fn visit_shape(&mut self, content: &ShapeContent) {
        match content {
            ShapeContent::Group(group) => {
                for nested in &group.contents {
                    self.visit_shape(nested);
                }
            }
            ShapeContent::LinearGradientFill(_) | ShapeContent::LinearGradientStroke(_) => {
                self.linear_gradients += 1;
            }
            ShapeContent::RadialGradientFill(_) | ShapeContent::RadialGradientStroke(_) => {
                self.radial_gradients += 1;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/translator/stats.rs"]
mod tests;
