//! Structural deduplication: collapse value-equal subtrees to a single
//! shared instance.
//!
//! The tree is rebuilt bottom-up. Each family of shareable objects has
//! an interning table keyed by a structural fingerprint with an
//! exact-equality scan inside each bucket, so fingerprint collisions
//! can never merge unequal values. Leaf families intern before the
//! nodes that reference them, which makes parent equality checks cheap
//! once children already share pointers.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::animatables::animatable::Animatable;
use crate::animatables::bezier::PathGeometry;
use crate::foundation::math::Fnv1a64;
use crate::ir::effect::Effect;
use crate::ir::layer::{
    CompositionIr, Layer, LayerProps, Mask, PreCompLayer, ShapeLayer, SolidLayer, TextLayer,
};
use crate::ir::shape::{
    LinearGradientBrush, LinearGradientFill, LinearGradientStroke, PathShape,
    RadialGradientBrush, RadialGradientFill, RadialGradientStroke, Repeater, ShapeContent,
    ShapeGroup, SolidColorBrush, SolidColorFill, SolidColorStroke,
};
use crate::ir::transform::Transform;

/// Rebuild a composition with all value-equal shareable subtrees
/// repointed at one canonical instance each.
pub fn canonicalize(ir: &CompositionIr) -> CompositionIr {
    let mut canon = Canonicalizer::default();
    let layers = ir.layers.iter().map(|l| canon.layer(l)).collect();
    debug!(
        interned_shapes = canon.shapes.len(),
        interned_brushes = canon.solid_brushes.len(),
        "canonicalized composition"
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

/// An interning table for one object family: fingerprint buckets with
/// exact-equality confirmation inside each bucket.
struct CanonTable<T> {
    buckets: HashMap<u64, Vec<Arc<T>>>,
    len: usize,
}

impl<T> Default for CanonTable<T> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
        }
    }
}

impl<T: PartialEq + serde::Serialize> CanonTable<T> {
    fn intern(&mut self, value: T) -> Arc<T> {
        let bucket = self.buckets.entry(fingerprint(&value)).or_default();
        if let Some(existing) = bucket.iter().find(|entry| ***entry == value) {
            return Arc::clone(existing);
        }
        let canonical = Arc::new(value);
        bucket.push(Arc::clone(&canonical));
        self.len += 1;
        canonical
    }

    fn len(&self) -> usize {
        self.len
    }
}

fn fingerprint<T: serde::Serialize>(value: &T) -> u64 {
    match serde_json::to_value(value) {
        Ok(json) => {
            let mut h = Fnv1a64::new_default();
            hash_json_value(&mut h, &json);
            h.finish()
        }
        // Non-representable values (NaN payloads and the like) share a
        // bucket; equality still separates them.
        Err(_) => 0,
    }
}

fn hash_json_value(h: &mut Fnv1a64, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => h.write_u8(0),
        serde_json::Value::Bool(x) => {
            h.write_u8(1);
            h.write_u8(u8::from(*x));
        }
        serde_json::Value::Number(n) => {
            h.write_u8(2);
            if let Some(i) = n.as_i64() {
                h.write_u8(0);
                h.write_u64(i as u64);
            } else if let Some(u) = n.as_u64() {
                h.write_u8(1);
                h.write_u64(u);
            } else if let Some(f) = n.as_f64() {
                h.write_u8(2);
                h.write_u64(f.to_bits());
            } else {
                h.write_u8(3);
                write_str(h, &n.to_string());
            }
        }
        serde_json::Value::String(s) => {
            h.write_u8(3);
            write_str(h, s);
        }
        serde_json::Value::Array(items) => {
            h.write_u8(4);
            h.write_u64(items.len() as u64);
            for item in items {
                hash_json_value(h, item);
            }
        }
        serde_json::Value::Object(map) => {
            h.write_u8(5);
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort_unstable();
            h.write_u64(keys.len() as u64);
            for k in keys {
                write_str(h, k);
                hash_json_value(h, &map[k]);
            }
        }
    }
}

fn write_str(h: &mut Fnv1a64, s: &str) {
    h.write_u64(s.len() as u64);
    h.write_bytes(s.as_bytes());
}

#[derive(Default)]
struct Canonicalizer {
    layers: CanonTable<Layer>,
    shapes: CanonTable<ShapeContent>,
    transforms: CanonTable<Transform>,
    effects: CanonTable<Effect>,
    solid_brushes: CanonTable<SolidColorBrush>,
    linear_brushes: CanonTable<LinearGradientBrush>,
    radial_brushes: CanonTable<RadialGradientBrush>,
    geometries: CanonTable<Animatable<PathGeometry>>,

    /// Original pointer → canonical instance, so shared inputs are
    /// rebuilt once.
    seen_layers: HashMap<usize, Arc<Layer>>,
    seen_shapes: HashMap<usize, Arc<ShapeContent>>,
}

impl Canonicalizer {
    fn layer(&mut self, layer: &Arc<Layer>) -> Arc<Layer> {
        let key = Arc::as_ptr(layer) as usize;
        if let Some(hit) = self.seen_layers.get(&key) {
            return Arc::clone(hit);
        }

        let rebuilt = match layer.as_ref() {
            Layer::PreComp(pre) => Layer::PreComp(PreCompLayer {
                props: self.props(&pre.props),
                ref_id: pre.ref_id.clone(),
                width: pre.width,
                height: pre.height,
                layers: pre.layers.iter().map(|l| self.layer(l)).collect(),
            }),
            Layer::Solid(solid) => Layer::Solid(SolidLayer {
                props: self.props(&solid.props),
                ..solid.clone()
            }),
            Layer::Image(image) => Layer::Image(crate::ir::layer::ImageLayer {
                props: self.props(&image.props),
                ..image.clone()
            }),
            Layer::Null(null) => Layer::Null(crate::ir::layer::NullLayer {
                props: self.props(&null.props),
            }),
            Layer::Shape(shape) => Layer::Shape(ShapeLayer {
                props: self.props(&shape.props),
                contents: shape.contents.iter().map(|c| self.shape(c)).collect(),
            }),
            Layer::Text(text) => Layer::Text(TextLayer {
                props: self.props(&text.props),
                document: text.document.clone(),
            }),
        };

        let canonical = self.layers.intern(rebuilt);
        self.seen_layers.insert(key, Arc::clone(&canonical));
        canonical
    }

    fn props(&mut self, props: &LayerProps) -> LayerProps {
        LayerProps {
            name: props.name.clone(),
            index: props.index,
            parent_index: props.parent_index,
            in_point: props.in_point,
            out_point: props.out_point,
            is_hidden: props.is_hidden,
            blend_mode: props.blend_mode,
            matte_mode: props.matte_mode,
            transform: self.transforms.intern(props.transform.as_ref().clone()),
            masks: props
                .masks
                .iter()
                .map(|m| Mask {
                    name: m.name.clone(),
                    inverted: m.inverted,
                    mode: m.mode,
                    geometry: self.geometries.intern(m.geometry.as_ref().clone()),
                    opacity: m.opacity.clone(),
                })
                .collect(),
            effects: props
                .effects
                .iter()
                .map(|e| self.effects.intern(e.as_ref().clone()))
                .collect(),
        }
    }

    fn shape(&mut self, shape: &Arc<ShapeContent>) -> Arc<ShapeContent> {
        let key = Arc::as_ptr(shape) as usize;
        if let Some(hit) = self.seen_shapes.get(&key) {
            return Arc::clone(hit);
        }

        let rebuilt = match shape.as_ref() {
            ShapeContent::Group(group) => ShapeContent::Group(ShapeGroup {
                name: group.name.clone(),
                contents: group.contents.iter().map(|c| self.shape(c)).collect(),
            }),
            ShapeContent::Transform(t) => {
                ShapeContent::Transform(self.transforms.intern(t.as_ref().clone()))
            }
            ShapeContent::Path(path) => ShapeContent::Path(PathShape {
                name: path.name.clone(),
                direction: path.direction,
                geometry: self.geometries.intern(path.geometry.as_ref().clone()),
            }),
            ShapeContent::Repeater(repeater) => ShapeContent::Repeater(Repeater {
                name: repeater.name.clone(),
                count: repeater.count.clone(),
                offset: repeater.offset.clone(),
                start_opacity: repeater.start_opacity.clone(),
                end_opacity: repeater.end_opacity.clone(),
                transform: self.transforms.intern(repeater.transform.as_ref().clone()),
            }),
            ShapeContent::SolidColorFill(fill) => ShapeContent::SolidColorFill(SolidColorFill {
                name: fill.name.clone(),
                fill_rule: fill.fill_rule,
                brush: self.solid_brushes.intern(fill.brush.as_ref().clone()),
            }),
            ShapeContent::SolidColorStroke(stroke) => {
                ShapeContent::SolidColorStroke(SolidColorStroke {
                    name: stroke.name.clone(),
                    style: stroke.style.clone(),
                    brush: self.solid_brushes.intern(stroke.brush.as_ref().clone()),
                })
            }
            ShapeContent::LinearGradientFill(fill) => {
                ShapeContent::LinearGradientFill(LinearGradientFill {
                    name: fill.name.clone(),
                    fill_rule: fill.fill_rule,
                    brush: self.linear_brushes.intern(fill.brush.as_ref().clone()),
                })
            }
            ShapeContent::LinearGradientStroke(stroke) => {
                ShapeContent::LinearGradientStroke(LinearGradientStroke {
                    name: stroke.name.clone(),
                    style: stroke.style.clone(),
                    brush: self.linear_brushes.intern(stroke.brush.as_ref().clone()),
                })
            }
            ShapeContent::RadialGradientFill(fill) => {
                ShapeContent::RadialGradientFill(RadialGradientFill {
                    name: fill.name.clone(),
                    fill_rule: fill.fill_rule,
                    brush: self.radial_brushes.intern(fill.brush.as_ref().clone()),
                })
            }
            ShapeContent::RadialGradientStroke(stroke) => {
                ShapeContent::RadialGradientStroke(RadialGradientStroke {
                    name: stroke.name.clone(),
                    style: stroke.style.clone(),
                    brush: self.radial_brushes.intern(stroke.brush.as_ref().clone()),
                })
            }
            ShapeContent::Ellipse(_)
            | ShapeContent::Rectangle(_)
            | ShapeContent::Polystar(_)
            | ShapeContent::TrimPath(_)
            | ShapeContent::MergePaths(_)
            | ShapeContent::RoundCorners(_) => shape.as_ref().clone(),
        };

        let canonical = self.shapes.intern(rebuilt);
        self.seen_shapes.insert(key, Arc::clone(&canonical));
        canonical
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimizer/canonicalizer.rs"]
mod tests;
