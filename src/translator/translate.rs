//! The translation pass: a pure mapping from the parsed source
//! composition to the IR, one function per concrete source type.
//!
//! Geometry, animatable properties, blend modes, mattes, and masks are
//! copied losslessly (with unit conversion); unsupported features
//! produce a safe fallback node plus a collected issue. Nothing here
//! inspects sibling or parent state beyond what is passed in, so
//! independent files can be translated in parallel.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::composition::model::{
    AssetDef, BlendModeDef, CompositionDef, LayerContentDef, LayerDef, MaskModeDef, MatteModeDef,
    TextDocumentDef,
};
use crate::foundation::core::Color;
use crate::foundation::error::LottiecResult;
use crate::ir::layer::{
    BlendMode, CompositionIr, ImageLayer, Justification, Layer, LayerProps, Marker, Mask,
    MaskMode, MatteMode, NullLayer, PreCompLayer, ShapeLayer, SolidLayer, TextDocument, TextLayer,
};
use crate::translator::issues::{Issue, IssueCollector};
use crate::translator::{effects, properties, shapes};

/// Knobs for one translation run.
#[derive(Clone, Copy, Debug, Default)]
pub struct TranslatorConfiguration {
    /// Fail on the first issue instead of producing a best-effort
    /// artifact.
    pub strict: bool,
}

/// A translated composition plus the issues collected along the way.
#[derive(Clone, Debug)]
pub struct TranslationResult {
    pub ir: CompositionIr,
    pub issues: Vec<Issue>,
}

/// Translate a parsed composition into the IR.
///
/// In non-strict mode this fails only on malformed structure (for
/// example key frames out of order); anything merely unsupported is
/// reported through [`TranslationResult::issues`].
pub fn translate(
    source: &CompositionDef,
    config: &TranslatorConfiguration,
) -> LottiecResult<TranslationResult> {
    let mut ctx = TranslationContext {
        assets: source.assets.iter().map(|a| (a.id(), a)).collect(),
        issues: IssueCollector::new(config.strict),
        precomp_stack: Vec::new(),
    };

    if source.frame_rate <= 0.0 {
        ctx.issues.frame_rate_must_be_positive(source.frame_rate)?;
    }
    if source.out_point < source.in_point {
        ctx.issues.out_point_before_in_point()?;
    }

    let layers = translate_layers(&mut ctx, &source.layers, 0.0)?;
    debug!(
        layer_count = layers.len(),
        name = %source.name,
        "translated composition"
    );

    Ok(TranslationResult {
        ir: CompositionIr {
            name: source.name.clone(),
            width: source.width,
            height: source.height,
            frame_rate: source.frame_rate,
            in_point: source.in_point,
            out_point: source.out_point,
            layers,
            markers: source
                .markers
                .iter()
                .map(|m| Marker {
                    name: m.name.clone(),
                    frame: m.frame,
                    duration_frames: m.duration_frames,
                })
                .collect(),
        },
        issues: ctx.issues.into_issues(),
    })
}

struct TranslationContext<'a> {
    assets: BTreeMap<&'a str, &'a AssetDef>,
    issues: IssueCollector,
    /// Precomp asset ids currently being expanded, for cycle detection.
    precomp_stack: Vec<&'a str>,
}

/// Translate a layer list into draw order: ascending index, stable for
/// equal indices.
fn translate_layers<'a>(
    ctx: &mut TranslationContext<'a>,
    defs: &'a [LayerDef],
    time_offset: f64,
) -> LottiecResult<Vec<Arc<Layer>>> {
    let mut ordered: Vec<&LayerDef> = defs.iter().collect();
    ordered.sort_by_key(|def| def.index);

    ordered
        .into_iter()
        .map(|def| translate_layer(ctx, def, time_offset).map(Arc::new))
        .collect()
}

fn translate_layer<'a>(
    ctx: &mut TranslationContext<'a>,
    def: &'a LayerDef,
    time_offset: f64,
) -> LottiecResult<Layer> {
    let props = translate_layer_props(ctx, def, time_offset)?;

    Ok(match &def.content {
        LayerContentDef::Precomp {
            ref_id,
            width,
            height,
            time_remap,
        } => {
            if time_remap.is_some() {
                ctx.issues.time_remap_is_not_supported(&def.name)?;
            }

            match ctx.assets.get(ref_id.as_str()).copied() {
                Some(AssetDef::Precomp { id, layers }) => {
                    if ctx.precomp_stack.contains(&id.as_str()) {
                        ctx.issues.referenced_asset_not_found(&def.name, ref_id)?;
                        Layer::Null(NullLayer { props })
                    } else {
                        ctx.precomp_stack.push(id.as_str());
                        let nested =
                            translate_layers(ctx, layers, time_offset + def.start_time)?;
                        ctx.precomp_stack.pop();
                        Layer::PreComp(PreCompLayer {
                            props,
                            ref_id: ref_id.clone(),
                            width: *width,
                            height: *height,
                            layers: nested,
                        })
                    }
                }
                _ => {
                    ctx.issues.referenced_asset_not_found(&def.name, ref_id)?;
                    Layer::Null(NullLayer { props })
                }
            }
        }
        LayerContentDef::Solid {
            width,
            height,
            color,
        } => {
            let parsed = match parse_hex_color(color) {
                Some(c) => c,
                None => {
                    ctx.issues.invalid_solid_color(&def.name, color)?;
                    Color::BLACK
                }
            };
            Layer::Solid(SolidLayer {
                props,
                width: *width,
                height: *height,
                color: parsed,
            })
        }
        LayerContentDef::Image { ref_id } => match ctx.assets.get(ref_id.as_str()).copied() {
            Some(AssetDef::Image {
                id,
                width,
                height,
                path,
                file_name,
            }) => Layer::Image(ImageLayer {
                props,
                asset_id: id.clone(),
                uri: format!("{path}{file_name}"),
                width: *width,
                height: *height,
            }),
            _ => {
                ctx.issues.referenced_asset_not_found(&def.name, ref_id)?;
                Layer::Null(NullLayer { props })
            }
        },
        LayerContentDef::Null => Layer::Null(NullLayer { props }),
        LayerContentDef::Shape { shapes } => Layer::Shape(ShapeLayer {
            props,
            contents: shapes::translate_shape_items(&mut ctx.issues, shapes, time_offset)?,
        }),
        LayerContentDef::Text { document } => Layer::Text(TextLayer {
            props,
            document: properties::animatable(document, time_offset, translate_text_document)?,
        }),
    })
}

fn translate_layer_props(
    ctx: &mut TranslationContext<'_>,
    def: &LayerDef,
    time_offset: f64,
) -> LottiecResult<LayerProps> {
    if def.blend_mode != BlendModeDef::Normal {
        ctx.issues
            .blend_mode_not_normal(&def.name, &format!("{:?}", def.blend_mode))?;
    }
    if def.time_stretch != 1.0 {
        ctx.issues.time_stretch_is_not_supported(&def.name)?;
    }
    if def.auto_orient {
        ctx.issues.auto_orient_is_not_supported(&def.name)?;
    }
    let matte_mode = translate_matte_mode(def.matte_mode);
    if matches!(matte_mode, MatteMode::Luma | MatteMode::InvertedLuma) {
        ctx.issues.luma_mattes_are_not_supported(&def.name)?;
    }

    let masks = def
        .masks
        .iter()
        .map(|mask| {
            Ok(Mask {
                name: mask.name.clone(),
                inverted: mask.inverted,
                mode: translate_mask_mode(mask.mode),
                geometry: Arc::new(properties::animatable_path(&mask.points, time_offset)?),
                opacity: properties::opacity_from_percent(&mask.opacity, time_offset)?,
            })
        })
        .collect::<LottiecResult<Vec<_>>>()?;

    Ok(LayerProps {
        name: def.name.clone(),
        index: def.index,
        parent_index: def.parent,
        in_point: def.in_point + time_offset,
        out_point: def.out_point + time_offset,
        is_hidden: def.is_hidden,
        blend_mode: translate_blend_mode(def.blend_mode),
        matte_mode,
        transform: Arc::new(properties::transform(&def.transform, time_offset)?),
        masks,
        effects: effects::translate_effects(&mut ctx.issues, &def.effects, time_offset)?,
    })
}

fn translate_text_document(def: &TextDocumentDef) -> TextDocument {
    TextDocument {
        text: def.text.clone(),
        font_family: def.font_family.clone(),
        size: def.size,
        fill_color: def
            .fill_color
            .map(|c| Color::from_floats(c[3], c[0], c[1], c[2])),
        justification: match def.justification {
            crate::composition::model::JustificationDef::Left => Justification::Left,
            crate::composition::model::JustificationDef::Right => Justification::Right,
            crate::composition::model::JustificationDef::Center => Justification::Center,
        },
        tracking: def.tracking,
        line_height: def.line_height,
    }
}

fn translate_blend_mode(def: BlendModeDef) -> BlendMode {
    match def {
        BlendModeDef::Normal => BlendMode::Normal,
        BlendModeDef::Multiply => BlendMode::Multiply,
        BlendModeDef::Screen => BlendMode::Screen,
        BlendModeDef::Overlay => BlendMode::Overlay,
        BlendModeDef::Darken => BlendMode::Darken,
        BlendModeDef::Lighten => BlendMode::Lighten,
        BlendModeDef::ColorDodge => BlendMode::ColorDodge,
        BlendModeDef::ColorBurn => BlendMode::ColorBurn,
        BlendModeDef::HardLight => BlendMode::HardLight,
        BlendModeDef::SoftLight => BlendMode::SoftLight,
        BlendModeDef::Difference => BlendMode::Difference,
        BlendModeDef::Exclusion => BlendMode::Exclusion,
        BlendModeDef::Hue => BlendMode::Hue,
        BlendModeDef::Saturation => BlendMode::Saturation,
        BlendModeDef::Color => BlendMode::Color,
        BlendModeDef::Luminosity => BlendMode::Luminosity,
    }
}

fn translate_matte_mode(def: MatteModeDef) -> MatteMode {
    match def {
        MatteModeDef::None => MatteMode::None,
        MatteModeDef::Alpha => MatteMode::Alpha,
        MatteModeDef::InvertedAlpha => MatteMode::InvertedAlpha,
        MatteModeDef::Luma => MatteMode::Luma,
        MatteModeDef::InvertedLuma => MatteMode::InvertedLuma,
    }
}

fn translate_mask_mode(def: MaskModeDef) -> MaskMode {
    match def {
        MaskModeDef::None => MaskMode::None,
        MaskModeDef::Add => MaskMode::Add,
        MaskModeDef::Subtract => MaskMode::Subtract,
        MaskModeDef::Intersect => MaskMode::Intersect,
        MaskModeDef::Lighten => MaskMode::Lighten,
        MaskModeDef::Darken => MaskMode::Darken,
        MaskModeDef::Difference => MaskMode::Difference,
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB` (hash optional).
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

    match hex.len() {
        6 => Some(Color::from_argb_bytes(0xFF, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_argb_bytes(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/translator/translate.rs"]
mod tests;
