//! Deterministic, collision-free names for graph nodes.
//!
//! Each node gets a descriptive base name from its kind and salient
//! properties, then nodes sharing a base name get zero-padded counter
//! suffixes in traversal order. Nothing here depends on hash iteration
//! order, the clock, or file paths, so repeated runs on identical input
//! name identically.

use std::collections::BTreeMap;

use crate::foundation::core::Color;
use crate::graph::object_graph::{GraphObject, NodeId, ObjectGraph};
use crate::ir::effect::Effect;
use crate::ir::layer::Layer;

/// Assign a unique name to every node in the graph.
pub fn generate_node_names(graph: &ObjectGraph) -> BTreeMap<NodeId, String> {
    // Group in traversal order; BTreeMap keeps base names sorted.
    let mut groups: BTreeMap<String, Vec<NodeId>> = BTreeMap::new();
    for node in graph.nodes() {
        groups
            .entry(base_name(&node.object))
            .or_default()
            .push(NodeId(node.position));
    }

    let mut names = BTreeMap::new();
    for (base, ids) in groups {
        // Always suffix a counter, padded to the widest index, so a
        // name can never collide with another group's base.
        let digits = (ids.len() as f64 + 1.0).log10().ceil().max(1.0) as usize;
        for (i, id) in ids.into_iter().enumerate() {
            names.insert(id, format!("{base}_{i:0digits$}"));
        }
    }

    names
}

fn base_name(object: &GraphObject) -> String {
    match object {
        GraphObject::Layer(layer) => {
            let base = format!("{}Layer", layer.kind().name());
            match sanitize(&layer.props().name) {
                Some(name) => format!("{base}_{name}"),
                None => base,
            }
        }
        GraphObject::Shape(shape) => match sanitize(shape.name()) {
            Some(name) => format!("{}_{name}", shape.kind_name()),
            None => shape.kind_name().to_owned(),
        },
        GraphObject::Transform(_) => "Transform".to_owned(),
        GraphObject::Effect(effect) => match effect.as_ref() {
            Effect::DropShadow(_) => "DropShadow".to_owned(),
            Effect::GaussianBlur(_) => "GaussianBlur".to_owned(),
            Effect::Unknown(e) => match sanitize(&e.kind) {
                Some(kind) => format!("UnknownEffect_{kind}"),
                None => "UnknownEffect".to_owned(),
            },
        },
        GraphObject::SolidColorBrush(brush) => {
            format!("ColorBrush_{}", describe_color(*brush.color.initial_value()))
        }
        GraphObject::LinearGradientBrush(_) => "LinearGradientBrush".to_owned(),
        GraphObject::RadialGradientBrush(_) => "RadialGradientBrush".to_owned(),
        GraphObject::Geometry(_) => "Geometry".to_owned(),
    }
}

fn describe_color(color: Color) -> String {
    match color.name() {
        Some(name) => name.to_owned(),
        None => color.to_hex(),
    }
}

/// Reduce a display name to identifier-safe characters. Returns `None`
/// when nothing usable remains.
pub(crate) fn sanitize(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len());
    let mut last_was_separator = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_was_separator = false;
        } else if !last_was_separator {
            out.push('_');
            last_was_separator = true;
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        return None;
    }

    let mut result = trimmed.to_owned();
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    Some(result)
}

#[cfg(test)]
#[path = "../../tests/unit/graph/namer.rs"]
mod tests;
