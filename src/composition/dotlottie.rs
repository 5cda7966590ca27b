//! The `.lottie` container manifest model.
//!
//! The container itself (a zip holding `manifest.json` plus
//! `animations/<id>.json` entries) is unpacked upstream; this model
//! exists because animation identifiers from the manifest flow into
//! generated class and file names.

use serde::{Deserialize, Serialize};

/// A parsed `manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestDef {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub generator: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub animations: Vec<ManifestAnimationDef>,
}

/// One animation entry in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestAnimationDef {
    /// Identifier; also the `animations/<id>.json` entry name.
    pub id: String,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default, rename = "themeColor")]
    pub theme_color: Option<String>,
    #[serde(default, rename = "loop")]
    pub is_looping: bool,
}

fn default_speed() -> f64 {
    1.0
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dotlottie.rs"]
mod tests;
