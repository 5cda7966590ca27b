use std::collections::BTreeSet;

use crate::foundation::error::{LottiecError, LottiecResult};

/// A diagnostic collected while translating one file.
///
/// Codes are stable identifiers: `VLxxxx` for validation findings,
/// `TLxxxx` for recognized-but-unsupported features.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Issue {
    pub code: String,
    pub description: String,
}

impl Issue {
    /// `true` when this is a validation finding rather than an
    /// unsupported-feature finding.
    pub fn is_validation(&self) -> bool {
        self.code.starts_with("VL")
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

/// Accumulates issues, deduplicated and ordered for deterministic
/// reporting. In strict mode the first report becomes a hard failure.
#[derive(Debug)]
pub(crate) struct IssueCollector {
    issues: BTreeSet<Issue>,
    strict: bool,
}

impl IssueCollector {
    pub(crate) fn new(strict: bool) -> Self {
        Self {
            issues: BTreeSet::new(),
            strict,
        }
    }

    pub(crate) fn into_issues(self) -> Vec<Issue> {
        self.issues.into_iter().collect()
    }

    fn report(&mut self, code: &str, description: String) -> LottiecResult<()> {
        if self.strict {
            return Err(LottiecError::strict(format!("{code}: {description}")));
        }
        self.issues.insert(Issue {
            code: code.to_owned(),
            description,
        });
        Ok(())
    }

    pub(crate) fn frame_rate_must_be_positive(&mut self, frame_rate: f64) -> LottiecResult<()> {
        self.report(
            "VL0001",
            format!("Frame rate must be positive, found {frame_rate}."),
        )
    }

    pub(crate) fn out_point_before_in_point(&mut self) -> LottiecResult<()> {
        self.report(
            "VL0002",
            "Out point precedes in point; the result has no duration.".to_owned(),
        )
    }

    pub(crate) fn invalid_solid_color(&mut self, layer: &str, color: &str) -> LottiecResult<()> {
        self.report(
            "VL0003",
            format!("Layer \"{layer}\" has unparseable solid color \"{color}\"."),
        )
    }

    pub(crate) fn gradient_stops_malformed(&mut self, name: &str) -> LottiecResult<()> {
        self.report(
            "VL0004",
            format!("Gradient \"{name}\" has a malformed stop array."),
        )
    }

    pub(crate) fn effect_params_invalid(&mut self, name: &str, kind: &str) -> LottiecResult<()> {
        self.report(
            "VL0005",
            format!("Effect \"{name}\" of kind {kind} has invalid parameters."),
        )
    }

    pub(crate) fn blend_mode_not_normal(&mut self, layer: &str, mode: &str) -> LottiecResult<()> {
        self.report(
            "TL0001",
            format!("Layer \"{layer}\" uses blend mode {mode}; only Normal is supported."),
        )
    }

    pub(crate) fn time_stretch_is_not_supported(&mut self, layer: &str) -> LottiecResult<()> {
        self.report(
            "TL0002",
            format!("Layer \"{layer}\" uses time stretch, which is not supported."),
        )
    }

    pub(crate) fn auto_orient_is_not_supported(&mut self, layer: &str) -> LottiecResult<()> {
        self.report(
            "TL0003",
            format!("Layer \"{layer}\" uses auto-orient, which is not supported."),
        )
    }

    pub(crate) fn time_remap_is_not_supported(&mut self, layer: &str) -> LottiecResult<()> {
        self.report(
            "TL0004",
            format!("Layer \"{layer}\" uses time remapping, which is not supported."),
        )
    }

    pub(crate) fn unsupported_effect(&mut self, name: &str, kind: &str) -> LottiecResult<()> {
        self.report(
            "TL0005",
            format!("Effect \"{name}\" of kind {kind} is not supported."),
        )
    }

    pub(crate) fn referenced_asset_not_found(&mut self, layer: &str, id: &str) -> LottiecResult<()> {
        self.report(
            "TL0006",
            format!("Layer \"{layer}\" references missing asset \"{id}\"."),
        )
    }

    pub(crate) fn luma_mattes_are_not_supported(&mut self, layer: &str) -> LottiecResult<()> {
        self.report(
            "TL0007",
            format!("Layer \"{layer}\" uses a luma matte, which is not supported."),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/translator/issues.rs"]
mod tests;
