//! The end-to-end pipeline: Parse → Translate → [Optimize] → Graph →
//! [Dedup/Name] → Generate.
//!
//! One file's run is a linear sequence of pure transforms with no
//! shared mutable state. Batch runs fan out one pipeline per input file
//! with rayon; the only shared resource is the diagnostics sink, which
//! serializes writes behind a mutex. One file's failure never aborts
//! its siblings.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rayon::prelude::*;
use tracing::info;

use crate::codegen::instantiator::{GeneratedOutput, InstantiatorOptions, generate};
use crate::codegen::Language;
use crate::composition::model::CompositionDef;
use crate::foundation::error::{LottiecError, LottiecResult};
use crate::ir::layer::CompositionIr;
use crate::optimizer::{canonicalize, reduce};
use crate::translator::issues::Issue;
use crate::translator::stats::TranslationStats;
use crate::translator::translate::{TranslatorConfiguration, translate};

/// Options for one pipeline run.
#[derive(Clone, Debug)]
pub struct TranslationOptions {
    /// Target languages to generate, in the order artifacts are
    /// returned.
    pub languages: Vec<Language>,
    /// Fail a file on its first issue instead of producing a
    /// best-effort artifact.
    pub strict: bool,
    /// Skip the semantic tree-rewriting passes.
    pub disable_translation_optimizer: bool,
    /// Skip structural dedup, leaving every node single-referenced and
    /// inlined.
    pub disable_codegen_optimizer: bool,
    /// Suppress run-to-run-varying content in generated text.
    pub test_mode: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            languages: vec![Language::CSharp],
            strict: false,
            disable_translation_optimizer: false,
            disable_codegen_optimizer: false,
            test_mode: false,
        }
    }
}

/// Everything one successful pipeline run produced.
#[derive(Debug)]
pub struct FileResult {
    pub class_name: String,
    /// The final (optimized when enabled) IR, for read-only consumers.
    pub ir: CompositionIr,
    pub issues: Vec<Issue>,
    pub stats: TranslationStats,
    /// One output per requested language.
    pub outputs: Vec<GeneratedOutput>,
}

/// Parse a composition from JSON text. Malformation is always fatal for
/// the file; there is no tree to translate.
pub fn parse_composition(json: &str) -> LottiecResult<CompositionDef> {
    serde_json::from_str(json).map_err(|e| LottiecError::parse(e.to_string()))
}

/// Run the pipeline over an already-parsed composition.
pub fn run_composition(
    source: &CompositionDef,
    class_name: &str,
    source_description: &str,
    options: &TranslationOptions,
) -> LottiecResult<FileResult> {
    let translated = translate(
        source,
        &TranslatorConfiguration {
            strict: options.strict,
        },
    )?;

    let mut ir = translated.ir;
    if !options.disable_translation_optimizer {
        ir = reduce(&ir);
    }
    if !options.disable_codegen_optimizer {
        ir = canonicalize(&ir);
    }

    let stats = TranslationStats::from_ir(&ir);
    let outputs = options
        .languages
        .iter()
        .map(|language| {
            let stringifier = language.stringifier();
            generate(
                &ir,
                stringifier.as_ref(),
                &InstantiatorOptions {
                    class_name: class_name.to_owned(),
                    test_mode: options.test_mode,
                    source_description: source_description.to_owned(),
                },
            )
        })
        .collect();

    info!(class_name, layer_count = stats.layer_total(), "pipeline run complete");

    Ok(FileResult {
        class_name: class_name.to_owned(),
        ir,
        issues: translated.issues,
        stats,
        outputs,
    })
}

/// Run the pipeline over one input file.
pub fn run_file(path: &Path, options: &TranslationOptions) -> LottiecResult<FileResult> {
    let text = std::fs::read_to_string(path)?;
    let source = parse_composition(&text)?;
    let class_name = class_name_for(path, &source);
    let source_description = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    run_composition(&source, &class_name, &source_description, options)
}

/// Derive a generated-class name from the composition name, falling
/// back to the file stem.
fn class_name_for(path: &Path, source: &CompositionDef) -> String {
    let raw = if source.name.is_empty() {
        path.file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        source.name.clone()
    };

    match crate::graph::namer::sanitize(&raw) {
        Some(name) => name,
        None => "Composition".to_owned(),
    }
}

/// A mutex-guarded writer shared by concurrent pipeline runs.
pub struct DiagnosticsSink {
    inner: Mutex<Box<dyn Write + Send>>,
}

impl DiagnosticsSink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Write one line. Poisoning is ignored; diagnostics are best
    /// effort.
    pub fn line(&self, text: &str) {
        if let Ok(mut writer) = self.inner.lock() {
            let _ = writeln!(writer, "{text}");
        }
    }
}

/// One batch entry's outcome.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: LottiecResult<FileResult>,
}

/// The whole batch, in input order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub files: Vec<FileOutcome>,
}

impl BatchOutcome {
    /// `true` only when every constituent file succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.files.iter().all(|f| f.result.is_ok())
    }
}

/// Run the pipeline over many files, one independent run per file.
pub fn run_batch(
    paths: &[PathBuf],
    options: &TranslationOptions,
    sink: &DiagnosticsSink,
) -> BatchOutcome {
    let files: Vec<FileOutcome> = paths
        .par_iter()
        .map(|path| {
            let result = run_file(path, options);
            match &result {
                Ok(file) => {
                    for issue in &file.issues {
                        sink.line(&format!("{}: {issue}", path.display()));
                    }
                }
                Err(err) => {
                    sink.line(&format!("{}: failed: {err}", path.display()));
                }
            }
            FileOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect();

    BatchOutcome { files }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
