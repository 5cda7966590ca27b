//! lottiec compiles a declarative, keyframe-animated vector-graphics
//! description (a Lottie/Bodymovin composition) into a retained-mode
//! scene-graph construction recipe, emitted as source code in multiple
//! target languages.
//!
//! The pipeline is a linear sequence of pure transforms:
//!
//! - Parse a [`composition::model::CompositionDef`] (serde boundary)
//! - [`translator::translate`] it into the [`ir`]
//! - Optionally [`optimizer::reduce`] and [`optimizer::canonicalize`]
//! - Build an [`graph::ObjectGraph`], name it, and
//!   [`codegen::generate`] per-language factory text
//!
//! [`pipeline::run_file`] and [`pipeline::run_batch`] wire the stages
//! together; batch runs are independent per file.
#![forbid(unsafe_code)]

pub mod animatables;
pub mod codegen;
pub mod composition;
pub mod foundation;
pub mod graph;
pub mod ir;
pub mod optimizer;
pub mod pipeline;
pub mod translator;

pub use crate::codegen::Language;
pub use crate::foundation::core::{Color, Opacity, Rotation, Vector2, Vector3};
pub use crate::foundation::error::{LottiecError, LottiecResult};
pub use crate::foundation::math::float_to_ratio;
pub use crate::pipeline::{
    BatchOutcome, DiagnosticsSink, FileResult, TranslationOptions, run_batch, run_composition,
    run_file,
};
pub use crate::translator::{Issue, TranslationStats};
