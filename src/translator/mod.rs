//! The translation pass and its supporting pieces: property conversion,
//! shape and effect mapping, issue collection, and statistics.

pub mod issues;
pub mod stats;
pub mod translate;

mod effects;
mod properties;
mod shapes;

pub use issues::Issue;
pub use stats::TranslationStats;
pub use translate::{TranslationResult, TranslatorConfiguration, translate};
