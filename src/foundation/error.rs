/// Convenience alias for results produced by this crate.
pub type LottiecResult<T> = Result<T, LottiecError>;

/// Errors produced by parsing, translation, and code generation.
#[derive(thiserror::Error, Debug)]
pub enum LottiecError {
    /// The input file is not a well-formed composition. Always fatal for
    /// that file; there is no tree to translate.
    #[error("parse error: {0}")]
    Parse(String),

    /// The composition is structurally valid but semantically incomplete.
    #[error("validation error: {0}")]
    Validation(String),

    /// Translation could not proceed for this file.
    #[error("translation error: {0}")]
    Translation(String),

    /// An issue was reported while strict mode is enabled.
    #[error("strict mode: {0}")]
    Strict(String),

    /// Failure reading an input or writing an artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LottiecError {
    /// Build a [`LottiecError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`LottiecError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LottiecError::Translation`].
    pub fn translation(msg: impl Into<String>) -> Self {
        Self::Translation(msg.into())
    }

    /// Build a [`LottiecError::Strict`].
    pub fn strict(msg: impl Into<String>) -> Self {
        Self::Strict(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
