//! Code generation backends: per-language stringifiers and the
//! instantiator generator that walks the optimized, named graph.

pub mod builder;
pub mod instantiator;
pub mod stringifier;

pub use builder::CodeBuilder;
pub use instantiator::{GeneratedOutput, InstantiatorOptions, generate};
pub use stringifier::{
    CSharpStringifier, CppStringifier, GeneratedFile, Method, Stringifier,
};

/// A supported target language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    CSharp,
    Cpp,
}

impl Language {
    /// All supported languages, in stable order.
    pub const ALL: [Self; 2] = [Self::CSharp, Self::Cpp];

    /// The stringifier for this language.
    pub fn stringifier(self) -> Box<dyn Stringifier> {
        match self {
            Self::CSharp => Box::new(CSharpStringifier),
            Self::Cpp => Box::new(CppStringifier),
        }
    }

    /// Stable lowercase name, matching the CLI's `--language` values.
    pub fn name(self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
            Self::Cpp => "cpp",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csharp" | "cs" => Ok(Self::CSharp),
            "cpp" | "cxx" | "c++" => Ok(Self::Cpp),
            other => Err(format!("unknown language \"{other}\"")),
        }
    }
}
