//! The source-side object models: the parsed composition and the
//! `.lottie` container manifest.

pub mod dotlottie;
pub mod model;
