//! Text-level configuration and normalization.

pub mod patterns;
pub mod preprocess;

pub use patterns::{PatternConfig, PatternKind, PatternSet};
pub use preprocess::{preprocess, Preprocessor};
