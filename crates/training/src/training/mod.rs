//! Vocabulary construction for equation tokenizers.
//!
//! This module provides corpus counting and the source/target vocabulary
//! builders.

pub mod builder;
pub mod counter;

pub use builder::{TrainingConfig, VocabBuilder, SOURCE_ALPHABET};
pub use counter::CorpusCounter;
