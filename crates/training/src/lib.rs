//! Eqtok-training - Vocabulary construction
//!
//! This crate drives token extraction over an equation corpus and assembles
//! the source and target vocabularies.
//!
//! # Features
//!
//! - First-seen ordering of corpus tokens, independent of their counts
//! - Optional parallel counting that reproduces the sequential indices
//! - Fixed-alphabet source vocabulary
//!
//! # Example
//!
//! ```rust
//! use eqtok_core::{PatternConfig, SpecialSymbols};
//! use eqtok_training::{TrainingConfig, VocabBuilder};
//!
//! let patterns = PatternConfig::default().compile()?;
//! let specials = SpecialSymbols::default();
//! let builder = VocabBuilder::new(&patterns, &specials, TrainingConfig::default());
//!
//! let vocab = builder.build_target_vocabulary(&["y = x**2"]);
//! assert_eq!(vocab.token_at(4), Some(" "));
//! # Ok::<(), eqtok_core::TokenizerError>(())
//! ```

pub use eqtok_core::{Result, TokenizerError};

pub mod training;
pub use training::{CorpusCounter, TrainingConfig, VocabBuilder, SOURCE_ALPHABET};
