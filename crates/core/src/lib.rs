//! Eqtok-core - Core data structures for equation tokenization
//!
//! This crate provides the pieces shared by vocabulary construction and
//! tokenization, independent of any particular sequence format.
//!
//! # Features
//!
//! - Insertion-ordered frequency tables with order-preserving merges
//! - Vocabulary with fixed special-symbol indices and a default index
//! - Injected regex pattern configuration
//! - Target-equation preprocessing
//!
//! # Example
//!
//! ```rust
//! use eqtok_core::{extract, FrequencyTable, PatternConfig, PatternKind, Vocabulary};
//!
//! let patterns = PatternConfig::default().compile()?;
//! let mut table = FrequencyTable::new();
//! extract("a+b", &mut table, patterns.get(PatternKind::Identifier));
//! extract("b+c", &mut table, patterns.get(PatternKind::Identifier));
//!
//! let vocab = Vocabulary::build(&table, &["<unk>"], true, 1).with_default_index(0);
//! assert_eq!(vocab.index_of("c")?, 3);
//! assert_eq!(vocab.index_of("zzz")?, 0);
//! # Ok::<(), eqtok_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use core::{
    extract, FrequencyTable, SpecialSymbol, SpecialSymbols, Vocab, Vocabulary, BOS_IDX, EOS_IDX,
    PAD_IDX, SEP_IDX, UNK_IDX,
};

pub mod text;
pub use text::{preprocess, PatternConfig, PatternKind, PatternSet, Preprocessor};
