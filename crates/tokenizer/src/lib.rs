//! Eqtok-tokenizer - Equation tokenizers
//!
//! This crate turns equations into token sequences for a sequence-to-sequence
//! model and back, for two representations:
//!
//! - **Source**: numeric expressions tokenized at the digit level, with
//!   whitespace carried as an explicit separator token
//! - **Target**: symbolic equations tokenized into identifiers, operators,
//!   numbers and whitespace runs
//!
//! Every sequence starts with the BOS literal and ends with the EOS literal.
//! These overwrite the first and last segmented pieces, so content that
//! lands in those slots (such as a trailing number in a target equation)
//! is dropped.
//!
//! # Example
//!
//! ```rust
//! use eqtok_tokenizer::{EquationTokenizer, SequenceKind};
//!
//! let mut tokenizer = EquationTokenizer::builder().build()?;
//! tokenizer.train(&["x + y", "y = x**2"])?;
//!
//! let tokens = tokenizer.tokenize_target("x + y");
//! assert_eq!(tokens, vec!["<s>", "x", " ", "+", " ", "y", "</s>"]);
//! assert_eq!(tokenizer.decode_target(&tokens)?, "x + y");
//!
//! let encoding = tokenizer.encode(SequenceKind::Source, "12 -3.5")?;
//! assert_eq!(encoding.tokens.first().map(String::as_str), Some("<s>"));
//! # Ok::<(), eqtok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use eqtok_core::{
    PatternConfig, Result, SpecialSymbol, SpecialSymbols, TokenizerError, Vocabulary, BOS_IDX,
    EOS_IDX, PAD_IDX, SEP_IDX, UNK_IDX,
};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{
    Encoding, EquationTokenizer, SequenceKind, SourceTokenizer, TargetTokenizer, TokenizerBuilder,
    TokenizerConfig,
};

// IO/Serialization
pub mod io;
pub use io::{TokenizerLoader, TokenizerSaver};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{preprocess, Preprocessor, SeparatorMarker};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
