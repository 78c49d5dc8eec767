//! Core data structures: special symbols, frequency tables, vocabularies.

pub mod frequency;
pub mod symbols;
pub mod vocab;

pub use frequency::{extract, FrequencyTable};
pub use symbols::{SpecialSymbol, SpecialSymbols, BOS_IDX, EOS_IDX, PAD_IDX, SEP_IDX, UNK_IDX};
pub use vocab::{Vocab, Vocabulary};
