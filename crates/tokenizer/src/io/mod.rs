//! Serialization and deserialization for tokenizers.
//!
//! This module provides saving and loading of the configuration and both
//! vocabularies as a single JSON document.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedTokenizer, SerializedVocabulary, FORMAT_VERSION};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
