//! Error types for the equation tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A token sequence too short to carry both boundary tokens
    #[error("Invalid token sequence: expected at least 2 tokens, got {len}")]
    InvalidSequence { len: usize },

    /// A configured pattern failed to compile
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Error loading vocabulary or configuration
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving vocabulary or configuration
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Index outside the vocabulary
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Token absent from a vocabulary that has no default index
    #[error("Unknown token: {0}")]
    UnknownToken(String),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
