//! Regex pattern configuration.
//!
//! Pattern sources live in a plain serializable record; compiling it yields
//! a [`PatternSet`] that is handed to extractors and tokenizers instead of
//! process-wide statics.

use crate::error::{Result, TokenizerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Token class matched by one of the target patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Whitespace,
    Identifier,
    Number,
    Operator,
}

impl PatternKind {
    /// Extraction order used when building target vocabularies.
    pub const VOCAB_ORDER: [PatternKind; 4] = [
        Self::Whitespace,
        Self::Identifier,
        Self::Number,
        Self::Operator,
    ];

    /// Wrapping order used when tokenizing target equations. Numbers are
    /// left to fall out between the other boundaries.
    pub const TOKENIZE_ORDER: [PatternKind; 3] =
        [Self::Whitespace, Self::Identifier, Self::Operator];
}

/// Regex sources for every token class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub whitespace: String,
    pub identifier: String,
    pub number: String,
    pub operator: String,
    /// Single-character unit of source expressions
    pub digit: String,
    /// Whitespace runs in source expressions, emitted as separator tokens
    pub source_whitespace: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            whitespace: r"[ \t]+".to_string(),
            identifier: r"[a-zA-Z_][a-zA-Z_0-9]*".to_string(),
            number: r"[0-9]+(?:\.[0-9]*)?".to_string(),
            operator: r"\^|[-+*/=<>()]".to_string(),
            digit: r"\d".to_string(),
            source_whitespace: r"\s+".to_string(),
        }
    }
}

impl PatternConfig {
    /// Compile every pattern.
    pub fn compile(&self) -> Result<PatternSet> {
        let set = PatternSet {
            whitespace: compile(&self.whitespace)?,
            identifier: compile(&self.identifier)?,
            number: compile(&self.number)?,
            operator: compile(&self.operator)?,
            digit: compile(&self.digit)?,
            source_whitespace: compile(&self.source_whitespace)?,
        };
        debug!(config = ?self, "compiled pattern set");
        Ok(set)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| TokenizerError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compiled patterns. Cheap to share behind a reference or `Arc`.
#[derive(Debug, Clone)]
pub struct PatternSet {
    whitespace: Regex,
    identifier: Regex,
    number: Regex,
    operator: Regex,
    digit: Regex,
    source_whitespace: Regex,
}

impl PatternSet {
    /// Pattern for a target token class.
    pub fn get(&self, kind: PatternKind) -> &Regex {
        match kind {
            PatternKind::Whitespace => &self.whitespace,
            PatternKind::Identifier => &self.identifier,
            PatternKind::Number => &self.number,
            PatternKind::Operator => &self.operator,
        }
    }

    /// Pattern for a single source digit.
    pub fn digit(&self) -> &Regex {
        &self.digit
    }

    /// Pattern for whitespace runs in source expressions.
    pub fn source_whitespace(&self) -> &Regex {
        &self.source_whitespace
    }
}
