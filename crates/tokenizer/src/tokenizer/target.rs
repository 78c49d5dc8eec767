//! Symbol-level tokenization of target equations.

use super::source::inner_tokens;
use crate::pre_tokenizer::{with_boundaries, Preprocessor, SeparatorMarker};
use eqtok_core::{PatternKind, PatternSet, Result, SpecialSymbols};
use regex::Regex;

/// Target equation tokenizer and decoder.
#[derive(Debug, Clone)]
pub struct TargetTokenizer {
    /// Wrapping passes, in `PatternKind::TOKENIZE_ORDER`
    passes: Vec<Regex>,
    preprocessor: Preprocessor,
    marker: SeparatorMarker,
    specials: SpecialSymbols,
}

impl TargetTokenizer {
    pub fn new(patterns: &PatternSet, marker: SeparatorMarker, specials: SpecialSymbols) -> Self {
        let passes = PatternKind::TOKENIZE_ORDER
            .iter()
            .map(|&kind| patterns.get(kind).clone())
            .collect();

        Self {
            passes,
            preprocessor: Preprocessor::new(),
            marker,
            specials,
        }
    }

    /// Tokenize an equation.
    ///
    /// Whitespace runs, identifiers and operators are each wrapped in turn;
    /// numbers are only delimited by their neighbours. The first and last
    /// pieces are overwritten with the boundary tokens.
    pub fn tokenize(&self, expr: &str) -> Vec<String> {
        let mut expr = self.preprocessor.preprocess(expr);
        for pattern in &self.passes {
            expr = self.marker.wrap_matches(&expr, pattern);
        }
        let expr = self.marker.collapse(&expr);

        with_boundaries(self.marker.split(&expr), &self.specials.bos, &self.specials.eos)
    }

    /// Decode a target token sequence.
    ///
    /// Inner tokens are concatenated as-is, since whitespace was kept as
    /// tokens; separator tokens, if any, become spaces.
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String> {
        let expr: String = inner_tokens(tokens)?.iter().map(|t| t.as_ref()).collect();
        Ok(expr.replace(self.specials.sep.as_str(), " "))
    }
}
