//! Digit-level tokenization of numeric source expressions.

use crate::pre_tokenizer::{with_boundaries, SeparatorMarker};
use eqtok_core::{PatternSet, Result, SpecialSymbols, TokenizerError};
use regex::{NoExpand, Regex};

/// Source expression tokenizer and decoder.
#[derive(Debug, Clone)]
pub struct SourceTokenizer {
    digit: Regex,
    whitespace: Regex,
    marker: SeparatorMarker,
    specials: SpecialSymbols,
}

impl SourceTokenizer {
    pub fn new(patterns: &PatternSet, marker: SeparatorMarker, specials: SpecialSymbols) -> Self {
        Self {
            digit: patterns.digit().clone(),
            whitespace: patterns.source_whitespace().clone(),
            marker,
            specials,
        }
    }

    /// Tokenize a numeric expression.
    ///
    /// Digits and `-` become single tokens, whitespace runs become the
    /// separator token. The first and last pieces are overwritten with the
    /// boundary tokens.
    pub fn tokenize(&self, expr: &str) -> Vec<String> {
        let expr = self.marker.wrap_matches(expr, &self.digit);
        let expr = self.marker.collapse(&expr);
        let expr = self
            .whitespace
            .replace_all(&expr, NoExpand(&self.specials.sep))
            .into_owned();
        let expr = self.marker.wrap_literal(&expr, "-");
        let expr = self.marker.collapse(&expr);

        with_boundaries(self.marker.split(&expr), &self.specials.bos, &self.specials.eos)
    }

    /// Decode a source token sequence.
    ///
    /// Drops the boundary tokens, space-joins the rest, turns separator
    /// tokens back into spaces and re-attaches signs to what follows them.
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String> {
        let inner = inner_tokens(tokens)?;
        let expr = inner
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        let expr = expr.replace(self.specials.sep.as_str(), " ");
        let expr = self.marker.strip(&expr);
        Ok(expr.replace("- ", "-"))
    }
}

/// Tokens between the two boundary positions.
pub(crate) fn inner_tokens<S>(tokens: &[S]) -> Result<&[S]> {
    if tokens.len() < 2 {
        return Err(TokenizerError::InvalidSequence { len: tokens.len() });
    }
    Ok(&tokens[1..tokens.len() - 1])
}
