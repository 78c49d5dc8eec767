//! Separator-marker segmentation.
//!
//! Tokenizers mark token boundaries by flanking matches with a marker
//! character, collapse marker runs, then split on the marker. Every pass
//! rescans the whole evolving string; passes are never fused, because which
//! substrings end up double-wrapped depends on running them one by one.

use eqtok_core::{PatternKind, PatternSet, Result, SpecialSymbols, TokenizerError};
use eqtok_training::SOURCE_ALPHABET;
use regex::{Captures, NoExpand, Regex};

/// Default separator marker.
pub const DEFAULT_MARKER: char = ';';

/// Boundary marker used while segmenting.
#[derive(Debug, Clone)]
pub struct SeparatorMarker {
    /// Marker character
    marker: char,
    /// Two or more consecutive markers
    runs: Regex,
}

impl SeparatorMarker {
    /// Create a marker.
    ///
    /// Whitespace markers are rejected since whitespace is itself tokenized.
    pub fn new(marker: char) -> Result<Self> {
        if marker.is_whitespace() {
            return Err(TokenizerError::InvalidConfig(format!(
                "Separator marker {:?} must not be whitespace",
                marker
            )));
        }

        let pattern = format!("{}{{2,}}", regex::escape(&marker.to_string()));
        let runs = Regex::new(&pattern).map_err(|source| TokenizerError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;

        Ok(Self { marker, runs })
    }

    /// Check that no special literal contains the marker, otherwise
    /// splitting would cut it apart.
    pub fn check_specials(&self, specials: &SpecialSymbols) -> Result<()> {
        match specials.all().into_iter().find(|s| s.contains(self.marker)) {
            Some(literal) => Err(TokenizerError::InvalidConfig(format!(
                "Special symbol {:?} contains the separator marker {:?}",
                literal, self.marker
            ))),
            None => Ok(()),
        }
    }

    /// Check that the marker cannot be token content. Splitting on a marker
    /// that a pattern matches, or that belongs to the source alphabet,
    /// would delete that content.
    pub fn check_patterns(&self, patterns: &PatternSet) -> Result<()> {
        let text = self.marker.to_string();
        let matched = patterns.digit().is_match(&text)
            || PatternKind::VOCAB_ORDER
                .iter()
                .any(|&kind| patterns.get(kind).is_match(&text))
            || SOURCE_ALPHABET.contains(&text.as_str());

        if matched {
            return Err(TokenizerError::InvalidConfig(format!(
                "Separator marker {:?} can occur as token content",
                self.marker
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Flank every match of `pattern` with markers.
    pub fn wrap_matches(&self, text: &str, pattern: &Regex) -> String {
        pattern
            .replace_all(text, |caps: &Captures| {
                format!("{m}{}{m}", &caps[0], m = self.marker)
            })
            .into_owned()
    }

    /// Flank every occurrence of a literal with markers.
    pub fn wrap_literal(&self, text: &str, literal: &str) -> String {
        text.replace(literal, &format!("{m}{}{m}", literal, m = self.marker))
    }

    /// Collapse runs of two or more markers into one.
    pub fn collapse(&self, text: &str) -> String {
        let single = self.marker.to_string();
        self.runs.replace_all(text, NoExpand(&single)).into_owned()
    }

    /// Split on the marker.
    pub fn split(&self, text: &str) -> Vec<String> {
        text.split(self.marker).map(|s| s.to_string()).collect()
    }

    /// Remove every marker character.
    pub fn strip(&self, text: &str) -> String {
        text.chars().filter(|&c| c != self.marker).collect()
    }
}

/// Overwrite the first piece with `bos` and the last with `eos`.
///
/// Whatever the boundary pieces held is discarded, content included. A
/// single piece becomes `[bos, eos]`.
pub fn with_boundaries(mut pieces: Vec<String>, bos: &str, eos: &str) -> Vec<String> {
    match pieces.len() {
        0 | 1 => vec![bos.to_string(), eos.to_string()],
        n => {
            pieces[0] = bos.to_string();
            pieces[n - 1] = eos.to_string();
            pieces
        }
    }
}
