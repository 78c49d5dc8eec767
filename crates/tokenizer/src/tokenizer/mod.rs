//! Main tokenizer implementation.
//!
//! This module provides the high-level `EquationTokenizer` that ties the
//! source and target tokenizers to their vocabularies.

pub mod source;
pub mod target;

pub use source::SourceTokenizer;
pub use target::TargetTokenizer;

use crate::pre_tokenizer::{SeparatorMarker, DEFAULT_MARKER};
use eqtok_core::{PatternConfig, PatternSet, Result, SpecialSymbols, TokenizerError, Vocabulary};
use eqtok_training::{TrainingConfig, VocabBuilder};
use std::path::Path;
use tracing::debug;

/// Which side of the model a sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Digit-level numeric expression
    Source,
    /// Symbol-level equation
    Target,
}

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Regex sources for every token class
    pub patterns: PatternConfig,
    /// Special symbol literals
    pub specials: SpecialSymbols,
    /// Boundary marker used during segmentation
    pub separator: char,
    /// Minimum count for a corpus token to enter the target vocabulary
    pub min_frequency: u64,
    /// Count the training corpus in parallel
    pub parallel: bool,
    /// Equations per parallel partition
    pub chunk_size: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let training = TrainingConfig::default();
        Self {
            patterns: PatternConfig::default(),
            specials: SpecialSymbols::default(),
            separator: DEFAULT_MARKER,
            min_frequency: training.min_frequency,
            parallel: training.parallel,
            chunk_size: training.chunk_size,
        }
    }
}

impl TokenizerConfig {
    fn training(&self) -> TrainingConfig {
        TrainingConfig {
            min_frequency: self.min_frequency,
            parallel: self.parallel,
            chunk_size: self.chunk_size,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regex patterns.
    pub fn patterns(mut self, patterns: PatternConfig) -> Self {
        self.config.patterns = patterns;
        self
    }

    /// Set the special symbol literals.
    pub fn specials(mut self, specials: SpecialSymbols) -> Self {
        self.config.specials = specials;
        self
    }

    /// Set the segmentation marker.
    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    /// Set the minimum frequency for target tokens.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Enable parallel corpus counting.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set the number of equations per parallel partition.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<EquationTokenizer> {
        EquationTokenizer::new(self.config)
    }
}

/// Equation tokenizer.
///
/// Holds the source vocabulary (fixed alphabet, always present) and the
/// target vocabulary once [`EquationTokenizer::train`] has run or one has
/// been attached.
pub struct EquationTokenizer {
    config: TokenizerConfig,
    patterns: PatternSet,
    source: SourceTokenizer,
    target: TargetTokenizer,
    source_vocab: Vocabulary,
    target_vocab: Option<Vocabulary>,
}

impl EquationTokenizer {
    /// Create a new tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        config.specials.validate()?;
        let patterns = config.patterns.compile()?;
        let marker = SeparatorMarker::new(config.separator)?;
        marker.check_specials(&config.specials)?;
        marker.check_patterns(&patterns)?;

        let source = SourceTokenizer::new(&patterns, marker.clone(), config.specials.clone());
        let target = TargetTokenizer::new(&patterns, marker, config.specials.clone());
        let source_vocab =
            VocabBuilder::new(&patterns, &config.specials, config.training()).build_source_vocabulary();

        Ok(Self {
            config,
            patterns,
            source,
            target,
            source_vocab,
            target_vocab: None,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Build the target vocabulary from a corpus of raw equations.
    pub fn train<S>(&mut self, corpus: &[S]) -> Result<()>
    where
        S: AsRef<str> + Sync,
    {
        let builder = VocabBuilder::new(&self.patterns, &self.config.specials, self.config.training());
        self.target_vocab = Some(builder.build_target_vocabulary(corpus));
        Ok(())
    }

    /// Attach a previously built target vocabulary.
    pub fn with_target_vocabulary(mut self, vocab: Vocabulary) -> Self {
        self.target_vocab = Some(vocab);
        self
    }

    /// Tokenize a numeric source expression.
    pub fn tokenize_source(&self, expr: &str) -> Vec<String> {
        self.source.tokenize(expr)
    }

    /// Tokenize a target equation.
    pub fn tokenize_target(&self, expr: &str) -> Vec<String> {
        self.target.tokenize(expr)
    }

    /// Tokenize either kind of sequence.
    pub fn tokenize(&self, kind: SequenceKind, expr: &str) -> Vec<String> {
        match kind {
            SequenceKind::Source => self.tokenize_source(expr),
            SequenceKind::Target => self.tokenize_target(expr),
        }
    }

    /// Decode source tokens back to text.
    pub fn decode_source<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String> {
        self.source.decode(tokens)
    }

    /// Decode target tokens back to text.
    pub fn decode_target<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String> {
        self.target.decode(tokens)
    }

    /// Tokenize and index an expression.
    pub fn encode(&self, kind: SequenceKind, expr: &str) -> Result<Encoding> {
        let tokens = self.tokenize(kind, expr);
        let ids = self.vocab(kind)?.lookup_indices(&tokens)?;
        debug!(?kind, len = ids.len(), "encoded sequence");
        Ok(Encoding { ids, tokens })
    }

    /// Tokenize and index a source expression.
    pub fn encode_source(&self, expr: &str) -> Result<Encoding> {
        self.encode(SequenceKind::Source, expr)
    }

    /// Tokenize and index a target equation.
    pub fn encode_target(&self, expr: &str) -> Result<Encoding> {
        self.encode(SequenceKind::Target, expr)
    }

    /// Encode a batch of expressions (parallelized, order preserved).
    pub fn encode_batch<S>(&self, kind: SequenceKind, exprs: &[S]) -> Result<Vec<Encoding>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        exprs
            .par_iter()
            .map(|expr| self.encode(kind, expr.as_ref()))
            .collect()
    }

    /// Map indices back to tokens and decode them.
    pub fn decode(&self, kind: SequenceKind, ids: &[u32]) -> Result<String> {
        let tokens = self.vocab(kind)?.lookup_tokens(ids)?;
        match kind {
            SequenceKind::Source => self.decode_source(&tokens),
            SequenceKind::Target => self.decode_target(&tokens),
        }
    }

    /// Get the vocabulary for a sequence kind.
    pub fn vocab(&self, kind: SequenceKind) -> Result<&Vocabulary> {
        match kind {
            SequenceKind::Source => Ok(&self.source_vocab),
            SequenceKind::Target => self.target_vocab.as_ref().ok_or_else(|| {
                TokenizerError::InvalidConfig("Target vocabulary has not been built".to_string())
            }),
        }
    }

    /// Get a reference to the source vocabulary.
    pub fn source_vocab(&self) -> &Vocabulary {
        &self.source_vocab
    }

    /// Get a reference to the target vocabulary, if built.
    pub fn target_vocab(&self) -> Option<&Vocabulary> {
        self.target_vocab.as_ref()
    }

    /// Get the configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Save the tokenizer to a directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        use crate::io::save::TokenizerSaver;

        TokenizerSaver::new(&self.config, &self.source_vocab, self.target_vocab.as_ref()).save(path)
    }

    /// Load a tokenizer from a directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to load from
    pub fn load(path: &Path) -> Result<Self> {
        use crate::io::load::TokenizerLoader;

        let (config, source_vocab, target_vocab) = TokenizerLoader::load(path)?;
        let mut tokenizer = Self::new(config)?;
        tokenizer.source_vocab = source_vocab;
        tokenizer.target_vocab = target_vocab;
        Ok(tokenizer)
    }
}

/// Result of encoding an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Token IDs
    pub ids: Vec<u32>,
    /// Token strings, parallel to `ids`
    pub tokens: Vec<String>,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqtok_core::{BOS_IDX, EOS_IDX, SEP_IDX, UNK_IDX};

    fn trained(corpus: &[&str]) -> EquationTokenizer {
        let mut tokenizer = EquationTokenizer::builder().build().unwrap();
        tokenizer.train(corpus).unwrap();
        tokenizer
    }

    #[test]
    fn test_builder_defaults() {
        let tokenizer = EquationTokenizer::builder().build().unwrap();

        assert_eq!(tokenizer.source_vocab().len(), 17);
        assert!(tokenizer.target_vocab().is_none());
        assert_eq!(tokenizer.config().separator, ';');
    }

    #[test]
    fn test_builder_rejects_bad_separator() {
        assert!(EquationTokenizer::builder().separator('|').build().is_ok());
        assert!(EquationTokenizer::builder().separator('s').build().is_err());
        assert!(EquationTokenizer::builder().separator('\t').build().is_err());
    }

    #[test]
    fn test_builder_rejects_content_separator() {
        for c in ['0', '-', '.', 'x', '*'] {
            assert!(matches!(
                EquationTokenizer::builder().separator(c).build(),
                Err(TokenizerError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_builder_rejects_clashing_specials() {
        let duplicate = SpecialSymbols {
            pad: "<unk>".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            EquationTokenizer::builder().specials(duplicate).build(),
            Err(TokenizerError::InvalidConfig(_))
        ));

        let empty = SpecialSymbols {
            sep: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            EquationTokenizer::builder().specials(empty).build(),
            Err(TokenizerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_encode_source() {
        let tokenizer = EquationTokenizer::builder().build().unwrap();
        let encoding = tokenizer.encode_source("12 -3.5").unwrap();

        // digits start at 5, "-" is 15 and "." is 16
        assert_eq!(encoding.ids, vec![BOS_IDX, 6, 7, SEP_IDX, 15, 8, 16, 10, EOS_IDX]);
        assert_eq!(encoding.len(), 9);
    }

    #[test]
    fn test_encode_target_requires_vocab() {
        let tokenizer = EquationTokenizer::builder().build().unwrap();
        assert!(matches!(
            tokenizer.encode_target("x"),
            Err(TokenizerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_encode_target_unknown_tokens() {
        let tokenizer = trained(&["x + y"]);
        let encoding = tokenizer.encode_target("z*x+1").unwrap();

        // <s> z " " * " " x " " + " " </s>; "z" and "*" were never seen
        let vocab = tokenizer.target_vocab().unwrap();
        assert_eq!(encoding.tokens[1], "z");
        assert_eq!(encoding.ids[1], UNK_IDX);
        assert_eq!(encoding.ids[3], UNK_IDX);
        assert_eq!(encoding.ids[5], vocab.get_id("x").unwrap());
        assert_eq!(encoding.ids.first(), Some(&BOS_IDX));
        assert_eq!(encoding.ids.last(), Some(&EOS_IDX));
    }

    #[test]
    fn test_decode_ids_roundtrip() {
        let tokenizer = trained(&["y = a*x + b"]);
        let encoding = tokenizer.encode_target("y = a*x + b").unwrap();
        let decoded = tokenizer.decode(SequenceKind::Target, &encoding.ids).unwrap();

        assert_eq!(decoded, "y = a * x + b");
    }

    #[test]
    fn test_decode_unknown_id() {
        let tokenizer = EquationTokenizer::builder().build().unwrap();
        assert!(matches!(
            tokenizer.decode(SequenceKind::Source, &[0, 99, 2]),
            Err(TokenizerError::UnknownTokenId(99))
        ));
    }

    #[test]
    fn test_encode_batch_preserves_order() {
        let tokenizer = trained(&["a + b", "c - d"]);
        let exprs = vec!["a+b".to_string(), "(c)".to_string(), "d".to_string()];
        let batch = tokenizer.encode_batch(SequenceKind::Target, &exprs).unwrap();

        assert_eq!(batch.len(), 3);
        for (expr, encoding) in exprs.iter().zip(&batch) {
            assert_eq!(encoding, &tokenizer.encode_target(expr).unwrap());
        }
    }
}
