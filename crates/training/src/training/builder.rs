//! Vocabulary builders for source and target sequences.

use super::counter::CorpusCounter;
use eqtok_core::{FrequencyTable, PatternSet, SpecialSymbols, Vocabulary, UNK_IDX};
use tracing::info;

/// Fixed source alphabet: digits ascending, then sign and decimal point.
pub const SOURCE_ALPHABET: [&str; 12] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "-", "."];

/// Configuration for vocabulary construction.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Minimum count for a corpus token to be indexed
    pub min_frequency: u64,
    /// Count the corpus with rayon
    pub parallel: bool,
    /// Equations per parallel partition
    pub chunk_size: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_frequency: 1,
            parallel: false,
            chunk_size: 1024,
        }
    }
}

/// Builds source and target vocabularies.
pub struct VocabBuilder<'a> {
    patterns: &'a PatternSet,
    specials: &'a SpecialSymbols,
    config: TrainingConfig,
}

impl<'a> VocabBuilder<'a> {
    /// Create a new builder.
    pub fn new(patterns: &'a PatternSet, specials: &'a SpecialSymbols, config: TrainingConfig) -> Self {
        Self {
            patterns,
            specials,
            config,
        }
    }

    /// Count target tokens over a corpus, in corpus order.
    pub fn count_target_tokens<S>(&self, corpus: &[S]) -> FrequencyTable
    where
        S: AsRef<str> + Sync,
    {
        let counter = CorpusCounter::new(self.patterns);
        if self.config.parallel {
            counter.count_parallel(corpus, self.config.chunk_size)
        } else {
            counter.count_sequential(corpus)
        }
    }

    /// Build the target vocabulary.
    ///
    /// Specials are every reserved symbol except the separator, placed
    /// first; corpus tokens follow in first-seen order. Whitespace runs are
    /// ordinary tokens here, which is why no separator is needed.
    pub fn build_target_vocabulary<S>(&self, corpus: &[S]) -> Vocabulary
    where
        S: AsRef<str> + Sync,
    {
        let table = self.count_target_tokens(corpus);
        let vocab = Vocabulary::build(
            &table,
            &self.specials.without_sep(),
            true,
            self.config.min_frequency,
        )
        .with_default_index(UNK_IDX);

        info!(
            equations = corpus.len(),
            distinct_tokens = table.len(),
            vocab_size = vocab.len(),
            parallel = self.config.parallel,
            "built target vocabulary"
        );
        vocab
    }

    /// Build the source vocabulary from the fixed alphabet.
    pub fn build_source_vocabulary(&self) -> Vocabulary {
        let table: FrequencyTable = SOURCE_ALPHABET.iter().map(|&t| (t, 1)).collect();
        let vocab = Vocabulary::build(&table, &self.specials.all(), true, 1)
            .with_default_index(UNK_IDX);

        info!(vocab_size = vocab.len(), "built source vocabulary");
        vocab
    }
}
