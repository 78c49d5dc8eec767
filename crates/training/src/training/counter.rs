//! Token counting over an equation corpus.
//!
//! Each equation is preprocessed and scanned once per pattern class, all
//! passes feeding the same insertion-ordered table. The parallel path
//! splits the corpus into contiguous chunks and folds the per-chunk tables
//! back in corpus order, so first-seen order (and therefore vocabulary
//! indices) matches the sequential path exactly.

use eqtok_core::{extract, FrequencyTable, PatternKind, PatternSet, Preprocessor};
use rayon::prelude::*;

/// Counter for target token frequencies.
pub struct CorpusCounter<'a> {
    /// Compiled token patterns
    patterns: &'a PatternSet,
    /// Applied to every equation before extraction
    preprocessor: Preprocessor,
}

impl<'a> CorpusCounter<'a> {
    /// Create a new corpus counter.
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self {
            patterns,
            preprocessor: Preprocessor::new(),
        }
    }

    /// Add one equation's tokens to `table`.
    pub fn count_equation(&self, equation: &str, table: &mut FrequencyTable) {
        let equation = self.preprocessor.preprocess(equation);
        for kind in PatternKind::VOCAB_ORDER {
            extract(&equation, table, self.patterns.get(kind));
        }
    }

    /// Count a corpus in order on the current thread.
    pub fn count_sequential<S: AsRef<str>>(&self, corpus: &[S]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for equation in corpus {
            self.count_equation(equation.as_ref(), &mut table);
        }
        table
    }

    /// Count a corpus in parallel.
    ///
    /// Chunk tables are collected in chunk order (not completion order)
    /// and merged left to right.
    pub fn count_parallel<S>(&self, corpus: &[S], chunk_size: usize) -> FrequencyTable
    where
        S: AsRef<str> + Sync,
    {
        let partials: Vec<FrequencyTable> = corpus
            .par_chunks(chunk_size.max(1))
            .map(|chunk| self.count_sequential(chunk))
            .collect();

        partials
            .into_iter()
            .fold(FrequencyTable::new(), |mut acc, partial| {
                acc.merge(&partial);
                acc
            })
    }
}
