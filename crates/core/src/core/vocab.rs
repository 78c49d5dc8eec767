//! Vocabulary storage and lookup.
//!
//! Bidirectional token <-> index table. Indices are dense, assigned once at
//! construction and never reused.

use crate::core::frequency::FrequencyTable;
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;
use tracing::debug;

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Vocabulary with forward and reverse mappings.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Forward mapping: token string -> ID
    vocab: Vocab,
    /// Reverse mapping, position == ID
    tokens: Vec<CompactString>,
    /// ID returned for tokens missing from the table
    default_index: Option<u32>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vocab: Vocab::with_capacity(capacity),
            tokens: Vec::with_capacity(capacity),
            default_index: None,
        }
    }

    /// Build a vocabulary from an ordered frequency table.
    ///
    /// With `special_first`, `specials` take indices `0..specials.len()` in
    /// the given order and the table keys follow in insertion order;
    /// otherwise the specials are appended after the table. Table entries
    /// with a count below `min_frequency` are skipped, and a token that is
    /// already present keeps its first index.
    pub fn build(
        table: &FrequencyTable,
        specials: &[&str],
        special_first: bool,
        min_frequency: u64,
    ) -> Self {
        let mut vocab = Self::with_capacity(specials.len() + table.len());

        if special_first {
            for special in specials {
                vocab.add_token(special);
            }
        }
        for (token, count) in table.iter() {
            if count >= min_frequency {
                vocab.add_token(token);
            }
        }
        if !special_first {
            for special in specials {
                vocab.add_token(special);
            }
        }

        debug!(
            specials = specials.len(),
            table_len = table.len(),
            vocab_size = vocab.len(),
            "vocabulary built"
        );
        vocab
    }

    /// Rebuild a vocabulary from tokens listed in index order.
    ///
    /// Fails on duplicates, since they would break the dense index layout.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for token in tokens {
            let token = token.as_ref();
            if vocab.contains(token) {
                return Err(TokenizerError::InvalidConfig(format!(
                    "Duplicate token {:?} in vocabulary",
                    token
                )));
            }
            vocab.add_token(token);
        }
        Ok(vocab)
    }

    /// Add a token to the vocabulary.
    ///
    /// Returns the ID assigned to the token, or its existing ID.
    pub fn add_token(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.vocab.get(token) {
            return id;
        }

        let token = CompactString::new(token);
        let id = self.tokens.len() as u32;
        self.tokens.push(token.clone());
        self.vocab.insert(token, id);
        id
    }

    /// Set the ID returned for unknown tokens.
    pub fn set_default_index(&mut self, index: u32) {
        self.default_index = Some(index);
    }

    /// Builder-style variant of [`Vocabulary::set_default_index`].
    pub fn with_default_index(mut self, index: u32) -> Self {
        self.set_default_index(index);
        self
    }

    #[inline]
    pub fn default_index(&self) -> Option<u32> {
        self.default_index
    }

    /// Get the ID for a token string, without falling back.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Get the ID for a token, falling back to the default index.
    ///
    /// Only fails when the token is unknown and no default is set.
    pub fn index_of(&self, token: &str) -> Result<u32> {
        self.get_id(token)
            .or(self.default_index)
            .ok_or_else(|| TokenizerError::UnknownToken(token.to_string()))
    }

    /// Get the token string for an ID.
    #[inline]
    pub fn token_at(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(|s| s.as_str())
    }

    /// Map a token sequence to IDs.
    pub fn lookup_indices<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<u32>> {
        tokens.iter().map(|t| self.index_of(t.as_ref())).collect()
    }

    /// Map an ID sequence back to tokens.
    pub fn lookup_tokens(&self, ids: &[u32]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.token_at(id)
                    .map(str::to_string)
                    .ok_or(TokenizerError::UnknownTokenId(id))
            })
            .collect()
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.vocab.contains_key(token)
    }

    /// Tokens in index order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens && self.default_index == other.default_index
    }
}

impl Eq for Vocabulary {}
