//! Format definitions for tokenizer serialization.
//!
//! This module defines the data structures written to `tokenizer.json`.

use eqtok_core::{PatternConfig, SpecialSymbols, Vocabulary};
use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const FORMAT_VERSION: &str = "1.0.0";

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Format version
    pub version: String,
    /// Configuration
    pub config: SerializedConfig,
    /// Source vocabulary
    pub source_vocab: SerializedVocabulary,
    /// Target vocabulary, absent until trained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_vocab: Option<SerializedVocabulary>,
}

/// Tokenizer configuration in serialized format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedConfig {
    pub patterns: PatternConfig,
    pub specials: SpecialSymbols,
    pub separator: char,
    pub min_frequency: u64,
}

/// Vocabulary in serialized format: tokens listed in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedVocabulary {
    pub tokens: Vec<String>,
    pub default_index: Option<u32>,
}

impl From<&Vocabulary> for SerializedVocabulary {
    fn from(vocab: &Vocabulary) -> Self {
        Self {
            tokens: vocab.tokens().map(str::to_string).collect(),
            default_index: vocab.default_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let tokenizer_data = SerializedTokenizer {
            version: FORMAT_VERSION.to_string(),
            config: SerializedConfig {
                patterns: PatternConfig::default(),
                specials: SpecialSymbols::default(),
                separator: ';',
                min_frequency: 1,
            },
            source_vocab: SerializedVocabulary {
                tokens: vec!["<s>".to_string(), "7".to_string()],
                default_index: Some(0),
            },
            target_vocab: None,
        };

        let json = serde_json::to_string(&tokenizer_data).unwrap();
        assert!(!json.contains("target_vocab"));

        let deserialized: SerializedTokenizer = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.version, tokenizer_data.version);
        assert_eq!(deserialized.config.patterns, PatternConfig::default());
        assert_eq!(deserialized.source_vocab, tokenizer_data.source_vocab);
        assert!(deserialized.target_vocab.is_none());
    }
}
