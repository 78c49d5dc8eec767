//! Load functionality for saved tokenizers.

use super::format::{SerializedTokenizer, SerializedVocabulary, FORMAT_VERSION};
use super::save::TOKENIZER_FILE;
use crate::tokenizer::TokenizerConfig;
use eqtok_core::{Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Tokenizer loader - handles reading a saved tokenizer.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load configuration and vocabularies from a directory.
    ///
    /// Expects a `tokenizer.json` file in the given directory.
    pub fn load(path: &Path) -> Result<(TokenizerConfig, Vocabulary, Option<Vocabulary>)> {
        let file_path = path.join(TOKENIZER_FILE);
        let file = File::open(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize tokenizer: {}", e)))?;

        debug!(path = %file_path.display(), version = %serialized.version, "loading tokenizer");
        Self::deserialize(serialized)
    }

    /// Rebuild configuration and vocabularies from the serialized structure.
    pub fn deserialize(
        data: SerializedTokenizer,
    ) -> Result<(TokenizerConfig, Vocabulary, Option<Vocabulary>)> {
        if data.version != FORMAT_VERSION {
            warn!(
                found = %data.version,
                expected = FORMAT_VERSION,
                "tokenizer format version mismatch"
            );
        }

        let config = TokenizerConfig {
            patterns: data.config.patterns,
            specials: data.config.specials,
            separator: data.config.separator,
            min_frequency: data.config.min_frequency,
            ..TokenizerConfig::default()
        };

        let source_vocab = Self::vocabulary(data.source_vocab)?;
        let target_vocab = data.target_vocab.map(Self::vocabulary).transpose()?;

        Ok((config, source_vocab, target_vocab))
    }

    fn vocabulary(data: SerializedVocabulary) -> Result<Vocabulary> {
        let mut vocab = Vocabulary::from_tokens(&data.tokens)
            .map_err(|e| TokenizerError::Load(e.to_string()))?;

        if let Some(index) = data.default_index {
            if index as usize >= vocab.len() {
                return Err(TokenizerError::Load(format!(
                    "Default index {} outside vocabulary of size {}",
                    index,
                    vocab.len()
                )));
            }
            vocab.set_default_index(index);
        }

        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::TokenizerSaver;

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = TokenizerConfig {
            min_frequency: 3,
            ..Default::default()
        };
        let source = Vocabulary::from_tokens(["<s>", "<pad>", "</s>", "<unk>"])
            .unwrap()
            .with_default_index(3);
        let target = Vocabulary::from_tokens(["<s>", "x"]).unwrap();

        TokenizerSaver::new(&config, &source, Some(&target))
            .save(dir.path())
            .unwrap();
        let (loaded_config, loaded_source, loaded_target) =
            TokenizerLoader::load(dir.path()).unwrap();

        assert_eq!(loaded_config.min_frequency, 3);
        assert_eq!(loaded_config.specials, config.specials);
        assert_eq!(loaded_source, source);
        assert_eq!(loaded_target, Some(target));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            TokenizerLoader::load(dir.path()),
            Err(TokenizerError::Io { .. })
        ));
    }

    #[test]
    fn test_rejects_default_index_out_of_range() {
        let data = SerializedVocabulary {
            tokens: vec!["a".to_string()],
            default_index: Some(5),
        };
        assert!(matches!(
            TokenizerLoader::vocabulary(data),
            Err(TokenizerError::Load(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TOKENIZER_FILE), "{ not json").unwrap();
        assert!(matches!(
            TokenizerLoader::load(dir.path()),
            Err(TokenizerError::Load(_))
        ));
    }
}
