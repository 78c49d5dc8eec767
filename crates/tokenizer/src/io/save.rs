//! Save functionality for tokenizers.

use super::format::{SerializedConfig, SerializedTokenizer, SerializedVocabulary, FORMAT_VERSION};
use crate::tokenizer::TokenizerConfig;
use eqtok_core::{Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// File written inside the target directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Tokenizer saver - handles writing a tokenizer to disk.
pub struct TokenizerSaver<'a> {
    /// Configuration reference
    config: &'a TokenizerConfig,
    /// Source vocabulary reference
    source_vocab: &'a Vocabulary,
    /// Target vocabulary reference, if built
    target_vocab: Option<&'a Vocabulary>,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(
        config: &'a TokenizerConfig,
        source_vocab: &'a Vocabulary,
        target_vocab: Option<&'a Vocabulary>,
    ) -> Self {
        Self {
            config,
            source_vocab,
            target_vocab,
        }
    }

    /// Save the tokenizer to a directory as `tokenizer.json`.
    ///
    /// # Arguments
    /// * `path` - Directory path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let file_path = path.join(TOKENIZER_FILE);
        let file = File::create(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.serialize())
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))?;
        writer.flush().map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        debug!(path = %file_path.display(), "saved tokenizer");
        Ok(())
    }

    /// Serialize to the on-disk structure.
    pub fn serialize(&self) -> SerializedTokenizer {
        SerializedTokenizer {
            version: FORMAT_VERSION.to_string(),
            config: SerializedConfig {
                patterns: self.config.patterns.clone(),
                specials: self.config.specials.clone(),
                separator: self.config.separator,
                min_frequency: self.config.min_frequency,
            },
            source_vocab: SerializedVocabulary::from(self.source_vocab),
            target_vocab: self.target_vocab.map(SerializedVocabulary::from),
        }
    }
}
