//! Reserved special symbols.
//!
//! Five reserved tokens with fixed roles and fixed indices. Their order is
//! the order in which a vocabulary registers them as specials.

use crate::error::{Result, TokenizerError};
use serde::{Deserialize, Serialize};

/// Role of a reserved token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialSymbol {
    /// Beginning of sequence
    Bos,
    /// Padding
    Pad,
    /// End of sequence
    Eos,
    /// Unknown token
    Unk,
    /// Whitespace separator (source sequences only)
    Sep,
}

impl SpecialSymbol {
    /// All roles in index order.
    pub const ALL: [SpecialSymbol; 5] = [Self::Bos, Self::Pad, Self::Eos, Self::Unk, Self::Sep];

    /// Fixed vocabulary index of this role.
    #[inline]
    pub const fn index(self) -> u32 {
        match self {
            Self::Bos => 0,
            Self::Pad => 1,
            Self::Eos => 2,
            Self::Unk => 3,
            Self::Sep => 4,
        }
    }
}

pub const BOS_IDX: u32 = SpecialSymbol::Bos.index();
pub const PAD_IDX: u32 = SpecialSymbol::Pad.index();
pub const EOS_IDX: u32 = SpecialSymbol::Eos.index();
pub const UNK_IDX: u32 = SpecialSymbol::Unk.index();
pub const SEP_IDX: u32 = SpecialSymbol::Sep.index();

/// Literal text of each special symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSymbols {
    pub bos: String,
    pub pad: String,
    pub eos: String,
    pub unk: String,
    pub sep: String,
}

impl SpecialSymbols {
    /// Literal for a role.
    pub fn literal(&self, symbol: SpecialSymbol) -> &str {
        match symbol {
            SpecialSymbol::Bos => &self.bos,
            SpecialSymbol::Pad => &self.pad,
            SpecialSymbol::Eos => &self.eos,
            SpecialSymbol::Unk => &self.unk,
            SpecialSymbol::Sep => &self.sep,
        }
    }

    /// All five literals in index order.
    pub fn all(&self) -> Vec<&str> {
        SpecialSymbol::ALL.iter().map(|&s| self.literal(s)).collect()
    }

    /// Check that every literal is non-empty and distinct.
    ///
    /// Vocabularies dedup their specials, so a repeated literal would shift
    /// every later role off its fixed index.
    pub fn validate(&self) -> Result<()> {
        let literals = self.all();
        for (pos, &symbol) in SpecialSymbol::ALL.iter().enumerate() {
            let literal = literals[pos];
            if literal.is_empty() {
                return Err(TokenizerError::InvalidConfig(format!(
                    "Special symbol {:?} has an empty literal",
                    symbol
                )));
            }
            if literals[..pos].contains(&literal) {
                return Err(TokenizerError::InvalidConfig(format!(
                    "Special symbol {:?} reuses the literal {:?}",
                    symbol, literal
                )));
            }
        }
        Ok(())
    }

    /// Literals for target vocabularies: everything except the separator.
    pub fn without_sep(&self) -> Vec<&str> {
        SpecialSymbol::ALL
            .iter()
            .filter(|&&s| s != SpecialSymbol::Sep)
            .map(|&s| self.literal(s))
            .collect()
    }
}

impl Default for SpecialSymbols {
    fn default() -> Self {
        Self {
            bos: "<s>".to_string(),
            pad: "<pad>".to_string(),
            eos: "</s>".to_string(),
            unk: "<unk>".to_string(),
            sep: "<sep>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_indices() {
        let indices: Vec<u32> = SpecialSymbol::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(UNK_IDX, 3);
        assert_eq!(SEP_IDX, 4);
    }

    #[test]
    fn test_without_sep_keeps_order() {
        let specials = SpecialSymbols::default();
        assert_eq!(specials.without_sep(), vec!["<s>", "<pad>", "</s>", "<unk>"]);
        assert_eq!(specials.all().len(), 5);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(SpecialSymbols::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_literal() {
        let specials = SpecialSymbols {
            pad: "<unk>".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            specials.validate(),
            Err(TokenizerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_literal() {
        let specials = SpecialSymbols {
            sep: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            specials.validate(),
            Err(TokenizerError::InvalidConfig(_))
        ));
    }
}
