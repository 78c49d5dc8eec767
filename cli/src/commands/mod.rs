//! CLI commands for the eqtok tokenizer.

pub mod decode;
pub mod encode;
pub mod vocab;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use vocab::VocabCommand;

use clap::ValueEnum;
use eqtok_tokenizer::SequenceKind;

/// Sequence kind as a command-line value.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    /// Digit-level numeric expression
    Source,
    /// Symbol-level equation
    Target,
}

impl From<Kind> for SequenceKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Source => SequenceKind::Source,
            Kind::Target => SequenceKind::Target,
        }
    }
}
