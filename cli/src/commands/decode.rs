//! Decode command implementation.

use super::Kind;
use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Sequence kind
    #[arg(short, long, value_enum)]
    pub kind: Kind,

    /// Token IDs to decode (comma-separated)
    #[arg(short, long)]
    pub ids: String,

    /// Saved tokenizer directory; required for target sequences
    #[arg(short, long)]
    pub tokenizer: Option<String>,
}

use anyhow::Result as AnyhowResult;
use eqtok_tokenizer::EquationTokenizer;
use std::path::Path;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = match &cmd.tokenizer {
        Some(path) => EquationTokenizer::load(Path::new(path))?,
        None => EquationTokenizer::builder().build()?,
    };

    // Parse token IDs
    let ids: Vec<u32> = cmd
        .ids
        .split(',')
        .map(|s| s.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;

    let text = tokenizer.decode(cmd.kind.into(), &ids)?;
    println!("{}", text);

    Ok(())
}
