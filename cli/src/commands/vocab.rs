//! Vocab command implementation.

use clap::Parser;

/// Vocab command arguments.
#[derive(Parser)]
pub struct VocabCommand {
    /// Path to the corpus file, one equation per line
    #[arg(short, long)]
    pub corpus: String,

    /// Output directory for the tokenizer
    #[arg(short, long)]
    pub output: String,

    /// Minimum frequency for a token to be indexed
    #[arg(short, long, default_value_t = 1)]
    pub min_frequency: u64,

    /// Count the corpus in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use eqtok_tokenizer::EquationTokenizer;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub fn run(cmd: VocabCommand) -> AnyhowResult<()> {
    // Read corpus
    let start = Instant::now();
    let data = fs::read_to_string(&cmd.corpus)
        .with_context(|| format!("failed to read corpus {}", cmd.corpus))?;
    let corpus: Vec<&str> = data.lines().filter(|l| !l.trim().is_empty()).collect();
    info!(
        equations = corpus.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "read corpus"
    );

    // Build vocabularies
    let mut tokenizer = EquationTokenizer::builder()
        .min_frequency(cmd.min_frequency)
        .parallel(cmd.parallel)
        .build()?;

    let start = Instant::now();
    tokenizer.train(&corpus)?;
    let target_size = tokenizer.target_vocab().map_or(0, |v| v.len());
    info!(
        target_vocab = target_size,
        source_vocab = tokenizer.source_vocab().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "vocabulary built"
    );

    // Save
    tokenizer.save(Path::new(&cmd.output))?;
    println!("Saved tokenizer ({} target tokens) to {}", target_size, cmd.output);

    Ok(())
}
