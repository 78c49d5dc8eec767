//! Eqtok CLI - Command-line harness for the equation tokenizer.
//!
//! This is the main entry point for the `eqtok` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, VocabCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eqtok")]
#[command(about = "Tokenize equations for sequence-to-sequence models", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the target vocabulary from an equation corpus
    Vocab(VocabCommand),
    /// Tokenize an expression and print tokens and IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vocab(cmd) => commands::vocab::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
    }

    Ok(())
}
