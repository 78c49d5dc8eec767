//! Encode command implementation.

use super::Kind;
use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Sequence kind
    #[arg(short, long, value_enum)]
    pub kind: Kind,

    /// Expression to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Saved tokenizer directory; required for target sequences
    #[arg(short, long)]
    pub tokenizer: Option<String>,
}

use anyhow::Result as AnyhowResult;
use eqtok_tokenizer::EquationTokenizer;
use std::path::Path;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = match &cmd.tokenizer {
        Some(path) => EquationTokenizer::load(Path::new(path))?,
        None => EquationTokenizer::builder().build()?,
    };

    // Read input text (from stdin if "-")
    let input_text = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.trim_end_matches(&['\r', '\n'][..]).to_string()
    } else {
        cmd.input
    };

    let encoding = tokenizer.encode(cmd.kind.into(), &input_text)?;

    println!("{:?}", encoding.tokens);
    let ids: Vec<String> = encoding.ids.iter().map(|id| id.to_string()).collect();
    println!("{}", ids.join(","));

    Ok(())
}
