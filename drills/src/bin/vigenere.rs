//! Encrypt a message with a repeating-keyword cipher.

use anyhow::Result;
use clap::Parser;
use drills::cipher::vigenere;
use drills::cli::parse_or_usage;
use drills::prompt::prompt_line;
use drills::{exit_codes, logging};
use tracing::debug;

const USAGE: &str = "Usage: vigenere keyword";

#[derive(Parser)]
#[command(
    name = "vigenere",
    version,
    about = "Encrypt a message with a repeating-keyword cipher"
)]
struct Cli {
    /// Keyword whose letters set the per-character rotation.
    #[arg(value_parser = parse_keyword)]
    keyword: String,
}

/// A keyword must be one or more ASCII letters; anything else would leave
/// some plaintext position without a well-defined rotation.
fn parse_keyword(raw: &str) -> Result<String, String> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("keyword must be one or more letters".to_string());
    }
    Ok(raw.to_string())
}

fn main() {
    logging::init();
    let cli: Cli = parse_or_usage(USAGE);
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::USAGE);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let plaintext = prompt_line("plaintext: ")?;
    debug!(keyword_len = cli.keyword.len(), "rotating plaintext");
    println!("ciphertext: {}", vigenere(&plaintext, &cli.keyword));
    Ok(())
}
