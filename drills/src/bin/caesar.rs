//! Encrypt a message with a fixed rotation cipher.

use anyhow::Result;
use clap::Parser;
use drills::cipher::caesar;
use drills::cli::parse_or_usage;
use drills::prompt::prompt_line;
use drills::{exit_codes, logging};
use tracing::debug;

const USAGE: &str = "Usage: caesar key";

#[derive(Parser)]
#[command(name = "caesar", version, about = "Encrypt a message with a fixed rotation cipher")]
struct Cli {
    /// Non-negative rotation applied to every letter.
    key: u32,
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
    debug!(key = cli.key, len = plaintext.len(), "rotating plaintext");
    println!("ciphertext: {}", caesar(&plaintext, cli.key));
    Ok(())
}
