//! Print a right-aligned pyramid of hashes.

use anyhow::Result;
use clap::Parser;
use drills::cli::parse_or_usage;
use drills::prompt::prompt_until;
use drills::pyramid::{MAX_HEIGHT, MIN_HEIGHT, rows};
use drills::{exit_codes, logging};

const USAGE: &str = "Usage: mario";

#[derive(Parser)]
#[command(name = "mario", version, about = "Print a right-aligned pyramid of hashes")]
struct Cli {}

fn main() {
    logging::init();
    let _cli: Cli = parse_or_usage(USAGE);
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::USAGE);
    }
}

fn run() -> Result<()> {
    let height: u32 = prompt_until("Height: ", |height: &u32| {
        (MIN_HEIGHT..=MAX_HEIGHT).contains(height)
    })?;
    for row in rows(height) {
        println!("{row}");
    }
    Ok(())
}
