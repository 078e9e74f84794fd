//! Count the minimum number of US coins for an amount of change owed.

use anyhow::Result;
use clap::Parser;
use drills::change::{greedy_coins, to_cents};
use drills::cli::parse_or_usage;
use drills::prompt::prompt_until;
use drills::{exit_codes, logging};
use tracing::debug;

const USAGE: &str = "Usage: cash";

#[derive(Parser)]
#[command(
    name = "cash",
    version,
    about = "Minimum number of US coins for an amount of change"
)]
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
    let owed: f64 = prompt_until("Change owed: ", |amount: &f64| {
        amount.is_finite() && *amount >= 0.0
    })?;
    let cents = to_cents(owed);
    debug!(owed, cents, "normalized amount");
    println!("{}", greedy_coins(cents));
    Ok(())
}
