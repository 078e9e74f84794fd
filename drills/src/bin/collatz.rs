//! Count the Collatz steps needed for an integer to reach 1.

use clap::Parser;
use drills::cli::parse_or_usage;
use drills::collatz::steps;
use drills::logging;

const USAGE: &str = "Usage: collatz n";

#[derive(Parser)]
#[command(
    name = "collatz",
    version,
    about = "Number of Collatz steps needed to reach 1"
)]
struct Cli {
    /// Starting value; must be at least 1.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    n: u64,
}

fn main() {
    logging::init();
    let cli: Cli = parse_or_usage(USAGE);
    println!("{}", steps(cli.n));
}
