//! Selection-sort integers given on the command line.

use clap::Parser;
use drills::cli::parse_or_usage;
use drills::logging;
use drills::sort::selection_sort;
use tracing::debug;

const USAGE: &str = "Usage: selection n1 [n2 ...]";

#[derive(Parser)]
#[command(
    name = "selection",
    version,
    about = "Selection-sort integers given on the command line"
)]
struct Cli {
    /// Integers to sort.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() {
    logging::init();
    let mut cli: Cli = parse_or_usage(USAGE);
    debug!(count = cli.values.len(), "sorting");
    selection_sort(&mut cli.values);

    let mut line = String::new();
    for value in &cli.values {
        line.push_str(&value.to_string());
        line.push(' ');
    }
    println!("{line}");
}
