//! Shared argument handling for the drill binaries.
//!
//! Every drill has a fixed invocation surface: a malformed or missing
//! argument prints a one-line usage string on stdout and exits with
//! [`exit_codes::USAGE`] instead of clap's default stderr rendering.

use clap::Parser;
use clap::error::ErrorKind;

use crate::exit_codes;

/// Parse the command line or exit with the drill's usage line.
///
/// `--help` and `--version` still render through clap.
pub fn parse_or_usage<T: Parser>(usage: &str) -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            tracing::debug!(%err, "rejecting command line");
            println!("{usage}");
            std::process::exit(exit_codes::USAGE);
        }
    }
}
