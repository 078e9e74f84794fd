//! Classic introductory programming drills as small console programs.
//!
//! Each binary under `src/bin/` is one self-contained exercise: greedy coin
//! counting, pyramid printing, the Caesar and Vigenère rotation ciphers,
//! selection sort, and Collatz sequence lengths. The crate keeps a strict
//! split:
//!
//! - Pure, deterministic logic ([`change`], [`pyramid`], [`cipher`],
//!   [`sort`], [`collatz`]): no I/O, fully testable in isolation.
//! - Console interaction ([`prompt`], [`cli`]): isolated so the binaries
//!   stay thin and tests can drive prompts with in-memory buffers.

pub mod change;
pub mod cipher;
pub mod cli;
pub mod collatz;
pub mod exit_codes;
pub mod logging;
pub mod prompt;
pub mod pyramid;
pub mod sort;
