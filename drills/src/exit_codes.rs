//! Stable exit codes for the drill binaries.

/// Program ran to completion.
pub const OK: i32 = 0;
/// Malformed or missing command-line arguments, or a runtime failure.
pub const USAGE: i32 = 1;
