//! Right-aligned hash pyramid rows.

/// Smallest accepted pyramid height.
pub const MIN_HEIGHT: u32 = 1;
/// Largest accepted pyramid height.
pub const MAX_HEIGHT: u32 = 8;

/// Render the pyramid as one string per row.
///
/// Row `r` (1-based) is `height - r` spaces followed by `r` hashes, so every
/// row is exactly `height` characters wide.
pub fn rows(height: u32) -> Vec<String> {
    (1..=height)
        .map(|row| {
            let mut line = " ".repeat((height - row) as usize);
            line.push_str(&"#".repeat(row as usize));
            line
        })
        .collect()
}
