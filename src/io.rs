//! Puzzle input readers.

use anyhow::{Context, Result};
use std::path::Path;

/// Reads a whole input file without touching whitespace.
///
/// Column-aligned inputs depend on trailing spaces, so this is what the
/// runner hands to `solve`.
pub fn read_input_raw(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads an input file and strips leading and trailing whitespace.
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    Ok(read_input_raw(path)?.trim().to_string())
}

/// Reads an input file as trimmed lines.
pub fn read_input_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_input(path)?.lines().map(str::to_string).collect())
}
