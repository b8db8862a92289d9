//! Flat-file helpers
//!
//! The only operations in the crate that touch the environment. Failures
//! here are returned as [`TextLabError::Io`] and are never turned into an
//! empty result.

use crate::errors::{Result, TextLabError};
use std::fs;
use std::path::Path;

/// Path `write_to_file` callers use when none is configured
pub const DEFAULT_REPORT_PATH: &str = "report.txt";

/// Read the whole file into a string
pub fn read_from_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| TextLabError::io(path, &err))
}

/// Write concordance entries, one per line, tokens separated by single spaces.
///
/// No trailing newline is written after the last entry.
pub fn write_to_file<E, S>(entries: &[E], path: impl AsRef<Path>) -> Result<()>
where
    E: AsRef<[S]>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let content = format_entries(entries);
    fs::write(path, content).map_err(|err| TextLabError::io(path, &err))?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "wrote report");
    Ok(())
}

/// Render entries the way `write_to_file` stores them
pub fn format_entries<E, S>(entries: &[E]) -> String
where
    E: AsRef<[S]>,
    S: AsRef<str>,
{
    entries
        .iter()
        .map(|entry| {
            entry
                .as_ref()
                .iter()
                .map(|token| token.as_ref())
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect::<Vec<String>>()
        .join("\n")
}
