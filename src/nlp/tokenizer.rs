//! Word tokenization
//!
//! Tokens are lowercase ASCII words. Everything that is not a letter or
//! whitespace is removed before splitting, so punctuation glued between two
//! words (`"don't"`, `"well-known"`) joins them into a single token.

use crate::errors::Result;
use crate::io::read_from_file;
use crate::types::StringPool;
use std::path::Path;

/// Check whether a (lowercased) character survives normalization
#[inline]
fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_whitespace()
}

/// Split text into lowercase alphabetic tokens.
///
/// ```
/// use textlab::nlp::tokenizer::tokenize;
///
/// assert_eq!(
///     tokenize("The weather is sunny, the man is happy."),
///     vec!["the", "weather", "is", "sunny", "the", "man", "is", "happy"]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text.to_lowercase().chars().filter(|&c| is_kept(c)).collect();
    normalized.split_whitespace().map(str::to_string).collect()
}

/// Split text into lines and tokenize each non-blank line as one sentence.
///
/// A line made only of punctuation is not blank, so it still produces an
/// (empty) sentence and keeps sentence positions aligned with the source.
pub fn tokenize_by_lines(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(tokenize)
        .collect()
}

/// Read a file, tokenize it and map every token to an interned id.
///
/// The returned pool resolves ids back to tokens. Numeric sequences compare
/// faster than strings in the alignment engine, which accepts any
/// `PartialEq` token type.
pub fn tokenize_big_file(path: impl AsRef<Path>) -> Result<(Vec<u32>, StringPool)> {
    let text = read_from_file(path)?;
    let tokens = tokenize(&text);

    let mut pool = StringPool::with_capacity(tokens.len() / 4);
    let ids = tokens.iter().map(|token| pool.intern(token)).collect();

    tracing::debug!(tokens = tokens.len(), unique = pool.len(), "tokenized file");
    Ok((ids, pool))
}
