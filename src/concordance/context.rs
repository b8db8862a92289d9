//! Context windows around word occurrences
//!
//! Windows borrow from the token sequence they were cut from.
//!
//! Clipping at the sequence edges is decided once per call, not per window:
//!
//! - if the right context of the *last* occurrence runs past the end, the
//!   right context grows to the whole sequence length for every window;
//! - if the left context of the *first* occurrence runs past the start, every
//!   window starts at index 0.
//!
//! Both rules are kept as observable behavior of [`get_concordance`].

use std::collections::BTreeMap;

/// Cut a window around every occurrence of `word`.
///
/// Returns no windows when `word` is empty, both context sizes are zero, or
/// the word does not occur.
pub fn get_concordance<'a, S: AsRef<str>>(
    tokens: &'a [S],
    word: &str,
    left_context_size: usize,
    right_context_size: usize,
) -> Vec<&'a [S]> {
    if word.is_empty() || (left_context_size == 0 && right_context_size == 0) {
        return Vec::new();
    }

    let indexes: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.as_ref() == word)
        .map(|(idx, _)| idx)
        .collect();

    let (Some(&first), Some(&last)) = (indexes.first(), indexes.last()) else {
        tracing::debug!(word, "word not found, empty concordance");
        return Vec::new();
    };

    let len = tokens.len();
    let right = if last.saturating_add(right_context_size) > len {
        len
    } else {
        right_context_size
    };
    let from_start = first < left_context_size;

    indexes
        .into_iter()
        .map(|idx| {
            let start = if from_start { 0 } else { idx - left_context_size };
            let end = (idx + 1 + right).min(len);
            &tokens[start..end]
        })
        .collect()
}

/// The outermost context words of every window.
///
/// With no left context each entry is `[last]`, with no right context it is
/// `[first]`, otherwise `[first, last]`.
pub fn get_adjacent_words<'a, S: AsRef<str>>(
    tokens: &'a [S],
    word: &str,
    left_n: usize,
    right_n: usize,
) -> Vec<Vec<&'a str>> {
    get_concordance(tokens, word, left_n, right_n)
        .into_iter()
        .filter_map(|window| {
            let first = window.first()?.as_ref();
            let last = window.last()?.as_ref();
            Some(if left_n == 0 {
                vec![last]
            } else if right_n == 0 {
                vec![first]
            } else {
                vec![first, last]
            })
        })
        .collect()
}

/// Sort key of a window: its first token, or the token right after the first
/// occurrence of `word`. `None` (no such token) sorts before every word.
fn sort_key<'a, S: AsRef<str>>(window: &'a [S], word: &str, left_sort: bool) -> Option<&'a str> {
    if left_sort {
        return window.first().map(|token| token.as_ref());
    }
    let pos = window.iter().position(|token| token.as_ref() == word)?;
    window.get(pos + 1).map(|token| token.as_ref())
}

/// Concordance ordered by left or right context.
///
/// Windows are keyed by [`sort_key`] and read back in key order. Windows
/// sharing a key collapse into the last one; use [`sort_concordance_stable`]
/// to keep all of them.
pub fn sort_concordance<'a, S: AsRef<str>>(
    tokens: &'a [S],
    word: &str,
    left_context_size: usize,
    right_context_size: usize,
    left_sort: bool,
) -> Vec<&'a [S]> {
    let concordance = get_concordance(tokens, word, left_context_size, right_context_size);
    let total = concordance.len();

    let mut keyed: BTreeMap<Option<&'a str>, &'a [S]> = BTreeMap::new();
    for window in concordance {
        keyed.insert(sort_key(window, word, left_sort), window);
    }

    if keyed.len() < total {
        tracing::debug!(
            word,
            dropped = total - keyed.len(),
            "windows with duplicate sort keys collapsed"
        );
    }
    keyed.into_values().collect()
}

/// Like [`sort_concordance`] but keeps windows with equal keys, in
/// occurrence order.
pub fn sort_concordance_stable<'a, S: AsRef<str>>(
    tokens: &'a [S],
    word: &str,
    left_context_size: usize,
    right_context_size: usize,
    left_sort: bool,
) -> Vec<&'a [S]> {
    let mut concordance = get_concordance(tokens, word, left_context_size, right_context_size);
    concordance.sort_by_key(|window| sort_key(*window, word, left_sort));
    concordance
}
