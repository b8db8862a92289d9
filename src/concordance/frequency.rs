//! Stopword removal, frequency counting and top-N selection

use crate::nlp::stopwords::StopwordFilter;
use crate::types::FrequencyTable;

/// Drop every token the filter marks as a stopword.
///
/// Order and duplicates of the remaining tokens are preserved.
pub fn remove_stop_words<S: AsRef<str>>(tokens: &[S], stop_words: &StopwordFilter) -> Vec<String> {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| !stop_words.is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Count the occurrences of each distinct token
pub fn calculate_frequencies<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokens {
        table.increment(token.as_ref());
    }
    table
}

/// The `top_n` most frequent tokens, most frequent first.
///
/// Ties are broken by ascending token; see [`FrequencyTable::top_n`].
pub fn get_top_n_words(freq_table: &FrequencyTable, top_n: usize) -> Vec<String> {
    freq_table.top_n(top_n)
}
