//! Concordance extraction
//!
//! Frequency statistics over a token sequence and context windows around
//! the occurrences of a word.

pub mod context;
pub mod frequency;

pub use context::{
    get_adjacent_words, get_concordance, sort_concordance, sort_concordance_stable,
};
pub use frequency::{calculate_frequencies, get_top_n_words, remove_stop_words};
