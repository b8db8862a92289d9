//! # textlab
//!
//! Two small text-analysis engines sharing one tokenizer:
//!
//! - **Concordance**: word frequencies, top-N words and context windows
//!   around the occurrences of a word, optionally sorted by a neighbour.
//! - **Alignment**: sentence-by-sentence plagiarism scoring of a suspicious
//!   text against an original, based on an LCS matrix.
//!
//! ```
//! use textlab::{calculate_text_plagiarism_score, tokenize_by_lines};
//!
//! let original = tokenize_by_lines("I have a cat.\nHis name is Bruno.");
//! let suspicious = tokenize_by_lines("I have a dog.\nHer name is Rex.");
//! let score = calculate_text_plagiarism_score(&original, &suspicious, 0.3).unwrap();
//! assert_eq!(score, 0.625);
//! ```

pub mod alignment;
pub mod concordance;
pub mod errors;
pub mod io;
pub mod nlp;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextLabError};
pub use types::{
    ConcordanceConfig, FrequencyTable, PlagiarismConfig, StringPool, DEFAULT_PLAGIARISM_THRESHOLD,
};

// Re-export main functionality
pub use alignment::{
    accumulate_diff_stats, calculate_plagiarism_score, calculate_text_plagiarism_score,
    create_diff_report, create_zero_matrix, fill_lcs_matrix, find_diff_in_sentence, find_lcs,
    find_lcs_length, find_lcs_length_optimized, DiffStats, LcsMatrix, SentenceDiff,
};
pub use concordance::{
    calculate_frequencies, get_adjacent_words, get_concordance, get_top_n_words,
    remove_stop_words, sort_concordance, sort_concordance_stable,
};
pub use io::{read_from_file, write_to_file, DEFAULT_REPORT_PATH};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{tokenize, tokenize_big_file, tokenize_by_lines};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
