//! Sentence alignment and plagiarism scoring
//!
//! Sentences are compared position by position through an LCS matrix; the
//! LCS length relative to the suspicious sentence is its plagiarism score.
//! All functions are generic over the token type, so interned ids from
//! [`crate::nlp::tokenizer::tokenize_big_file`] work as well as strings.

/// Enter a tracing span for a whole-text stage
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

pub mod diff;
pub mod lcs;
pub mod matrix;
pub mod scoring;

pub use diff::{
    accumulate_diff_stats, create_diff_report, find_diff_in_sentence, DiffStats, SentenceDiff,
};
pub use lcs::{find_lcs, find_lcs_length, find_lcs_length_optimized};
pub use matrix::{create_zero_matrix, fill_lcs_matrix, LcsMatrix};
pub use scoring::{calculate_plagiarism_score, calculate_text_plagiarism_score};
