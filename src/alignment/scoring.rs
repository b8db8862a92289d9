//! Sentence and text plagiarism scores

use super::lcs::{check_threshold, find_lcs_length};
use crate::errors::{Result, TextLabError};

/// Share of the suspicious sentence covered by the LCS, in `[0, 1]`.
///
/// An empty suspicious sentence scores 0. An LCS longer than the sentence
/// cannot come from it and is rejected.
pub fn calculate_plagiarism_score<T>(lcs_length: usize, suspicious_sentence: &[T]) -> Result<f64> {
    if suspicious_sentence.is_empty() {
        return Ok(0.0);
    }
    if lcs_length > suspicious_sentence.len() {
        tracing::debug!(
            lcs_length,
            len = suspicious_sentence.len(),
            "LCS length exceeds sentence length"
        );
        return Err(TextLabError::length_exceeded(
            lcs_length,
            suspicious_sentence.len(),
        ));
    }
    Ok(lcs_length as f64 / suspicious_sentence.len() as f64)
}

/// Pair every suspicious sentence with the original sentence at the same
/// position. Original sentences past the end of the suspicious text are
/// ignored; missing ones are empty.
pub(crate) fn aligned_pairs<'a, A, B, T>(
    original: &'a [A],
    suspicious: &'a [B],
) -> impl Iterator<Item = (&'a [T], &'a [T])> + 'a
where
    A: AsRef<[T]> + 'a,
    B: AsRef<[T]> + 'a,
    T: 'a,
{
    suspicious.iter().enumerate().map(move |(idx, sentence)| {
        let original_sentence: &'a [T] = match original.get(idx) {
            Some(sentence) => sentence.as_ref(),
            None => &[],
        };
        (original_sentence, sentence.as_ref())
    })
}

/// Reject texts without sentences and thresholds outside `[0, 1]`
pub(crate) fn check_texts<A, B>(original: &[A], suspicious: &[B], threshold: f64) -> Result<()> {
    if original.is_empty() {
        return Err(TextLabError::empty_input("original text has no sentences"));
    }
    if suspicious.is_empty() {
        return Err(TextLabError::empty_input("suspicious text has no sentences"));
    }
    check_threshold(threshold)
}

/// Average sentence plagiarism score of a suspicious text against the
/// original, sentence by sentence.
///
/// The average is taken over the suspicious sentences; see
/// [`aligned_pairs`] for how texts of different lengths are paired.
pub fn calculate_text_plagiarism_score<A, B, T>(
    original_text: &[A],
    suspicious_text: &[B],
    plagiarism_threshold: f64,
) -> Result<f64>
where
    A: AsRef<[T]>,
    B: AsRef<[T]>,
    T: PartialEq,
{
    trace_stage!("text_plagiarism");
    check_texts(original_text, suspicious_text, plagiarism_threshold)?;

    if original_text.len() != suspicious_text.len() {
        tracing::debug!(
            original = original_text.len(),
            suspicious = suspicious_text.len(),
            "sentence counts differ, aligning to the suspicious text"
        );
    }

    let mut total = 0.0;
    for (original, suspicious) in aligned_pairs(original_text, suspicious_text) {
        let lcs_length = find_lcs_length(original, suspicious, plagiarism_threshold)?;
        total += calculate_plagiarism_score(lcs_length, suspicious)?;
    }
    Ok(total / suspicious_text.len() as f64)
}
