//! Sentence differences and the plagiarism report
//!
//! A difference is a maximal run of tokens that the LCS does not cover,
//! stored as a half-open `(start, end)` token span.

use super::lcs::find_lcs_length;
use super::scoring::{aligned_pairs, calculate_plagiarism_score, check_texts};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Uncovered spans of one sentence pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDiff {
    pub original: Vec<(usize, usize)>,
    pub suspicious: Vec<(usize, usize)>,
}

/// Per-sentence statistics of a text comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Mean of `sentence_plagiarism`
    pub text_plagiarism: f64,
    pub sentence_plagiarism: Vec<f64>,
    pub sentence_lcs_length: Vec<usize>,
    pub difference_indexes: Vec<SentenceDiff>,
}

impl DiffStats {
    /// Serialize the statistics to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Maximal runs of `false` in `covered`
fn uncovered_runs(covered: &[bool]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut run_start = None;

    for (idx, &is_covered) in covered.iter().enumerate() {
        if is_covered {
            if let Some(start) = run_start.take() {
                spans.push((start, idx));
            }
        } else if run_start.is_none() {
            run_start = Some(idx);
        }
    }
    if let Some(start) = run_start {
        spans.push((start, covered.len()));
    }

    spans
}

/// Runs of `sentence` not consumed when matching `lcs` greedily, in order
fn uncovered_spans<T: PartialEq>(sentence: &[T], lcs: &[T]) -> Vec<(usize, usize)> {
    let mut next = 0;
    let covered: Vec<bool> = sentence
        .iter()
        .map(|token| {
            let consumed = lcs.get(next) == Some(token);
            if consumed {
                next += 1;
            }
            consumed
        })
        .collect();

    uncovered_runs(&covered)
}

/// Difference spans matching what the sentence score counts: the tokens
/// equal at the same position, or nothing when the counted length is 0.
fn counted_diff<T: PartialEq>(
    original: &[T],
    suspicious: &[T],
    lcs_length: usize,
) -> SentenceDiff {
    let covered = |sentence: &[T], other: &[T]| -> Vec<bool> {
        sentence
            .iter()
            .enumerate()
            .map(|(idx, token)| lcs_length > 0 && other.get(idx) == Some(token))
            .collect()
    };

    SentenceDiff {
        original: uncovered_runs(&covered(original, suspicious)),
        suspicious: uncovered_runs(&covered(suspicious, original)),
    }
}

/// Spans of both sentences that are not part of their LCS
pub fn find_diff_in_sentence<T: PartialEq>(
    original_sentence: &[T],
    suspicious_sentence: &[T],
    lcs: &[T],
) -> SentenceDiff {
    SentenceDiff {
        original: uncovered_spans(original_sentence, lcs),
        suspicious: uncovered_spans(suspicious_sentence, lcs),
    }
}

/// LCS length, score and differences of every sentence pair.
///
/// Sentences are paired exactly as in
/// [`super::scoring::calculate_text_plagiarism_score`], and
/// `text_plagiarism` equals its result. The difference spans leave exactly
/// `sentence_lcs_length` tokens of each sentence unmarked, so a pair gated
/// to 0 is reported as entirely different.
pub fn accumulate_diff_stats<A, B, T>(
    original_text: &[A],
    suspicious_text: &[B],
    plagiarism_threshold: f64,
) -> Result<DiffStats>
where
    A: AsRef<[T]>,
    B: AsRef<[T]>,
    T: PartialEq,
{
    trace_stage!("diff_stats");
    check_texts(original_text, suspicious_text, plagiarism_threshold)?;

    let mut stats = DiffStats::default();
    for (original, suspicious) in aligned_pairs(original_text, suspicious_text) {
        let lcs_length = find_lcs_length(original, suspicious, plagiarism_threshold)?;
        let score = calculate_plagiarism_score(lcs_length, suspicious)?;

        stats.sentence_lcs_length.push(lcs_length);
        stats.sentence_plagiarism.push(score);
        stats
            .difference_indexes
            .push(counted_diff(original, suspicious, lcs_length));
    }

    stats.text_plagiarism =
        stats.sentence_plagiarism.iter().sum::<f64>() / suspicious_text.len() as f64;
    Ok(stats)
}

/// Join tokens with spaces, fencing every span with `|`
fn mark_spans<T: AsRef<str>>(sentence: &[T], spans: &[(usize, usize)]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(sentence.len() + spans.len() * 2);
    for (idx, token) in sentence.iter().enumerate() {
        if spans.iter().any(|&(start, _)| start == idx) {
            parts.push("|");
        }
        parts.push(token.as_ref());
        if spans.iter().any(|&(_, end)| end == idx + 1) {
            parts.push("|");
        }
    }
    parts.join(" ")
}

/// Render a line-by-line comparison of the two texts.
///
/// Each pair is printed as
///
/// ```text
/// - the big cat is | sleeping |
/// + the big cat is | awake |
///
/// lcs = 4, plagiarism = 80.0%
/// ```
///
/// followed by a blank line, and the report ends with the average text
/// plagiarism.
pub fn create_diff_report<A, B, T>(
    original_text: &[A],
    suspicious_text: &[B],
    accumulated_diff_stats: &DiffStats,
) -> String
where
    A: AsRef<[T]>,
    B: AsRef<[T]>,
    T: AsRef<str>,
{
    let mut report = String::new();
    let no_diff = SentenceDiff::default();

    for (idx, (original, suspicious)) in aligned_pairs(original_text, suspicious_text).enumerate() {
        let diff = accumulated_diff_stats
            .difference_indexes
            .get(idx)
            .unwrap_or(&no_diff);
        let lcs_length = accumulated_diff_stats
            .sentence_lcs_length
            .get(idx)
            .copied()
            .unwrap_or(0);
        let score = accumulated_diff_stats
            .sentence_plagiarism
            .get(idx)
            .copied()
            .unwrap_or(0.0);

        report.push_str(&format!(
            "- {}\n+ {}\n\nlcs = {}, plagiarism = {:.1}%\n\n",
            mark_spans(original, &diff.original),
            mark_spans(suspicious, &diff.suspicious),
            lcs_length,
            score * 100.0
        ));
    }

    report.push_str(&format!(
        "Text average plagiarism (words): {:.1}%",
        accumulated_diff_stats.text_plagiarism * 100.0
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_diff_in_sentence() {
        let original = ["the", "big", "cat", "is", "sleeping"];
        let suspicious = ["the", "cat", "is", "big"];
        let lcs = ["the", "cat", "is"];

        let diff = find_diff_in_sentence(&original, &suspicious, &lcs);
        assert_eq!(diff.original, vec![(1, 2), (4, 5)]);
        assert_eq!(diff.suspicious, vec![(3, 4)]);
    }

    #[test]
    fn test_find_diff_identical() {
        let sentence = ["a", "b", "c"];
        let diff = find_diff_in_sentence(&sentence, &sentence, &sentence);
        assert_eq!(diff, SentenceDiff::default());
    }

    #[test]
    fn test_find_diff_nothing_common() {
        let diff = find_diff_in_sentence(&["a", "b"], &["c"], &[]);
        assert_eq!(diff.original, vec![(0, 2)]);
        assert_eq!(diff.suspicious, vec![(0, 1)]);
    }

    #[test]
    fn test_accumulate_diff_stats() {
        let original = vec![vec!["i", "have", "a", "cat"], vec!["his", "name", "is", "bruno"]];
        let suspicious = vec![vec!["i", "have", "a", "dog"], vec!["her", "name", "is", "rex"]];

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        assert_eq!(stats.sentence_lcs_length, vec![3, 2]);
        assert_eq!(stats.sentence_plagiarism, vec![0.75, 0.5]);
        assert_eq!(stats.text_plagiarism, 0.625);
        assert_eq!(stats.difference_indexes[0].original, vec![(3, 4)]);
        assert_eq!(stats.difference_indexes[1].suspicious, vec![(0, 1), (3, 4)]);
    }

    #[test]
    fn test_accumulate_diff_stats_pads_original() {
        let original = vec![vec!["a", "b"]];
        let suspicious = vec![vec!["a", "b"], vec!["c"]];

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        assert_eq!(stats.sentence_lcs_length, vec![2, 0]);
        assert_eq!(stats.text_plagiarism, 0.5);
        assert_eq!(stats.difference_indexes[1].suspicious, vec![(0, 1)]);
        assert!(stats.difference_indexes[1].original.is_empty());
    }

    #[test]
    fn test_accumulate_diff_stats_unmatched_positions() {
        let original = vec![vec!["a", "b"]];
        let suspicious = vec![vec!["b", "a"]];

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        assert_eq!(stats.sentence_lcs_length, vec![0]);
        assert_eq!(stats.difference_indexes[0].original, vec![(0, 2)]);
        assert_eq!(stats.difference_indexes[0].suspicious, vec![(0, 2)]);

        let report = create_diff_report(&original, &suspicious, &stats);
        assert!(report.starts_with("- | a b |\n+ | b a |\n\nlcs = 0, plagiarism = 0.0%"));
    }

    #[test]
    fn test_accumulate_diff_stats_gated_pair() {
        let original = vec![vec!["a", "x", "y", "z"]];
        let suspicious = vec![vec!["a", "p", "q", "r"]];

        let gated = accumulate_diff_stats(&original, &suspicious, 0.5).unwrap();
        assert_eq!(gated.sentence_lcs_length, vec![0]);
        assert_eq!(gated.difference_indexes[0].original, vec![(0, 4)]);
        assert_eq!(gated.difference_indexes[0].suspicious, vec![(0, 4)]);

        let counted = accumulate_diff_stats(&original, &suspicious, 0.2).unwrap();
        assert_eq!(counted.sentence_lcs_length, vec![1]);
        assert_eq!(counted.difference_indexes[0].original, vec![(1, 4)]);
        assert_eq!(counted.difference_indexes[0].suspicious, vec![(1, 4)]);
    }

    #[test]
    fn test_accumulate_diff_stats_marks_only_positional_matches() {
        let original = vec![vec!["a", "a", "b"]];
        let suspicious = vec![vec!["x", "a", "c"]];

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        assert_eq!(stats.sentence_lcs_length, vec![1]);
        assert_eq!(stats.difference_indexes[0].original, vec![(0, 1), (2, 3)]);
        assert_eq!(stats.difference_indexes[0].suspicious, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_accumulate_diff_stats_invalid() {
        let text = vec![vec!["a"]];
        let empty: Vec<Vec<&str>> = Vec::new();
        assert!(accumulate_diff_stats(&empty, &text, 0.3).is_err());
        assert!(accumulate_diff_stats(&text, &text, 3.0).is_err());
    }

    #[test]
    fn test_create_diff_report() {
        let original = vec![vec!["the", "big", "cat", "is", "sleeping"]];
        let suspicious = vec![vec!["the", "big", "cat", "is", "awake"]];

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        let report = create_diff_report(&original, &suspicious, &stats);

        assert_eq!(
            report,
            "- the big cat is | sleeping |\n\
             + the big cat is | awake |\n\
             \n\
             lcs = 4, plagiarism = 80.0%\n\
             \n\
             Text average plagiarism (words): 80.0%"
        );
    }

    #[test]
    fn test_stats_to_json() {
        let stats = DiffStats {
            text_plagiarism: 1.0,
            sentence_plagiarism: vec![1.0],
            sentence_lcs_length: vec![2],
            difference_indexes: vec![SentenceDiff::default()],
        };
        let json = stats.to_json().unwrap();
        assert!(json.contains("\"text_plagiarism\": 1.0"));
        assert!(json.contains("\"sentence_lcs_length\""));
    }
}
