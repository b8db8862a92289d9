//! Property-based tests using proptest

use proptest::prelude::*;
use textlab::*;

/// Token sequences over a small vocabulary so that matches are frequent
fn sentence(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]", 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_tokens_are_lowercase_alphabetic(text in "\\PC{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {:?}", token);
        }
    }

    #[test]
    fn test_frequencies_sum_to_token_count(tokens in prop::collection::vec("[a-z]{1,6}", 0..60)) {
        let frequencies = calculate_frequencies(&tokens);
        prop_assert_eq!(frequencies.total(), tokens.len());
    }

    #[test]
    fn test_top_n_respects_limit_and_order(
        tokens in prop::collection::vec("[a-f]", 1..60),
        top_n in 0usize..10
    ) {
        let frequencies = calculate_frequencies(&tokens);
        let top = get_top_n_words(&frequencies, top_n);

        prop_assert!(top.len() <= top_n);
        let min_top = top.iter().map(|w| frequencies.get(w)).min().unwrap_or(usize::MAX);
        for (word, count) in frequencies.iter() {
            if !top.iter().any(|w| w == word) && !top.is_empty() {
                prop_assert!(count <= min_top);
            }
        }
    }

    #[test]
    fn test_interior_windows_have_full_length(
        prefix in prop::collection::vec("[a-c]", 5..10),
        suffix in prop::collection::vec("[a-c]", 5..10),
        left in 0usize..5,
        right in 1usize..5
    ) {
        let mut tokens = prefix.clone();
        tokens.push("target".to_string());
        tokens.extend(suffix);

        let concordance = get_concordance(&tokens, "target", left, right);
        prop_assert_eq!(concordance.len(), 1);
        prop_assert_eq!(concordance[0].len(), left + 1 + right);
        prop_assert_eq!(concordance[0][left].as_str(), "target");
    }

    #[test]
    fn test_matrix_is_monotone(first in sentence(12), second in sentence(12)) {
        let matrix = fill_lcs_matrix(&first, &second);
        for i in 0..matrix.rows() {
            for j in 0..matrix.columns() {
                if i > 0 {
                    prop_assert!(matrix[(i - 1, j)] <= matrix[(i, j)]);
                }
                if j > 0 {
                    prop_assert!(matrix[(i, j - 1)] <= matrix[(i, j)]);
                }
            }
        }
    }

    #[test]
    fn test_optimized_length_matches(
        first in sentence(15),
        second in sentence(15),
        threshold in 0.0f64..=1.0
    ) {
        prop_assert_eq!(
            find_lcs_length_optimized(&first, &second, threshold),
            find_lcs_length(&first, &second, threshold)
        );
    }

    #[test]
    fn test_threshold_gates_to_zero(first in sentence(10), second in sentence(10), threshold in 0.0f64..=1.0) {
        let raw = find_lcs_length(&first, &second, 0.0).unwrap();
        let gated = find_lcs_length(&first, &second, threshold).unwrap();
        if second.is_empty() || (raw as f64 / second.len() as f64) < threshold {
            prop_assert_eq!(gated, 0);
        } else {
            prop_assert_eq!(gated, raw);
        }
    }

    #[test]
    fn test_lcs_is_common_subsequence(first in sentence(10), second in sentence(10)) {
        let matrix = fill_lcs_matrix(&first, &second);
        let lcs = find_lcs(&first, &second, &matrix).unwrap();

        let is_subsequence = |sentence: &[String]| {
            let mut remaining = sentence.iter();
            lcs.iter().all(|token| remaining.any(|t| t == token))
        };
        prop_assert!(is_subsequence(&first));
        prop_assert!(is_subsequence(&second));
    }

    #[test]
    fn test_text_score_in_unit_range(
        original in prop::collection::vec(sentence(8), 1..6),
        suspicious in prop::collection::vec(sentence(8), 1..6),
        threshold in 0.0f64..=1.0
    ) {
        let score = calculate_text_plagiarism_score(&original, &suspicious, threshold).unwrap();
        prop_assert!((0.0..=1.0).contains(&score));

        let stats = accumulate_diff_stats(&original, &suspicious, threshold).unwrap();
        prop_assert_eq!(stats.sentence_plagiarism.len(), suspicious.len());
        prop_assert!((stats.text_plagiarism - score).abs() < 1e-12);

        // Unmarked tokens are exactly the counted LCS tokens.
        for (idx, sentence) in suspicious.iter().enumerate() {
            let marked: usize = stats.difference_indexes[idx]
                .suspicious
                .iter()
                .map(|(start, end)| end - start)
                .sum();
            prop_assert_eq!(sentence.len() - marked, stats.sentence_lcs_length[idx]);
        }
    }
}
