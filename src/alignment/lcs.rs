//! LCS length with threshold gate, and LCS reconstruction

use super::matrix::{fill_lcs_matrix, LcsMatrix};
use crate::errors::{Result, TextLabError};

/// Reject thresholds outside `[0, 1]` (NaN included)
pub(crate) fn check_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        tracing::debug!(threshold, "rejected plagiarism threshold");
        Err(TextLabError::invalid_threshold(threshold))
    }
}

/// Lengths whose share of the second sentence is below the threshold count as 0
fn gate(length: usize, second_len: usize, threshold: f64) -> usize {
    if (length as f64 / second_len as f64) < threshold {
        0
    } else {
        length
    }
}

/// LCS length of two sentences, or 0 when it covers less than `threshold`
/// of the second sentence.
///
/// Either sentence being empty gives `Ok(0)`. A threshold outside `[0, 1]`
/// is an error, checked before anything else.
pub fn find_lcs_length<T: PartialEq>(
    first: &[T],
    second: &[T],
    plagiarism_threshold: f64,
) -> Result<usize> {
    check_threshold(plagiarism_threshold)?;
    if first.is_empty() || second.is_empty() {
        return Ok(0);
    }

    let length = fill_lcs_matrix(first, second).last().unwrap_or(0);
    Ok(gate(length, second.len(), plagiarism_threshold))
}

/// Same result as [`find_lcs_length`] keeping only two matrix rows alive.
pub fn find_lcs_length_optimized<T: PartialEq>(
    first: &[T],
    second: &[T],
    plagiarism_threshold: f64,
) -> Result<usize> {
    check_threshold(plagiarism_threshold)?;
    if first.is_empty() || second.is_empty() {
        return Ok(0);
    }

    let mut previous = vec![0usize; second.len()];
    let mut current = vec![0usize; second.len()];

    for (i, a) in first.iter().enumerate() {
        for (j, b) in second.iter().enumerate() {
            current[j] = if a == b && i == j {
                if j > 0 {
                    previous[j - 1] + 1
                } else {
                    1
                }
            } else {
                let left = if j > 0 { current[j - 1] } else { 0 };
                previous[j].max(left)
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let length = previous.last().copied().unwrap_or(0);
    Ok(gate(length, second.len(), plagiarism_threshold))
}

/// Reconstruct one common subsequence by walking back through `lcs_matrix`.
///
/// The matrix must be exactly `fill_lcs_matrix(first, second)`; anything
/// else is rejected rather than trusted. Empty sentences give an empty
/// subsequence.
///
/// The walk starts at the bottom-right cell. Equal tokens are collected and
/// the walk moves diagonally; otherwise it moves towards the larger of the
/// upper and left neighbours, up on ties. On the top row it can only move
/// left, on the left column only up.
pub fn find_lcs<T: PartialEq + Clone>(
    first: &[T],
    second: &[T],
    lcs_matrix: &LcsMatrix,
) -> Result<Vec<T>> {
    let expected = fill_lcs_matrix(first, second);
    if lcs_matrix.rows() != expected.rows() || lcs_matrix.columns() != expected.columns() {
        return Err(TextLabError::matrix_mismatch(format!(
            "expected a {}x{} matrix, got {}x{}",
            expected.rows(),
            expected.columns(),
            lcs_matrix.rows(),
            lcs_matrix.columns()
        )));
    }
    if *lcs_matrix != expected {
        return Err(TextLabError::matrix_mismatch(
            "matrix values do not match the given sentences",
        ));
    }

    let mut lcs = Vec::new();
    let (mut row, mut column) = (first.len(), second.len());

    while row > 0 && column > 0 {
        let (i, j) = (row - 1, column - 1);
        if first[i] == second[j] {
            lcs.push(second[j].clone());
            row -= 1;
            column -= 1;
        } else if i == 0 {
            column -= 1;
        } else if j == 0 || lcs_matrix[(i - 1, j)] >= lcs_matrix[(i, j - 1)] {
            row -= 1;
        } else {
            column -= 1;
        }
    }

    lcs.reverse();
    Ok(lcs)
}
