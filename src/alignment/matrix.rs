//! LCS scoring matrix
//!
//! Cells are stored row-major in a single `Vec`, so a matrix of `rows ×
//! columns` is one allocation. A matrix with a zero dimension is the empty
//! matrix: zero rows, zero columns.

use crate::errors::{Result, TextLabError};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Grid of LCS lengths indexed by `(row, column)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LcsMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<usize>,
}

impl LcsMatrix {
    /// An all-zero matrix; empty if either dimension is zero
    pub fn zeros(rows: usize, columns: usize) -> Self {
        if rows == 0 || columns == 0 {
            return Self::default();
        }
        Self {
            rows,
            columns,
            cells: vec![0; rows * columns],
        }
    }

    /// Build a matrix from nested rows, e.g. one received from a caller.
    ///
    /// Fails when rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != columns) {
            return Err(TextLabError::matrix_mismatch("rows have different lengths"));
        }
        if columns == 0 {
            return Ok(Self::default());
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell value, `None` outside the grid
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// The bottom-right cell: LCS length of the full sequences
    pub fn last(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Nested-row copy of the matrix
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.cells
            .chunks(self.columns.max(1))
            .map(<[usize]>::to_vec)
            .collect()
    }

    fn set(&mut self, row: usize, column: usize, value: usize) {
        self.cells[row * self.columns + column] = value;
    }
}

impl Index<(usize, usize)> for LcsMatrix {
    type Output = usize;

    fn index(&self, (row, column): (usize, usize)) -> &usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) outside {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.cells[row * self.columns + column]
    }
}

/// An all-zero `rows × columns` matrix; empty for a zero dimension
pub fn create_zero_matrix(rows: usize, columns: usize) -> LcsMatrix {
    LcsMatrix::zeros(rows, columns)
}

/// Fill the LCS matrix of two sentences.
///
/// A match only extends the diagonal when both tokens sit at the same
/// position (`i == j`); every other cell takes the larger of its upper and
/// left neighbour. Cells outside the grid read as 0. The scores of
/// [`super::scoring`] are calibrated against this positional recurrence, so
/// it is not interchangeable with the unconstrained LCS.
pub fn fill_lcs_matrix<T: PartialEq>(first: &[T], second: &[T]) -> LcsMatrix {
    let mut matrix = LcsMatrix::zeros(first.len(), second.len());
    if matrix.is_empty() {
        return matrix;
    }

    for (i, a) in first.iter().enumerate() {
        for (j, b) in second.iter().enumerate() {
            let value = if a == b && i == j {
                if i > 0 {
                    matrix[(i - 1, j - 1)] + 1
                } else {
                    1
                }
            } else {
                let up = if i > 0 { matrix[(i - 1, j)] } else { 0 };
                let left = if j > 0 { matrix[(i, j - 1)] } else { 0 };
                up.max(left)
            };
            matrix.set(i, j, value);
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_zero_matrix() {
        let matrix = create_zero_matrix(2, 3);
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.columns(), 3);
        assert_eq!(matrix.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(create_zero_matrix(0, 3).is_empty());
        assert!(create_zero_matrix(3, 0).is_empty());
        assert_eq!(create_zero_matrix(0, 3), LcsMatrix::default());
        assert!(create_zero_matrix(0, 0).to_rows().is_empty());
    }

    #[test]
    fn test_from_rows() {
        let matrix = LcsMatrix::from_rows(vec![vec![1, 1], vec![1, 2]]).unwrap();
        assert_eq!(matrix[(1, 1)], 2);
        assert_eq!(matrix.row(0), Some(&[1, 1][..]));
        assert_eq!(matrix.get(2, 0), None);

        assert!(LcsMatrix::from_rows(vec![vec![1, 1], vec![1]]).is_err());
        assert!(LcsMatrix::from_rows(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_fill_identical_sentences() {
        let sentence = ["i", "have", "a", "cat"];
        let matrix = fill_lcs_matrix(&sentence, &sentence);
        assert_eq!(
            matrix.to_rows(),
            vec![
                vec![1, 1, 1, 1],
                vec![1, 2, 2, 2],
                vec![1, 2, 3, 3],
                vec![1, 2, 3, 4],
            ]
        );
        assert_eq!(matrix.last(), Some(4));
    }

    #[test]
    fn test_fill_counts_only_positional_matches() {
        // "a" and "b" are common to both, but never at the same position.
        let matrix = fill_lcs_matrix(&["a", "b"], &["b", "a"]);
        assert_eq!(matrix.to_rows(), vec![vec![0, 0], vec![0, 0]]);

        let matrix = fill_lcs_matrix(&["the", "cat", "is", "happy"], &["the", "dog", "is", "happy"]);
        assert_eq!(matrix.last(), Some(3));
    }

    #[test]
    fn test_fill_different_lengths() {
        let matrix = fill_lcs_matrix(&["a", "b", "c"], &["a", "x"]);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns(), 2);
        assert_eq!(matrix.to_rows(), vec![vec![1, 1], vec![1, 1], vec![1, 1]]);
    }

    #[test]
    fn test_fill_empty_input() {
        assert!(fill_lcs_matrix::<&str>(&[], &["a"]).is_empty());
        assert!(fill_lcs_matrix(&["a"], &[]).is_empty());
    }
}
