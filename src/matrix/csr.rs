//! Compressed Sparse Row (CSR) matrix format implementation
//!
//! The cost model only reads this type: row-major iteration, per-row nonzero
//! counts, and the raw arrays for blocking. Construction is validating; a
//! malformed matrix is rejected here, not inside the model.

use num_traits::Num;
use std::fmt;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// Storage follows the usual three-array scheme:
/// - `row_ptr`: size `n_rows + 1`, non-decreasing, `row_ptr[n_rows] == nnz`
/// - `col_idx`: column index of each nonzero, size nnz
/// - `values`: the nonzero values, size nnz
#[derive(Clone)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers; `row_ptr[i]..row_ptr[i + 1]` spans row i
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the arrays are inconsistent: `row_ptr.len()` must be
    /// `n_rows + 1` with non-decreasing entries ending at `col_idx.len()`,
    /// `col_idx` and `values` must have equal lengths, and every column
    /// index must be below `n_cols`.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        for w in row_ptr.windows(2) {
            assert!(w[0] <= w[1], "row_ptr must be non-decreasing");
        }
        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self { n_rows, n_cols, row_ptr, col_idx, values }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of non-zeros in row `i` (the row-length delta)
    pub fn row_nnz(&self, i: usize) -> usize {
        assert!(i < self.n_rows, "Row index out of bounds");
        self.row_ptr[i + 1] - self.row_ptr[i]
    }

    /// Returns an iterator over `(col, &value)` pairs of row `i`
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let row_ptr = (0..=n).collect();
        let col_idx = (0..n).collect();
        let values = vec![T::one(); n];

        Self { n_rows: n, n_cols: n, row_ptr, col_idx, values }
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let sample_rows = 5.min(self.n_rows);
        for i in 0..sample_rows {
            write!(f, "  row {}: ", i)?;
            if self.row_nnz(i) == 0 {
                writeln!(f, "(empty)")?;
            } else {
                for (j, v) in self.row_iter(i).take(5) {
                    write!(f, "({}, {:?}) ", j, v)?;
                }
                if self.row_nnz(i) > 5 {
                    write!(f, "... ({} more)", self.row_nnz(i) - 5)?;
                }
                writeln!(f)?;
            }
        }
        if self.n_rows > sample_rows {
            writeln!(f, "  ... ({} more rows)", self.n_rows - sample_rows)?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let matrix = SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        assert_eq!(matrix.n_rows, 3);
        assert_eq!(matrix.n_cols, 3);
        assert_eq!(matrix.nnz(), 5);
    }

    #[test]
    fn test_row_nnz() {
        let matrix = SparseMatrixCSR::new(
            4, 3,
            vec![0, 2, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );

        assert_eq!(matrix.row_nnz(0), 2);
        assert_eq!(matrix.row_nnz(1), 0);
        assert_eq!(matrix.row_nnz(2), 1);
        assert_eq!(matrix.row_nnz(3), 2);
    }

    #[test]
    fn test_row_iter() {
        let matrix = SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        let row0: Vec<_> = matrix.row_iter(0).collect();
        assert_eq!(row0, vec![(0, &1), (1, &2)]);

        let row2: Vec<_> = matrix.row_iter(2).collect();
        assert_eq!(row2, vec![(0, &4), (2, &5)]);
    }

    #[test]
    fn test_zeros_and_identity() {
        let z = SparseMatrixCSR::<f64>::zeros(4, 2);
        assert_eq!(z.nnz(), 0);
        assert_eq!(z.row_ptr, vec![0, 0, 0, 0, 0]);

        let id = SparseMatrixCSR::<i32>::identity(3);
        assert_eq!(id.nnz(), 3);
        assert_eq!(id.col_idx, vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "row_ptr must be non-decreasing")]
    fn test_decreasing_row_ptr() {
        SparseMatrixCSR::new(
            2, 3,
            vec![0, 3, 2],
            vec![0, 1, 2],
            vec![1, 2, 3],
        );
    }

    #[test]
    #[should_panic(expected = "row_ptr.len() must be n_rows + 1")]
    fn test_invalid_row_ptr() {
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3], // Missing last element
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );
    }
}
