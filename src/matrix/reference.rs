//! Reference SpMV implementation
//!
//! A plain software multiply used to cross-check the modeled accelerator's
//! data plumbing. The cost model only needs structural properties; this
//! provides the numeric baseline.

use ndarray::Array1;

use crate::error::ModelError;
use crate::matrix::SparseMatrixCSR;

/// Computes `y = A · x` row by row.
///
/// Returns `ModelError::DimensionMismatch` when the vector length does not
/// match the matrix column count.
pub fn reference_spmv(
    a: &SparseMatrixCSR<f64>,
    x: &Array1<f64>,
) -> Result<Array1<f64>, ModelError> {
    if x.len() != a.n_cols {
        return Err(ModelError::DimensionMismatch {
            expected: a.n_cols,
            actual: x.len(),
        });
    }

    let mut y = Array1::zeros(a.n_rows);
    for i in 0..a.n_rows {
        let mut acc = 0.0;
        for (j, &v) in a.row_iter(i) {
            acc += v * x[j];
        }
        y[i] = acc;
    }

    Ok(y)
}
