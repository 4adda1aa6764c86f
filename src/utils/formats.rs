//! Conversions between our matrix format and external libraries
//!
//! Matrix loading lives outside the model core; loaders that produce
//! `sprs::CsMat` hand matrices across this boundary.

use crate::matrix::SparseMatrixCSR;
use num_traits::Num;
use sprs::CsMat;

/// Converts our CSR matrix format to sprs CsMat format
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts an sprs CsMat to our CSR format, converting from CSC if needed
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    let matrix = if matrix.is_csr() { matrix } else { matrix.to_csr() };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(shape.0, shape.1, indptr, indices, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_roundtrip() {
        let original = SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0f64, 2.0, 3.0, 4.0, 5.0],
        );

        let sprs_mat = to_sprs_csr(&original);
        let roundtrip = from_sprs_csr(sprs_mat);

        assert_eq!(roundtrip.n_rows, original.n_rows);
        assert_eq!(roundtrip.n_cols, original.n_cols);
        assert_eq!(roundtrip.row_ptr, original.row_ptr);
        assert_eq!(roundtrip.col_idx, original.col_idx);
        assert_eq!(roundtrip.values, original.values);
    }

    #[test]
    fn test_from_csc_converts() {
        let csr = SparseMatrixCSR::new(
            2, 2,
            vec![0, 1, 2],
            vec![1, 0],
            vec![3.0f64, 4.0],
        );

        let csc = to_sprs_csr(&csr).to_csc();
        let back = from_sprs_csr(csc);

        assert_eq!(back.n_rows, 2);
        assert_eq!(back.nnz(), 2);
        let row0: Vec<_> = back.row_iter(0).map(|(j, &v)| (j, v)).collect();
        assert_eq!(row0, vec![(1, 3.0)]);
    }
}
