//! Seeded test-matrix generators
//!
//! Reproducible CSR matrices for the demo binary, benchmarks, and tests.
//! All generators take an explicit seed so runs are comparable.

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

use crate::matrix::SparseMatrixCSR;

/// Generates a uniformly random matrix with the given density.
pub fn random_csr(n_rows: usize, n_cols: usize, density: f64, seed: u64) -> SparseMatrixCSR<f64> {
    assert!((0.0..=1.0).contains(&density), "density must be in [0, 1]");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let value_dist = Uniform::new(-1.0, 1.0);

    let nnz_per_row = ((n_cols as f64 * density).round() as usize).min(n_cols);

    let mut row_ptr = vec![0];
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    for _ in 0..n_rows {
        // sorted distinct columns for this row
        let mut cols = BTreeSet::new();
        while cols.len() < nnz_per_row {
            cols.insert(rng.gen_range(0..n_cols));
        }
        for col in cols {
            col_idx.push(col);
            values.push(value_dist.sample(&mut rng));
        }
        row_ptr.push(col_idx.len());
    }

    SparseMatrixCSR::new(n_rows, n_cols, row_ptr, col_idx, values)
}

/// Generates a banded matrix with the given half-bandwidth.
pub fn banded_csr(n: usize, bandwidth: usize, seed: u64) -> SparseMatrixCSR<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let value_dist = Uniform::new(-1.0, 1.0);

    let mut row_ptr = vec![0];
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    for i in 0..n {
        let lo = i.saturating_sub(bandwidth);
        let hi = (i + bandwidth + 1).min(n);
        for j in lo..hi {
            col_idx.push(j);
            values.push(value_dist.sample(&mut rng));
        }
        row_ptr.push(col_idx.len());
    }

    SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
}

/// Generates a matrix with power-law row lengths: a few heavy rows, many
/// light or empty ones. Exercises the empty-row handling of the cycle
/// policies and deliberately unbalanced partitions.
pub fn power_law_csr(n: usize, alpha: f64, seed: u64) -> SparseMatrixCSR<f64> {
    assert!(alpha > 0.0, "alpha must be positive");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let value_dist = Uniform::new(-1.0, 1.0);

    let mut row_ptr = vec![0];
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    for i in 0..n {
        // row length decays with rank; late rows round down to empty
        let target = (n as f64 * (1.0 / (i + 1) as f64).powf(alpha)) as usize;
        let nnz = target.min(n);

        let mut cols = BTreeSet::new();
        while cols.len() < nnz {
            cols.insert(rng.gen_range(0..n));
        }
        for col in cols {
            col_idx.push(col);
            values.push(value_dist.sample(&mut rng));
        }
        row_ptr.push(col_idx.len());
    }

    SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
}
