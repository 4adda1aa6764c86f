//! Property-based checks over randomized matrices and profiles

use proptest::prelude::*;
use spmv_model::generate::random_csr;
use spmv_model::model::blocking::bram_estimate;
use spmv_model::model::{partition, CycleModel};

proptest! {
    #[test]
    fn partitioning_is_a_bijection_on_nonzeros(
        n_rows in 1usize..40,
        n_cols in 1usize..40,
        density in 0.0f64..0.3,
        seed in any::<u64>(),
        num_pipes in 1usize..8,
    ) {
        let m = random_csr(n_rows, n_cols, density, seed);
        let parts = partition(&m, num_pipes);
        let width = ((m.n_cols + num_pipes - 1) / num_pipes).max(1);

        // gather every nonzero back into global coordinates
        let mut reassembled: Vec<(usize, usize, u64)> = Vec::new();
        for (pi, p) in parts.iter().enumerate() {
            for i in 0..p.n_rows {
                for (j, &v) in p.row_iter(i) {
                    reassembled.push((i, pi * width + j, v.to_bits()));
                }
            }
        }
        reassembled.sort_unstable();

        let mut original: Vec<(usize, usize, u64)> = Vec::new();
        for i in 0..m.n_rows {
            for (j, &v) in m.row_iter(i) {
                original.push((i, j, v.to_bits()));
            }
        }
        original.sort_unstable();

        prop_assert_eq!(reassembled, original);
    }

    #[test]
    fn simple_policy_matches_closed_form(
        deltas in proptest::collection::vec(0usize..200, 0..50),
        input_width in 1usize..64,
    ) {
        let expected: usize = deltas
            .iter()
            .map(|&d| ((d + input_width - 1) / input_width).max(1))
            .sum();
        prop_assert_eq!(CycleModel::Simple.cycle_count(&deltas, input_width), expected);
        prop_assert_eq!(CycleModel::Fst.cycle_count(&deltas, input_width), expected);
    }

    #[test]
    fn skip_empty_policy_is_bounded(
        deltas in proptest::collection::vec(0usize..200, 0..50),
        input_width in 1usize..64,
    ) {
        let skip = CycleModel::SkipEmptyRows.cycle_count(&deltas, input_width);
        let simple = CycleModel::Simple.cycle_count(&deltas, input_width);
        let nnz: usize = deltas.iter().sum();
        let nonempty = deltas.iter().filter(|&&d| d > 0).count();

        // cannot beat the raw bandwidth bound
        prop_assert!(skip >= (nnz + input_width - 1) / input_width);
        // misalignment costs at most one extra chunk per populated row
        prop_assert!(skip <= simple + nonempty);
    }

    #[test]
    fn bram_estimate_matches_real_arithmetic(
        cache_size in 1usize..8192,
        input_width in 1usize..128,
    ) {
        let expected = (cache_size as f64 * input_width as f64 / 512.0 * 2.0).ceil() as usize;
        prop_assert_eq!(bram_estimate(cache_size, input_width, 2), expected);
    }
}
