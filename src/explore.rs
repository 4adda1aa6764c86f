//! Design-space sweep driver
//!
//! Evaluates every architecture in a space against one matrix and collects
//! per-design metrics. Architectures are independent, so the parallel path
//! fans the collected designs out over rayon and merges in input order.

use rayon::prelude::*;

use crate::constants::{
    CACHE_SIZE_SWEEP, DEFAULT_FREQUENCY_HZ, INPUT_WIDTH_SWEEP, NUM_PIPES_SWEEP,
};
use crate::error::ModelError;
use crate::matrix::SparseMatrixCSR;
use crate::model::{ArchParams, ArchitectureSpace, CycleModel, Range, SpmvArchitecture};

/// Bounds of a design-space sweep plus host-side execution knobs.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub cache_size: Range,
    pub input_width: Range,
    pub num_pipes: Range,
    /// Worker threads for the parallel sweep
    pub n_threads: usize,
    /// Clock rate assumed when reporting achieved GFLOPS
    pub frequency_hz: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            cache_size: CACHE_SIZE_SWEEP.into(),
            input_width: INPUT_WIDTH_SWEEP.into(),
            num_pipes: NUM_PIPES_SWEEP.into(),
            n_threads: num_cpus::get(),
            frequency_hz: DEFAULT_FREQUENCY_HZ,
        }
    }
}

impl SweepConfig {
    pub fn space(&self, model: CycleModel) -> ArchitectureSpace {
        ArchitectureSpace::new(self.cache_size, self.input_width, self.num_pipes, model)
    }
}

/// Metrics of one evaluated design point.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub name: &'static str,
    pub params: ArchParams,
    pub estimated_cycles: usize,
    pub gflops_count: f64,
    pub estimated_gflops: f64,
    pub brams: i64,
}

fn evaluate_one(
    mut arch: SpmvArchitecture,
    matrix: &SparseMatrixCSR<f64>,
    frequency_hz: f64,
) -> Result<Evaluation, ModelError> {
    arch.preprocess(matrix);
    Ok(Evaluation {
        name: arch.name(),
        params: arch.params(),
        estimated_cycles: arch.estimated_clock_cycles()?,
        gflops_count: arch.gflops_count()?,
        estimated_gflops: arch.estimated_gflops(frequency_hz)?,
        brams: arch.resource_usage()?.brams,
    })
}

/// Evaluates the whole space sequentially, in enumeration order.
pub fn evaluate_space(
    space: ArchitectureSpace,
    matrix: &SparseMatrixCSR<f64>,
    frequency_hz: f64,
) -> Result<Vec<Evaluation>, ModelError> {
    space
        .map(|arch| evaluate_one(arch, matrix, frequency_hz))
        .collect()
}

/// Evaluates the whole space on the rayon pool. Results come back in the
/// same order the space enumerates them.
pub fn evaluate_space_parallel(
    space: ArchitectureSpace,
    matrix: &SparseMatrixCSR<f64>,
    frequency_hz: f64,
) -> Result<Vec<Evaluation>, ModelError> {
    let designs: Vec<SpmvArchitecture> = space.collect();
    designs
        .into_par_iter()
        .map(|arch| evaluate_one(arch, matrix, frequency_hz))
        .collect()
}

/// Sorts evaluations fastest-first, BRAM count breaking cycle ties.
pub fn rank_by_cycles(mut evaluations: Vec<Evaluation>) -> Vec<Evaluation> {
    evaluations.sort_by(|a, b| {
        a.estimated_cycles
            .cmp(&b.estimated_cycles)
            .then(a.brams.cmp(&b.brams))
    });
    evaluations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::random_csr;

    fn tiny_space(model: CycleModel) -> ArchitectureSpace {
        ArchitectureSpace::new(
            Range::new(64, 128, 64),
            Range::new(4, 8, 4),
            Range::new(1, 2, 1),
            model,
        )
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let m = random_csr(60, 60, 0.1, 11);

        let seq =
            evaluate_space(tiny_space(CycleModel::Simple), &m, DEFAULT_FREQUENCY_HZ).unwrap();
        let par = evaluate_space_parallel(tiny_space(CycleModel::Simple), &m, DEFAULT_FREQUENCY_HZ)
            .unwrap();

        assert_eq!(seq.len(), 8);
        assert_eq!(par.len(), 8);
        for (a, b) in seq.iter().zip(&par) {
            assert_eq!(a.params, b.params);
            assert_eq!(a.estimated_cycles, b.estimated_cycles);
        }
    }

    #[test]
    fn test_gflops_constant_across_space() {
        let m = random_csr(40, 40, 0.2, 5);
        let expected = 2.0 * m.nnz() as f64 / 1e9;

        let evals =
            evaluate_space(tiny_space(CycleModel::SkipEmptyRows), &m, DEFAULT_FREQUENCY_HZ)
                .unwrap();
        for e in evals {
            assert_eq!(e.gflops_count, expected);
        }
    }

    #[test]
    fn test_ranking_is_fastest_first() {
        let m = random_csr(60, 60, 0.1, 11);
        let evals =
            evaluate_space(tiny_space(CycleModel::Simple), &m, DEFAULT_FREQUENCY_HZ).unwrap();

        let ranked = rank_by_cycles(evals);
        for pair in ranked.windows(2) {
            assert!(pair[0].estimated_cycles <= pair[1].estimated_cycles);
        }
    }
}
