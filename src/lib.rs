//! # spmv-model: a performance model for SpMV accelerators
//!
//! Estimates the clock-cycle count, achieved throughput, and on-chip memory
//! usage of a sparse-matrix-vector-multiply accelerator without building the
//! hardware. Given a matrix and a `(cacheSize, inputWidth, numPipes)` triple,
//! the model:
//!
//! 1. **Partitions** the matrix across the parallel pipes.
//! 2. **Blocks** each partition into cache-bounded row groups, producing a
//!    row-length-delta profile per block.
//! 3. **Counts cycles** per block under a selectable front-end policy
//!    (simple, FST, or empty-row skipping).
//! 4. **Aggregates**: the slowest pipe bounds the design; BRAM usage follows
//!    from the cache geometry.
//!
//! The [`model::ArchitectureSpace`] enumerator drives this pipeline over the
//! full cross product of swept parameters for design-space exploration; the
//! [`explore`] module evaluates spaces sequentially or in parallel.
//!
//! ## Usage
//!
//! ```
//! use spmv_model::model::{CycleModel, SpmvArchitecture};
//! use spmv_model::matrix::SparseMatrixCSR;
//!
//! let m = SparseMatrixCSR::new(2, 2, vec![0, 1, 2], vec![0, 1], vec![1.0, 2.0]);
//! let mut arch = SpmvArchitecture::with_params(2048, 48, 1, CycleModel::Simple).unwrap();
//! arch.preprocess(&m);
//! assert!(arch.estimated_clock_cycles().unwrap() > 0);
//! ```

pub mod constants;
pub mod error;
pub mod explore;
pub mod generate;
pub mod matrix;
pub mod model;
pub mod utils;

// Re-export primary components
pub use error::ModelError;
pub use explore::{evaluate_space, evaluate_space_parallel, rank_by_cycles, Evaluation, SweepConfig};
pub use matrix::{reference_spmv, SparseMatrixCSR};
pub use model::{
    ArchParams, ArchitectureSpace, BlockingResult, CycleModel, IndptrValue, Range, ResourceUsage,
    SpmvArchitecture,
};
pub use utils::{from_sprs_csr, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
