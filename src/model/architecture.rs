//! Architecture cost facade
//!
//! Binds one `(cache_size, input_width, num_pipes)` triple and a cycle
//! policy to a matrix and exposes the aggregate metrics: estimated clock
//! cycles (the slowest pipe), GFLOPS, and on-chip resource usage.

use std::fmt;

use ndarray::Array1;

use crate::constants::{BRAMS_PER_WORD, DEFAULT_FREQUENCY_HZ};
use crate::error::ModelError;
use crate::matrix::{reference_spmv, SparseMatrixCSR};
use crate::model::blocking::{block, bram_estimate, partition, BlockingResult};
use crate::model::cycles::CycleModel;

/// Validated architecture parameter triple. Immutable once bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArchParams {
    pub cache_size: usize,
    pub input_width: usize,
    pub num_pipes: usize,
}

impl ArchParams {
    /// Builds a parameter triple, rejecting non-positive values eagerly so
    /// no blocking work starts on a bad configuration.
    pub fn new(
        cache_size: usize,
        input_width: usize,
        num_pipes: usize,
    ) -> Result<Self, ModelError> {
        if cache_size == 0 {
            return Err(ModelError::InvalidParams { param: "cache_size", value: cache_size });
        }
        if input_width == 0 {
            return Err(ModelError::InvalidParams { param: "input_width", value: input_width });
        }
        if num_pipes == 0 {
            return Err(ModelError::InvalidParams { param: "num_pipes", value: num_pipes });
        }
        Ok(Self { cache_size, input_width, num_pipes })
    }
}

impl fmt::Display for ArchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cacheSize = {} inputWidth = {} numPipes = {}",
            self.cache_size, self.input_width, self.num_pipes
        )
    }
}

/// On-chip resource estimate. Only the BRAM count is modeled; the remaining
/// fields carry a -1 sentinel until the model learns to estimate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceUsage {
    pub luts: i64,
    pub ffs: i64,
    pub dsps: i64,
    pub brams: i64,
}

/// The parameterized SpMV architecture model.
///
/// `preprocess` must run before any metric accessor; the accessors report
/// `ModelError::NotPreprocessed` otherwise.
#[derive(Debug, Clone)]
pub struct SpmvArchitecture {
    params: ArchParams,
    model: CycleModel,
    matrix: Option<SparseMatrixCSR<f64>>,
    partitions: Vec<BlockingResult>,
}

impl SpmvArchitecture {
    pub fn new(params: ArchParams, model: CycleModel) -> Self {
        Self { params, model, matrix: None, partitions: Vec::new() }
    }

    /// Convenience constructor validating the raw triple.
    pub fn with_params(
        cache_size: usize,
        input_width: usize,
        num_pipes: usize,
        model: CycleModel,
    ) -> Result<Self, ModelError> {
        Ok(Self::new(ArchParams::new(cache_size, input_width, num_pipes)?, model))
    }

    pub fn params(&self) -> ArchParams {
        self.params
    }

    pub fn cycle_model(&self) -> CycleModel {
        self.model
    }

    pub fn name(&self) -> &'static str {
        self.model.name()
    }

    /// Partitions and blocks the matrix, storing one `BlockingResult` per
    /// pipe. Keeps a copy of the matrix for the reference multiply.
    pub fn preprocess(&mut self, matrix: &SparseMatrixCSR<f64>) {
        let ArchParams { cache_size, input_width, num_pipes } = self.params;

        self.partitions = partition(matrix, num_pipes)
            .iter()
            .map(|sub| block(sub, cache_size, input_width, self.model))
            .collect();
        self.matrix = Some(matrix.clone());
    }

    /// Per-pipe blocking results, in pipe order.
    pub fn blocking_results(&self) -> &[BlockingResult] {
        &self.partitions
    }

    /// Estimated cycles for the whole multiply: pipes run in parallel, so
    /// the slowest partition bounds the design.
    pub fn estimated_clock_cycles(&self) -> Result<usize, ModelError> {
        if self.matrix.is_none() {
            return Err(ModelError::NotPreprocessed);
        }
        Ok(self
            .partitions
            .iter()
            .map(|p| p.total_cycles)
            .max()
            .unwrap_or(0))
    }

    /// Useful floating-point work in the multiply: one multiply and one add
    /// per nonzero, in GFLOP. Independent of the cycle estimate.
    pub fn gflops_count(&self) -> Result<f64, ModelError> {
        match &self.matrix {
            Some(m) => Ok(2.0 * m.nnz() as f64 / 1e9),
            None => Err(ModelError::NotPreprocessed),
        }
    }

    /// Achieved GFLOPS at the given clock rate.
    pub fn estimated_gflops(&self, frequency_hz: f64) -> Result<f64, ModelError> {
        let cycles = self.estimated_clock_cycles()?;
        if cycles == 0 {
            return Ok(0.0);
        }
        Ok(self.gflops_count()? * frequency_hz / cycles as f64)
    }

    /// On-chip memory estimate for the vector caches. Valid only after
    /// `preprocess`, matching the other metric accessors.
    pub fn resource_usage(&self) -> Result<ResourceUsage, ModelError> {
        if self.matrix.is_none() {
            return Err(ModelError::NotPreprocessed);
        }
        let brams = bram_estimate(self.params.cache_size, self.params.input_width, BRAMS_PER_WORD);
        Ok(ResourceUsage { luts: -1, ffs: -1, dsps: -1, brams: brams as i64 })
    }

    /// Reference multiply against the preprocessed matrix, for correctness
    /// cross-checks. Not part of the cost model's critical path.
    pub fn dfespmv(&self, x: &Array1<f64>) -> Result<Array1<f64>, ModelError> {
        match &self.matrix {
            Some(m) => reference_spmv(m, x),
            None => Err(ModelError::NotPreprocessed),
        }
    }
}

impl fmt::Display for SpmvArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.params)?;
        if let Ok(cycles) = self.estimated_clock_cycles() {
            write!(f, " est. cycles = {}", cycles)?;
        }
        if let Ok(gflops) = self.estimated_gflops(DEFAULT_FREQUENCY_HZ) {
            write!(f, " est. gflops = {:.6}", gflops)?;
        }
        Ok(())
    }
}
