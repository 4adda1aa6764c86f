//! Partitioning and cache-bounded blocking
//!
//! The matrix is first split across pipes, then each pipe's sub-matrix is
//! walked row by row and grouped into blocks whose distinct-column footprint
//! fits the pipe's vector cache. Each block contributes a row-length-delta
//! profile to the cycle model and a packed value/indptr stream to the
//! modeled memory system.

use std::collections::HashSet;
use std::fmt;
use std::mem;

use crate::constants::BRAM_DEPTH;
use crate::matrix::SparseMatrixCSR;
use crate::model::cycles::CycleModel;

/// One nonzero's value packed with its cumulative row-pointer position.
///
/// Models a single combined memory word so the accelerator needs one input
/// stream instead of two. The layout is a hardware contract: 8-byte value
/// followed immediately by a 4-byte pointer, no padding.
#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct IndptrValue {
    pub value: f64,
    pub indptr: i32,
}

impl IndptrValue {
    pub fn new(value: f64, indptr: i32) -> Self {
        Self { value, indptr }
    }
}

impl fmt::Debug for IndptrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, indptr) = (self.value, self.indptr);
        write!(f, "IndptrValue {{ value: {}, indptr: {} }}", value, indptr)
    }
}

impl PartialEq for IndptrValue {
    fn eq(&self, other: &Self) -> bool {
        let (v1, p1) = (self.value, self.indptr);
        let (v2, p2) = (other.value, other.indptr);
        v1 == v2 && p1 == p2
    }
}

/// Blocking outcome for one pipe's partition.
///
/// Aggregates every cache-bounded block of the partition: the concatenated
/// per-row column pointers (restarting at each block boundary), the packed
/// value/indptr stream, and the derived cycle metrics. Read-only once built.
#[derive(Debug, Clone)]
pub struct BlockingResult {
    /// Rows in the partition
    pub n_rows: usize,
    /// Cache-bounded blocks the partition was split into
    pub n_blocks: usize,
    /// Cycles spent padding the output stream to a full-width write
    pub padding_cycles: usize,
    /// Cycles spent refilling the vector cache, across all blocks
    pub vector_load_cycles: usize,
    /// Compute + vector load + padding cycles for the whole partition
    pub total_cycles: usize,
    /// Output vector bytes produced by this partition
    pub out_size: usize,
    /// Cumulative nonzero count per row, restarting at each block boundary
    pub col_ptr: Vec<usize>,
    /// Packed value/indptr records, one per nonzero, in block order
    pub indptr_values: Vec<IndptrValue>,
}

impl fmt::Display for BlockingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vector load cycles = {}", self.vector_load_cycles)?;
        writeln!(f, "Padding cycles = {}", self.padding_cycles)?;
        writeln!(f, "Total cycles = {}", self.total_cycles)?;
        writeln!(f, "Nrows = {}", self.n_rows)?;
        write!(f, "Cache blocks = {}", self.n_blocks)
    }
}

/// Splits the matrix's columns into `num_pipes` contiguous groups.
///
/// Every nonzero lands in exactly one partition; every partition keeps the
/// original row count, with column indices rebased to its own column space.
/// When `num_pipes` exceeds the column count the trailing partitions are
/// empty.
///
/// # Panics
///
/// Panics if `num_pipes` is zero; architecture construction validates the
/// parameter before any blocking work.
pub fn partition(m: &SparseMatrixCSR<f64>, num_pipes: usize) -> Vec<SparseMatrixCSR<f64>> {
    assert!(num_pipes > 0, "num_pipes must be positive");

    let width = (m.n_cols + num_pipes - 1) / num_pipes;
    let width = width.max(1);

    let mut row_ptrs = vec![vec![0usize]; num_pipes];
    let mut col_idx = vec![Vec::new(); num_pipes];
    let mut values = vec![Vec::new(); num_pipes];

    for i in 0..m.n_rows {
        for (j, &v) in m.row_iter(i) {
            let p = j / width;
            col_idx[p].push(j - p * width);
            values[p].push(v);
        }
        for p in 0..num_pipes {
            row_ptrs[p].push(col_idx[p].len());
        }
    }

    (0..num_pipes)
        .map(|p| {
            let lo = (p * width).min(m.n_cols);
            let hi = ((p + 1) * width).min(m.n_cols);
            SparseMatrixCSR::new(
                m.n_rows,
                hi - lo,
                mem::take(&mut row_ptrs[p]),
                mem::take(&mut col_idx[p]),
                mem::take(&mut values[p]),
            )
        })
        .collect()
}

/// Walks the sub-matrix's rows and groups consecutive rows into blocks whose
/// distinct-column footprint does not exceed `cache_size`.
///
/// An all-zero row never forces a block boundary. A single row touching more
/// than `cache_size` distinct columns still occupies a block alone; the cache
/// bound is a modeling simplification, not a hard limit, and such a row is
/// simply charged as one oversized block.
pub fn block(
    sub: &SparseMatrixCSR<f64>,
    cache_size: usize,
    input_width: usize,
    model: CycleModel,
) -> BlockingResult {
    assert!(cache_size > 0, "cache_size must be positive");
    assert!(input_width > 0, "input_width must be positive");

    let mut n_blocks = 0;
    let mut compute_cycles = 0;
    let mut col_ptr = Vec::with_capacity(sub.n_rows);
    let mut indptr_values = Vec::with_capacity(sub.nnz());

    // state of the block being assembled
    let mut block_cols: HashSet<usize> = HashSet::new();
    let mut deltas: Vec<usize> = Vec::new();
    let mut pending: Vec<f64> = Vec::new();

    let mut flush = |block_cols: &mut HashSet<usize>,
                     deltas: &mut Vec<usize>,
                     pending: &mut Vec<f64>| {
        if deltas.is_empty() {
            return;
        }
        n_blocks += 1;

        let mut running = 0;
        for &d in deltas.iter() {
            running += d;
            col_ptr.push(running);
        }
        for (k, &v) in pending.iter().enumerate() {
            indptr_values.push(IndptrValue::new(v, (k + 1) as i32));
        }
        compute_cycles += model.cycle_count(deltas, input_width);

        block_cols.clear();
        deltas.clear();
        pending.clear();
    };

    for i in 0..sub.n_rows {
        let fresh = sub
            .row_iter(i)
            .filter(|(j, _)| !block_cols.contains(j))
            .count();
        if !deltas.is_empty() && block_cols.len() + fresh > cache_size {
            flush(&mut block_cols, &mut deltas, &mut pending);
        }

        deltas.push(sub.row_nnz(i));
        for (j, &v) in sub.row_iter(i) {
            block_cols.insert(j);
            pending.push(v);
        }
    }
    flush(&mut block_cols, &mut deltas, &mut pending);

    let vector_load_cycles = n_blocks * div_ceil(cache_size, input_width);
    let padding_cycles = (input_width - sub.n_rows % input_width) % input_width;
    let out_size = sub.n_rows * mem::size_of::<f64>();

    BlockingResult {
        n_rows: sub.n_rows,
        n_blocks,
        padding_cycles,
        vector_load_cycles,
        total_cycles: compute_cycles + vector_load_cycles + padding_cycles,
        out_size,
        col_ptr,
        indptr_values,
    }
}

/// BRAMs needed for one pipe's vector cache: `input_width` parallel caches of
/// `cache_size` words, two fixed-depth memories per word.
pub fn bram_estimate(cache_size: usize, input_width: usize, brams_per_word: usize) -> usize {
    div_ceil(cache_size * input_width * brams_per_word, BRAM_DEPTH)
}

pub(crate) fn div_ceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}
