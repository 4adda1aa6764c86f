//! Cycle-cost policies for the modeled pipe front-end
//!
//! A policy converts one block's row-length-delta profile into the number of
//! clock cycles the pipe spends consuming that block. The variants differ in
//! how they treat empty rows and chunk alignment at row boundaries.

/// Cycle-counting policy, selected at architecture construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleModel {
    /// One flush cycle minimum per row; each row streamed in full-width
    /// chunks starting from an aligned position.
    Simple,
    /// FST-based front-end. Accounted identically to `Simple` for now; kept
    /// as a distinct policy so the two can diverge without touching callers.
    Fst,
    /// Collapses runs of consecutive empty rows into a single cycle and
    /// carries the data-path fill position across row boundaries.
    SkipEmptyRows,
}

impl CycleModel {
    /// All policies, in reporting order.
    pub const ALL: [CycleModel; 3] = [
        CycleModel::Simple,
        CycleModel::Fst,
        CycleModel::SkipEmptyRows,
    ];

    /// Human-readable architecture name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            CycleModel::Simple => "SimpleSpmvArchitecture",
            CycleModel::Fst => "FstSpmvArchitecture",
            CycleModel::SkipEmptyRows => "SkipEmptyRowsSpmvArchitecture",
        }
    }

    /// Cycles needed to consume a block with the given row-length-delta
    /// profile at `input_width` value/index pairs per cycle.
    ///
    /// An empty profile costs 0 cycles. `input_width` must be positive;
    /// callers validate it as an architecture parameter.
    pub fn cycle_count(&self, deltas: &[usize], input_width: usize) -> usize {
        debug_assert!(input_width > 0);
        match self {
            CycleModel::Simple | CycleModel::Fst => {
                simple_cycle_count(deltas, input_width)
            }
            CycleModel::SkipEmptyRows => {
                skip_empty_cycle_count(deltas, input_width)
            }
        }
    }
}

/// Each row is chunked at `input_width` pairs per cycle; an empty row still
/// takes one cycle to advance the row state.
fn simple_cycle_count(deltas: &[usize], input_width: usize) -> usize {
    let mut cycles = 0;
    for &d in deltas {
        let mut toread = d;
        loop {
            toread -= toread.min(input_width);
            cycles += 1;
            if toread == 0 {
                break;
            }
        }
    }
    cycles
}

/// Chunking with the fill position carried across rows: a row may start
/// mid-width, and only the first empty row of a consecutive run is charged.
fn skip_empty_cycle_count(deltas: &[usize], input_width: usize) -> usize {
    let mut cycles = 0;
    let mut crt_pos = 0;
    let mut prev_empty = false;
    for &d in deltas {
        if d == 0 {
            if !prev_empty {
                cycles += 1;
            }
            prev_empty = true;
            continue;
        }
        prev_empty = false;

        let mut toread = d;
        while toread > 0 {
            let canread = (input_width - crt_pos).min(toread);
            crt_pos = (crt_pos + canread) % input_width;
            toread -= canread;
            cycles += 1;
        }
    }
    cycles
}
