//! Centralized constants for the SpMV performance model
//!
//! This module contains all hardcoded defaults used throughout the codebase.
//! All new constants should be added here rather than scattered through the code.

// ============================================================================
// FIXED-ARCHITECTURE DEFAULTS
// ============================================================================

/// Default vector-cache size per pipe (entries) for a single fixed architecture
pub const DEFAULT_CACHE_SIZE: usize = 2048;

/// Default input data-path width (value/index pairs consumed per cycle)
pub const DEFAULT_INPUT_WIDTH: usize = 48;

/// Default number of parallel processing pipes
pub const DEFAULT_NUM_PIPES: usize = 1;

// ============================================================================
// DESIGN-SPACE SWEEP DEFAULTS
// ============================================================================

/// Swept cache-size range: start, end, step
pub const CACHE_SIZE_SWEEP: (usize, usize, usize) = (1024, 4096, 512);

/// Swept input-width range: start, end, step
pub const INPUT_WIDTH_SWEEP: (usize, usize, usize) = (8, 100, 8);

/// Swept pipe-count range: start, end, step
pub const NUM_PIPES_SWEEP: (usize, usize, usize) = (1, 6, 1);

// ============================================================================
// RESOURCE AND TIMING MODEL
// ============================================================================

/// Depth of one on-chip block RAM in double-precision words
pub const BRAM_DEPTH: usize = 512;

/// Block RAMs needed per cache word (40-bit wide BRAMs, 64-bit values)
pub const BRAMS_PER_WORD: usize = 2;

/// Assumed accelerator clock frequency for reported GFLOPS
pub const DEFAULT_FREQUENCY_HZ: f64 = 100.0e6;
