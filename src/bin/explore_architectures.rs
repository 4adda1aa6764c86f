//! Design-space exploration tool for the SpMV performance model
//!
//! Sweeps cache size, input width, and pipe count over a generated matrix
//! and reports the fastest designs per cycle policy.

use spmv_model::generate::{banded_csr, power_law_csr, random_csr};
use spmv_model::{
    evaluate_space_parallel, rank_by_cycles, CycleModel, Evaluation, SparseMatrixCSR, SweepConfig,
};

fn main() {
    println!("SpMV Architecture Explorer");
    println!("==========================\n");

    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("random");
    let size = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4096usize);

    let matrix = match mode {
        "random" => random_csr(size, size, 0.01, 42),
        "banded" => banded_csr(size, 8, 42),
        "powerlaw" => power_law_csr(size, 1.5, 42),
        _ => {
            print_usage();
            return;
        }
    };

    println!(
        "Matrix: {} ({}×{}, {} non-zeros, density {:.6})\n",
        mode,
        matrix.n_rows,
        matrix.n_cols,
        matrix.nnz(),
        matrix.nnz() as f64 / (matrix.n_rows * matrix.n_cols) as f64
    );

    let config = SweepConfig::default();
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.n_threads)
        .build_global()
        .ok();

    println!(
        "Sweep: cacheSize {:?}, inputWidth {:?}, numPipes {:?} ({} points per policy, {} threads)\n",
        (config.cache_size.start, config.cache_size.end, config.cache_size.step),
        (config.input_width.start, config.input_width.end, config.input_width.step),
        (config.num_pipes.start, config.num_pipes.end, config.num_pipes.step),
        config.space(CycleModel::Simple).len(),
        config.n_threads,
    );

    for model in CycleModel::ALL {
        explore_policy(model, &config, &matrix);
    }
}

fn print_usage() {
    println!("Usage: explore_architectures [mode] [size]");
    println!();
    println!("Modes:");
    println!("  random    - Uniform random matrix, density 0.01 (default)");
    println!("  banded    - Banded matrix, half-bandwidth 8");
    println!("  powerlaw  - Power-law row lengths with an empty tail");
}

fn explore_policy(model: CycleModel, config: &SweepConfig, matrix: &SparseMatrixCSR<f64>) {
    println!("{}", model.name());
    println!("--------------------------------------------------------------");

    let evals = match evaluate_space_parallel(config.space(model), matrix, config.frequency_hz) {
        Ok(evals) => evals,
        Err(e) => {
            eprintln!("  sweep failed: {}", e);
            return;
        }
    };

    let ranked = rank_by_cycles(evals);
    println!(
        "{:>10} {:>10} {:>8} {:>12} {:>12} {:>8}",
        "cacheSize", "inputWidth", "pipes", "est. cycles", "est. GFLOPS", "BRAMs"
    );
    for e in ranked.iter().take(5) {
        print_evaluation(e);
    }
    if let Some(worst) = ranked.last() {
        println!("  ... worst of {}:", ranked.len());
        print_evaluation(worst);
    }
    println!();
}

fn print_evaluation(e: &Evaluation) {
    println!(
        "{:>10} {:>10} {:>8} {:>12} {:>12.6} {:>8}",
        e.params.cache_size,
        e.params.input_width,
        e.params.num_pipes,
        e.estimated_cycles,
        e.estimated_gflops,
        e.brams
    );
}
