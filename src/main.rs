use ndarray::Array1;
use spmv_model::constants::{
    DEFAULT_CACHE_SIZE, DEFAULT_FREQUENCY_HZ, DEFAULT_INPUT_WIDTH, DEFAULT_NUM_PIPES,
};
use spmv_model::{reference_spmv, CycleModel, SparseMatrixCSR, SpmvArchitecture};

fn main() {
    println!("spmv-model: SpMV accelerator performance model");

    // A small matrix with an empty row, so the policies diverge
    let m = SparseMatrixCSR::new(
        4,
        4,
        vec![0, 2, 2, 5, 6],
        vec![0, 1, 0, 2, 3, 3],
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    );

    println!("\nInput matrix:");
    println!("{:?}", m);

    for model in CycleModel::ALL {
        let mut arch = SpmvArchitecture::with_params(
            DEFAULT_CACHE_SIZE,
            DEFAULT_INPUT_WIDTH,
            DEFAULT_NUM_PIPES,
            model,
        )
        .expect("default parameters are positive");
        arch.preprocess(&m);

        println!("\n{}", arch);
        for (pipe, result) in arch.blocking_results().iter().enumerate() {
            println!("Pipe {}:", pipe);
            println!("{}", result);
        }
    }

    // Cross-check the data plumbing against a plain software multiply
    let mut arch = SpmvArchitecture::with_params(
        DEFAULT_CACHE_SIZE,
        DEFAULT_INPUT_WIDTH,
        2,
        CycleModel::SkipEmptyRows,
    )
    .expect("default parameters are positive");
    arch.preprocess(&m);

    let x = Array1::from(vec![1.0, 1.0, 1.0, 1.0]);
    let via_arch = arch.dfespmv(&x).expect("matrix was preprocessed");
    let direct = reference_spmv(&m, &x).expect("dimensions match");
    assert_eq!(via_arch, direct);

    println!("\nReference multiply (all-ones vector): {:?}", via_arch.to_vec());
    println!(
        "Estimated GFLOPS at {:.0} MHz: {:.6}",
        DEFAULT_FREQUENCY_HZ / 1e6,
        arch.estimated_gflops(DEFAULT_FREQUENCY_HZ)
            .expect("matrix was preprocessed")
    );
}
