//! Sparse matrix collaborator types consumed by the cost model

pub mod csr;
pub mod reference;

pub use csr::SparseMatrixCSR;
pub use reference::reference_spmv;
