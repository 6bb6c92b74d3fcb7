#[cfg(feature = "core")]
#[doc(inline)]
pub use sparsevec_core as core;

#[cfg(feature = "core")]
pub use sparsevec_core::{DenseVector, DenseVectorMut, SparseVector, SparseVectorError};

#[cfg(feature = "workload")]
pub mod workload;
