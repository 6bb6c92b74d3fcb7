//! Core infrastructure for sparse vectors in Rust.
//!
//! A [`SparseVector`] stores only the coordinates that were given to it, as two
//! parallel buffers of ascending indices and their values. Memory and time scale
//! with the number of stored entries, not with the nominal dimension, which makes
//! it a good fit for machine-learning feature vectors where most coordinates are
//! zero.
//!
//! ## Features
//!
//! - **Immutable**: built once from a mapping, never resized or reassigned
//! - **Dense interop**: dot products and accumulation against any [`DenseVector`]
//! - **Norms**: L0, L1, L2, squared L2, L-infinity and general Lp
//! - **Thread-safe**: `SparseVector` is `Send` and `Sync`; any number of readers may share it
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use sparsevec_core::SparseVector;
//!
//! let sv = SparseVector::from(HashMap::from([(0, 5.0), (2, -12.0), (42, 0.0)]));
//!
//! assert_eq!(sv.len(), 3);
//! assert_eq!(sv.l0(), 2);
//! assert_eq!(sv.dot(&[10.0, 0.0, -1.0]), 62.0);
//!
//! let mut dense: Vec<f64> = vec![10.0, 0.0, -1.0];
//! sv.add_scaled_to(&mut dense, 2.0);
//! assert_eq!(dense, vec![20.0, 0.0, -25.0]);
//! ```
//!
//! ## Optional features
//!
//! - `serde`: (de)serialize a [`SparseVector`] as an `{index: value}` map
//! - `ndarray`: use one-dimensional `ndarray` arrays as dense operands

/// Dense operand traits.
///
/// See [`DenseVector`] and [`DenseVectorMut`].
pub mod dense;

/// Error types.
pub mod errors;

/// The sparse vector itself.
///
/// See [`SparseVector`] for details.
pub mod sparse_vector;

// re-exports
pub use self::dense::{DenseVector, DenseVectorMut};
pub use self::errors::{Result, SparseVectorError};
pub use self::sparse_vector::{Iter, SparseVector};
