use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SparseVectorError {
    /// Exponent passed to `lp` was zero, negative or NaN.
    #[error("argument must be greater than 0, got {0}")]
    InvalidExponent(f64),

    /// `from_parts` got index and value vectors of different lengths.
    #[error("indices and values must have the same length ({indices} != {values})")]
    LengthMismatch { indices: usize, values: usize },

    /// `from_parts` got an index not greater than the one before it.
    #[error("indices must be strictly increasing, violated at position {position}")]
    UnsortedIndices { position: usize },
}

/// Result type alias for sparsevec-core operations.
pub type Result<T> = std::result::Result<T, SparseVectorError>;
