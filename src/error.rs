//!
//! Error type for vector/matrix precondition violations
//!
use thiserror::Error;

/// Raised synchronously by the operation that violates a precondition.
/// Operands are never left partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Construction with a zero size or a size above the fixed maximum
    #[error("invalid size {size}")]
    InvalidSize { size: usize },
    /// Start index (or matrix column) outside the addressable range
    #[error("invalid index {index}")]
    InvalidIndex { index: usize },
    /// Element access past the end of the stored buffer
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// Element-wise arithmetic between operands of different sizes
    #[error("size mismatch ({left} vs {right})")]
    SizeMismatch { left: usize, right: usize },
}
