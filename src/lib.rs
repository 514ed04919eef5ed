//!
//! Bounds-checked dense vector with a stored start index, and the
//! upper-triangular matrix built on top of it.
//!
//! Both types have value semantics: deep `clone`/`clone_from`, element-wise
//! equality, and precondition-checked construction, access, and arithmetic
//! that reports `LinalgError` to the caller.
//!
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use error::LinalgError;
pub use matrix::{Matrix, MAX_MATRIX_SIZE};
pub use scalar::Scalar;
pub use vector::{Vector, MAX_VECTOR_SIZE};
