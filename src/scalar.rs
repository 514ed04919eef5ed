//!
//! Trait for types that can be used as a vector element
//!
use num_traits::Zero;
use std::ops::{Add, Mul, Sub};

/// Element type of `Vector` and `Matrix`.
///
/// `Zero` gives the default value elements are filled with on construction.
/// Implemented for all numeric types with copy semantics and closed
/// add/sub/mul.
pub trait Scalar:
    Copy + PartialEq + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy + PartialEq + Zero + Add<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}
