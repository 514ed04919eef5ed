//!
//! `Vector` bounds-checked numeric vector with a stored start index
//!
//! Elements live in an exclusively-owned contiguous buffer, addressed
//! zero-based. The start index is metadata recorded at construction; the
//! triangular `Matrix` uses it to place a row inside the full square
//! (see `crate::matrix`).
//!
use crate::error::LinalgError;
use crate::scalar::Scalar;
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub, SubAssign};

/// Maximum number of elements a `Vector` can be constructed with
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Dense vector of `size` scalars with a stored start index.
///
/// * construction validates `0 < size <= MAX_VECTOR_SIZE` and fills
///   elements with `T::zero()`
/// * `get`/`get_mut` are the checked accessors, `v[i]` the panicking sugar
/// * `clone`/`clone_from` deep-copy, so instances never share storage
///
#[derive(Debug, Serialize, Deserialize)]
pub struct Vector<T: Scalar> {
    /// owned element buffer, indexed `0..len`
    elements: Vec<T>,
    /// position of the first element inside an enclosing structure
    start_index: usize,
}

impl<T: Scalar> Vector<T> {
    /// Create a zero-filled vector with start index 0.
    pub fn new(size: usize) -> Result<Vector<T>, LinalgError> {
        Vector::with_start_index(size, 0)
    }
    /// Create a zero-filled vector with the given start index.
    ///
    /// Fails with `InvalidSize` when `size` is zero or above
    /// `MAX_VECTOR_SIZE`, and with `InvalidIndex` when `start_index` is
    /// outside the addressable range.
    pub fn with_start_index(size: usize, start_index: usize) -> Result<Vector<T>, LinalgError> {
        if size == 0 || size > MAX_VECTOR_SIZE {
            return Err(LinalgError::InvalidSize { size });
        }
        if start_index >= MAX_VECTOR_SIZE {
            return Err(LinalgError::InvalidIndex { index: start_index });
        }
        Ok(Vector {
            elements: vec![T::zero(); size],
            start_index,
        })
    }
    /// Create a vector holding a copy of the given elements.
    pub fn from_slice(values: &[T]) -> Result<Vector<T>, LinalgError> {
        Vector::from_slice_with_start_index(values, 0)
    }
    /// `from_slice` with an explicit start index.
    pub fn from_slice_with_start_index(
        values: &[T],
        start_index: usize,
    ) -> Result<Vector<T>, LinalgError> {
        let mut v = Vector::with_start_index(values.len(), start_index)?;
        v.elements.copy_from_slice(values);
        Ok(v)
    }
    /// Number of stored elements
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Always false, a live vector has at least one element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    /// Stored start index
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }
    /// Checked element read. Valid indexes are `0 <= index < len`.
    pub fn get(&self, index: usize) -> Result<&T, LinalgError> {
        let size = self.elements.len();
        self.elements
            .get(index)
            .ok_or(LinalgError::IndexOutOfRange { index, size })
    }
    /// Checked element write access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinalgError> {
        let size = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, size })
    }
    /// Get an iterator on (index, item).
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.elements.iter().copied().enumerate()
    }
    /// Copy of the element buffer, for inspection
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
    /// Element-wise sum. Fails with `SizeMismatch` when lengths differ;
    /// neither operand is touched on failure. The result keeps `self`'s
    /// start index.
    pub fn checked_add(&self, other: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.check_same_size(other)?;
        let mut ret = self.clone();
        for (i, x) in other.iter() {
            ret.elements[i] = ret.elements[i] + x;
        }
        Ok(ret)
    }
    /// Element-wise difference. Fails with `SizeMismatch` when lengths
    /// differ.
    pub fn checked_sub(&self, other: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.check_same_size(other)?;
        let mut ret = self.clone();
        for (i, x) in other.iter() {
            ret.elements[i] = ret.elements[i] - x;
        }
        Ok(ret)
    }
    /// Dot product, the sum of element-wise products. Fails with
    /// `SizeMismatch` when lengths differ.
    pub fn dot(&self, other: &Vector<T>) -> Result<T, LinalgError> {
        self.check_same_size(other)?;
        let mut acc = T::zero();
        for (x, y) in self.elements.iter().zip(other.elements.iter()) {
            acc = acc + *x * *y;
        }
        Ok(acc)
    }
    fn check_same_size(&self, other: &Vector<T>) -> Result<(), LinalgError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(LinalgError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }
}

/// Deep copy. `clone_from` re-fills the destination from the source,
/// reusing its allocation when the sizes already match.
impl<T: Scalar> Clone for Vector<T> {
    fn clone(&self) -> Vector<T> {
        Vector {
            elements: self.elements.clone(),
            start_index: self.start_index,
        }
    }
    fn clone_from(&mut self, source: &Vector<T>) {
        self.elements.clone_from(&source.elements);
        self.start_index = source.start_index;
    }
}

/// Equal iff sizes and all elements match.
/// The start index is metadata and takes no part in comparison.
impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Vector<T>) -> bool {
        self.elements == other.elements
    }
}

/// Implement index access, vec[i]
impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

/// Implement index write access, vec[i] = 10
impl<T: Scalar> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

/// add constant to every element
/// `Vector<T> + T = Vector<T>`
impl<T: Scalar> Add<T> for Vector<T> {
    type Output = Vector<T>;
    fn add(mut self, other: T) -> Vector<T> {
        for x in self.elements.iter_mut() {
            *x = *x + other;
        }
        self
    }
}

/// subtract constant from every element
/// `Vector<T> - T = Vector<T>`
impl<T: Scalar> Sub<T> for Vector<T> {
    type Output = Vector<T>;
    fn sub(mut self, other: T) -> Vector<T> {
        for x in self.elements.iter_mut() {
            *x = *x - other;
        }
        self
    }
}

/// multiply every element by a constant
/// `Vector<T> * T = Vector<T>`
impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;
    fn mul(mut self, other: T) -> Vector<T> {
        for x in self.elements.iter_mut() {
            *x = *x * other;
        }
        self
    }
}

/// Element-wise addition `&a + &b`.
/// Panics on size mismatch; use `checked_add` to handle it.
impl<'a, 'b, T: Scalar> Add<&'a Vector<T>> for &'b Vector<T> {
    type Output = Vector<T>;
    fn add(self, other: &'a Vector<T>) -> Vector<T> {
        match self.checked_add(other) {
            Ok(ret) => ret,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Element-wise subtraction `&a - &b`.
/// Panics on size mismatch; use `checked_sub` to handle it.
impl<'a, 'b, T: Scalar> Sub<&'a Vector<T>> for &'b Vector<T> {
    type Output = Vector<T>;
    fn sub(self, other: &'a Vector<T>) -> Vector<T> {
        match self.checked_sub(other) {
            Ok(ret) => ret,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Dot product `&a * &b`, yielding a scalar.
/// Panics on size mismatch; use `dot` to handle it.
impl<'a, 'b, T: Scalar> Mul<&'a Vector<T>> for &'b Vector<T> {
    type Output = T;
    fn mul(self, other: &'a Vector<T>) -> T {
        match self.dot(other) {
            Ok(ret) => ret,
            Err(err) => panic!("{}", err),
        }
    }
}

/// In-place element-wise addition `a += &b`
/// This does not cause re-allocation
impl<'a, T: Scalar> AddAssign<&'a Vector<T>> for Vector<T> {
    fn add_assign(&mut self, other: &'a Vector<T>) {
        assert_eq!(self.len(), other.len());
        for (i, x) in other.iter() {
            self.elements[i] = self.elements[i] + x;
        }
    }
}

/// In-place element-wise subtraction `a -= &b`
/// This does not cause re-allocation
impl<'a, T: Scalar> SubAssign<&'a Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, other: &'a Vector<T>) {
        assert_eq!(self.len(), other.len());
        for (i, x) in other.iter() {
            self.elements[i] = self.elements[i] - x;
        }
    }
}

/// for approx `assert_abs_diff_eq` on float-element vectors
impl<T> AbsDiffEq for Vector<T>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .elements
                .iter()
                .zip(other.elements.iter())
                .all(|(x, y)| T::abs_diff_eq(x, y, epsilon))
    }
}
