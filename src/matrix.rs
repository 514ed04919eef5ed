//!
//! `Matrix` upper-triangular square matrix stored as a vector of rows
//!
//! Row `i` of an n-by-n matrix stores only the columns `i..n`, as a
//! `Vector` of length `n - i` whose start index records the row's offset
//! into the full square. `get`/`get_mut` take absolute column numbers and
//! translate them through that start index.
//!
use crate::error::LinalgError;
use crate::scalar::Scalar;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Sub};

/// Maximum dimension a `Matrix` can be constructed with
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Upper-triangular n-by-n matrix of scalars.
#[derive(Debug, Serialize, Deserialize)]
pub struct Matrix<T: Scalar> {
    /// triangle rows, row `i` has length `n - i` and start index `i`
    rows: Vec<Vector<T>>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled upper-triangular matrix of the given dimension.
    ///
    /// Fails with `InvalidSize` when `size` is zero or above
    /// `MAX_MATRIX_SIZE`.
    pub fn new(size: usize) -> Result<Matrix<T>, LinalgError> {
        if size == 0 || size > MAX_MATRIX_SIZE {
            return Err(LinalgError::InvalidSize { size });
        }
        let mut rows = Vec::with_capacity(size);
        for i in 0..size {
            rows.push(Vector::with_start_index(size - i, i)?);
        }
        Ok(Matrix { rows })
    }
    /// Matrix dimension (number of rows and columns)
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }
    /// Checked row access.
    pub fn row(&self, index: usize) -> Result<&Vector<T>, LinalgError> {
        let size = self.size();
        self.rows
            .get(index)
            .ok_or(LinalgError::IndexOutOfRange { index, size })
    }
    /// Checked mutable row access.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut Vector<T>, LinalgError> {
        let size = self.size();
        self.rows
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, size })
    }
    /// Checked element read at row `i`, absolute column `j`.
    ///
    /// `IndexOutOfRange` when `i` or `j` is past the dimension,
    /// `InvalidIndex` when `j < i` (below the stored triangle).
    pub fn get(&self, i: usize, j: usize) -> Result<&T, LinalgError> {
        let offset = self.column_offset(i, j)?;
        self.rows[i].get(offset)
    }
    /// Checked element write access at row `i`, absolute column `j`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, LinalgError> {
        let offset = self.column_offset(i, j)?;
        self.rows[i].get_mut(offset)
    }
    /// Map an absolute column to the row-local storage slot.
    fn column_offset(&self, i: usize, j: usize) -> Result<usize, LinalgError> {
        let size = self.size();
        if i >= size {
            return Err(LinalgError::IndexOutOfRange { index: i, size });
        }
        if j >= size {
            return Err(LinalgError::IndexOutOfRange { index: j, size });
        }
        let start = self.rows[i].start_index();
        if j < start {
            return Err(LinalgError::InvalidIndex { index: j });
        }
        Ok(j - start)
    }
    /// Element-wise sum of two triangles. Fails with `SizeMismatch` when
    /// dimensions differ; neither operand is touched on failure.
    pub fn checked_add(&self, other: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        self.check_same_size(other)?;
        let mut rows = Vec::with_capacity(self.size());
        for (a, b) in self.rows.iter().zip(other.rows.iter()) {
            rows.push(a.checked_add(b)?);
        }
        Ok(Matrix { rows })
    }
    /// Element-wise difference of two triangles. Fails with `SizeMismatch`
    /// when dimensions differ.
    pub fn checked_sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        self.check_same_size(other)?;
        let mut rows = Vec::with_capacity(self.size());
        for (a, b) in self.rows.iter().zip(other.rows.iter()) {
            rows.push(a.checked_sub(b)?);
        }
        Ok(Matrix { rows })
    }
    fn check_same_size(&self, other: &Matrix<T>) -> Result<(), LinalgError> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(LinalgError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            })
        }
    }
}

/// Deep copy, row by row. `clone_from` reuses row allocations where the
/// dimensions already match.
impl<T: Scalar> Clone for Matrix<T> {
    fn clone(&self) -> Matrix<T> {
        Matrix {
            rows: self.rows.clone(),
        }
    }
    fn clone_from(&mut self, source: &Matrix<T>) {
        self.rows.clone_from(&source.rows);
    }
}

/// Equal iff dimensions and all stored elements match.
impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        self.rows == other.rows
    }
}

/// Implement row access, mat[i]
impl<T: Scalar> Index<usize> for Matrix<T> {
    type Output = Vector<T>;
    fn index(&self, index: usize) -> &Vector<T> {
        &self.rows[index]
    }
}

/// Implement mutable row access, mat[i][k] = 10
/// (`k` is the row-local slot, not the absolute column)
impl<T: Scalar> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Vector<T> {
        &mut self.rows[index]
    }
}

/// Element-wise addition `&a + &b`.
/// Panics on dimension mismatch; use `checked_add` to handle it.
impl<'a, 'b, T: Scalar> Add<&'a Matrix<T>> for &'b Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, other: &'a Matrix<T>) -> Matrix<T> {
        match self.checked_add(other) {
            Ok(ret) => ret,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Element-wise subtraction `&a - &b`.
/// Panics on dimension mismatch; use `checked_sub` to handle it.
impl<'a, 'b, T: Scalar> Sub<&'a Matrix<T>> for &'b Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, other: &'a Matrix<T>) -> Matrix<T> {
        match self.checked_sub(other) {
            Ok(ret) => ret,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1 => true ; "size one")]
    #[test_case(5 => true ; "small size")]
    #[test_case(0 => false ; "zero size")]
    #[test_case(MAX_MATRIX_SIZE + 1 => false ; "too large")]
    fn matrix_construction_size(size: usize) -> bool {
        Matrix::<i32>::new(size).is_ok()
    }

    #[test]
    fn matrix_triangular_shape() {
        let m: Matrix<i32> = Matrix::new(5).unwrap();
        assert_eq!(m.size(), 5);
        for i in 0..5 {
            let row = m.row(i).unwrap();
            assert_eq!(row.len(), 5 - i);
            assert_eq!(row.start_index(), i);
        }
        assert!(matches!(
            m.row(5),
            Err(LinalgError::IndexOutOfRange { index: 5, size: 5 })
        ));
    }

    #[test]
    fn matrix_set_and_get_element() {
        let n = 4;
        let mut m: Matrix<i32> = Matrix::new(n).unwrap();
        for i in 0..n {
            for j in i..n {
                *m.get_mut(i, j).unwrap() = (i * n + j) as i32;
            }
        }
        for i in 0..n {
            for j in i..n {
                assert_eq!(*m.get(i, j).unwrap(), (i * n + j) as i32);
            }
        }
        // diagonal sits at row-local slot 0
        assert_eq!(m[2][0], (2 * n + 2) as i32);
    }

    #[test]
    fn matrix_get_invalid_column() {
        let m: Matrix<i32> = Matrix::new(4).unwrap();
        // below the stored triangle
        assert_eq!(
            m.get(2, 1).copied(),
            Err(LinalgError::InvalidIndex { index: 1 })
        );
        // past the dimension
        assert_eq!(
            m.get(2, 4).copied(),
            Err(LinalgError::IndexOutOfRange { index: 4, size: 4 })
        );
        assert_eq!(
            m.get(4, 0).copied(),
            Err(LinalgError::IndexOutOfRange { index: 4, size: 4 })
        );
    }

    #[test]
    fn matrix_copy_is_equal_to_source() {
        let mut m: Matrix<i32> = Matrix::new(3).unwrap();
        *m.get_mut(0, 2).unwrap() = 7;
        *m.get_mut(1, 1).unwrap() = 3;
        let c = m.clone();
        assert_eq!(c, m);
    }

    #[test]
    fn matrix_copy_has_its_own_memory() {
        let mut m1: Matrix<i32> = Matrix::new(3).unwrap();
        *m1.get_mut(0, 1).unwrap() = 1;
        let mut m2 = m1.clone();
        *m2.get_mut(0, 1).unwrap() = 2;
        assert_ne!(m1, m2);
        assert_eq!(*m1.get(0, 1).unwrap(), 1);
    }

    #[test]
    fn matrix_assign_changes_size() {
        let mut a: Matrix<i32> = Matrix::new(5).unwrap();
        let b: Matrix<i32> = Matrix::new(3).unwrap();
        a.clone_from(&b);
        assert_eq!(a.size(), b.size());
        assert_eq!(a, b);
    }

    #[test]
    fn matrix_different_sizes_are_not_equal() {
        let a: Matrix<i32> = Matrix::new(5).unwrap();
        let b: Matrix<i32> = Matrix::new(3).unwrap();
        assert!(a != b);
    }

    #[test]
    fn matrix_add_sub() {
        let n = 3;
        let mut a: Matrix<i32> = Matrix::new(n).unwrap();
        let mut b: Matrix<i32> = Matrix::new(n).unwrap();
        for i in 0..n {
            for j in i..n {
                *a.get_mut(i, j).unwrap() = 1;
                *b.get_mut(i, j).unwrap() = (j - i) as i32;
            }
        }
        let sum = a.checked_add(&b).unwrap();
        for i in 0..n {
            for j in i..n {
                assert_eq!(*sum.get(i, j).unwrap(), 1 + (j - i) as i32);
            }
        }
        let diff = &sum - &b;
        assert_eq!(diff, a);
        // operands untouched
        assert_eq!(*a.get(0, 0).unwrap(), 1);
        assert_eq!(*b.get(0, 2).unwrap(), 2);
    }

    #[test]
    fn matrix_ops_size_mismatch() {
        let a: Matrix<i32> = Matrix::new(3).unwrap();
        let b: Matrix<i32> = Matrix::new(5).unwrap();
        assert_eq!(
            a.checked_add(&b),
            Err(LinalgError::SizeMismatch { left: 3, right: 5 })
        );
        assert_eq!(
            a.checked_sub(&b),
            Err(LinalgError::SizeMismatch { left: 3, right: 5 })
        );
    }

    #[test]
    #[should_panic]
    fn matrix_add_mismatch_panics() {
        let a: Matrix<i32> = Matrix::new(3).unwrap();
        let b: Matrix<i32> = Matrix::new(5).unwrap();
        let _ = &a + &b;
    }
}
