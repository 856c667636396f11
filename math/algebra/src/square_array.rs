use std::ops::{Index, IndexMut};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

/// A `(row, col)` position in a square.
pub type IndexPair = (usize, usize);

/// `N x N` elements of `T` stored contiguously in row-major order.
///
/// The linear index of `(row, col)` is `row * N + col`.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct SquareArray<T, const N: usize> {
  rows: [[T; N]; N],
}

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for SquareArray<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for SquareArray<T, N> {}

impl<T, const N: usize> SquareArray<T, N> {
  pub const LEN: usize = N * N;

  pub const fn from_rows(rows: [[T; N]; N]) -> Self {
    Self { rows }
  }

  pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
    Self {
      rows: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
    }
  }

  pub fn to_linear_index(row: usize, col: usize) -> Result<usize, MatrixError> {
    if row < N && col < N {
      Ok(row * N + col)
    } else {
      Err(MatrixError::IndexOutOfRange {
        position: Position::Pair { row, col },
        dimension: N,
      })
    }
  }

  fn check_linear_index(index: usize) -> Result<usize, MatrixError> {
    if index < N * N {
      Ok(index)
    } else {
      Err(MatrixError::IndexOutOfRange {
        position: Position::Linear(index),
        dimension: N,
      })
    }
  }

  pub fn rows(&self) -> &[[T; N]; N] {
    &self.rows
  }

  pub fn into_rows(self) -> [[T; N]; N] {
    self.rows
  }

  /// The row-major elements as one flat slice.
  pub fn as_slice(&self) -> &[T] {
    self.rows.as_flattened()
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    self.rows.as_flattened_mut()
  }

  /// Pointer to the first of the `N * N` contiguous elements, for graphics api upload.
  pub fn as_ptr(&self) -> *const T {
    self.rows.as_ptr().cast()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
    let index = Self::to_linear_index(row, col)?;
    Ok(&mut self.as_mut_slice()[index])
  }

  pub fn get_linear_mut(&mut self, index: usize) -> Result<&mut T, MatrixError> {
    let index = Self::check_linear_index(index)?;
    Ok(&mut self.as_mut_slice()[index])
  }

  /// Exchange two elements in place. Swapping a position with itself does nothing.
  pub fn swap(&mut self, first: IndexPair, second: IndexPair) -> Result<(), MatrixError> {
    let first = Self::to_linear_index(first.0, first.1)?;
    let second = Self::to_linear_index(second.0, second.1)?;
    self.as_mut_slice().swap(first, second);
    Ok(())
  }

  /// Same as [`Self::swap`] for positions the caller already knows to be inside the square.
  pub(crate) fn exchange(&mut self, first: IndexPair, second: IndexPair) {
    self
      .as_mut_slice()
      .swap(first.0 * N + first.1, second.0 * N + second.1);
  }

  pub fn map<X>(self, mut f: impl FnMut(T) -> X) -> SquareArray<X, N> {
    SquareArray {
      rows: self.rows.map(|row| row.map(&mut f)),
    }
  }
}

impl<T: Copy, const N: usize> SquareArray<T, N> {
  /// Build from a row-major element list, which must hold exactly `N * N` elements.
  pub fn from_slice(elements: &[T]) -> Result<Self, MatrixError> {
    if elements.len() != N * N {
      return Err(MatrixError::ShapeMismatch {
        expected: N * N,
        actual: elements.len(),
      });
    }
    Ok(Self::from_fn(|row, col| elements[row * N + col]))
  }

  pub fn at(&self, row: usize, col: usize) -> Result<T, MatrixError> {
    Self::to_linear_index(row, col).map(|index| self.as_slice()[index])
  }

  pub fn at_linear(&self, index: usize) -> Result<T, MatrixError> {
    Self::check_linear_index(index).map(|index| self.as_slice()[index])
  }
}

impl<T: num_traits::Zero + Copy, const N: usize> SquareArray<T, N> {
  /// A zero filled square.
  pub fn new() -> Self {
    Self {
      rows: [[T::zero(); N]; N],
    }
  }
}

impl<T: num_traits::Zero + Copy, const N: usize> Default for SquareArray<T, N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: bytemuck::Pod, const N: usize> SquareArray<T, N> {
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(self.as_slice())
  }
}

impl<T, const N: usize> Index<IndexPair> for SquareArray<T, N> {
  type Output = T;

  fn index(&self, (row, col): IndexPair) -> &T {
    &self.rows[row][col]
  }
}

impl<T, const N: usize> IndexMut<IndexPair> for SquareArray<T, N> {
  fn index_mut(&mut self, (row, col): IndexPair) -> &mut T {
    &mut self.rows[row][col]
  }
}

impl<T, const N: usize> Index<usize> for SquareArray<T, N> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.as_slice()[index]
  }
}

impl<T, const N: usize> IndexMut<usize> for SquareArray<T, N> {
  fn index_mut(&mut self, index: usize) -> &mut T {
    &mut self.as_mut_slice()[index]
  }
}

impl<T, const N: usize> From<[[T; N]; N]> for SquareArray<T, N> {
  fn from(rows: [[T; N]; N]) -> Self {
    Self::from_rows(rows)
  }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for SquareArray<T, N> {
  type Error = MatrixError;

  fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
    Self::from_slice(elements)
  }
}

impl<T: Copy, const N: usize> TryFrom<Vec<T>> for SquareArray<T, N> {
  type Error = MatrixError;

  fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
    Self::from_slice(&elements)
  }
}

impl<T: Serialize, const N: usize> Serialize for SquareArray<T, N> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(self.as_slice())
  }
}

impl<'de, T: Deserialize<'de> + Copy, const N: usize> Deserialize<'de> for SquareArray<T, N> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let elements = Vec::<T>::deserialize(deserializer)?;
    Self::from_slice(&elements).map_err(D::Error::custom)
  }
}
