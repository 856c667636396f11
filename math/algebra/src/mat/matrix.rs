use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::*;

/// A square matrix of `T` over dimension `N`, stored row-major in a [`SquareArray`].
///
/// Every operation returns a fresh value and leaves its operands untouched.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
  serialize = "T: Serialize",
  deserialize = "T: Deserialize<'de> + Copy"
))]
pub struct Matrix<T, const N: usize> {
  data: SquareArray<T, N>,
}

pub type Mat2f = Matrix<f32, 2>;
pub type Mat3f = Matrix<f32, 3>;
pub type Mat4f = Matrix<f32, 4>;
pub type Mat2d = Matrix<f64, 2>;
pub type Mat3d = Matrix<f64, 3>;
pub type Mat4d = Matrix<f64, 4>;

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T, const N: usize> Matrix<T, N> {
  pub const fn new(rows: [[T; N]; N]) -> Self {
    Self {
      data: SquareArray::from_rows(rows),
    }
  }

  pub fn from_fn(f: impl FnMut(usize, usize) -> T) -> Self {
    SquareArray::from_fn(f).into()
  }

  pub fn container(&self) -> &SquareArray<T, N> {
    &self.data
  }

  pub fn into_container(self) -> SquareArray<T, N> {
    self.data
  }

  /// The `N * N` row-major elements, ready to hand to a graphics api.
  pub fn as_slice(&self) -> &[T] {
    self.data.as_slice()
  }

  pub fn as_ptr(&self) -> *const T {
    self.data.as_ptr()
  }

  pub fn map<X>(self, f: impl FnMut(T) -> X) -> Matrix<X, N> {
    self.data.map(f).into()
  }

  /// Linear indices of the main diagonal.
  pub fn main_diagonal_indices() -> [usize; N] {
    std::array::from_fn(|i| i * N + i)
  }
}

impl<T: bytemuck::Pod, const N: usize> Matrix<T, N> {
  pub fn as_bytes(&self) -> &[u8] {
    self.data.as_bytes()
  }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
  pub fn zero() -> Self {
    Self::from(SquareArray::<T, N>::new())
  }

  pub fn identity() -> Self {
    let mut data = SquareArray::<T, N>::new();
    for index in Self::main_diagonal_indices() {
      data[index] = T::one();
    }
    data.into()
  }

  pub fn is_identity(&self) -> bool {
    *self == Self::identity()
  }

  /// Build from a row-major element list of exactly `N * N` elements.
  pub fn from_slice(elements: &[T]) -> Result<Self, MatrixError> {
    SquareArray::<T, N>::from_slice(elements).map(Self::from)
  }

  pub fn at(&self, row: usize, col: usize) -> Result<T, MatrixError> {
    self.data.at(row, col)
  }

  #[must_use]
  pub fn transpose(&self) -> Self {
    let mut data = self.data;
    for row in 0..N {
      for col in row + 1..N {
        data.exchange((row, col), (col, row));
      }
    }
    data.into()
  }

  /// Strike `row` and `col`, keeping the remaining elements in row-major order.
  ///
  /// `M` must be `N - 1` and both indices must be in range.
  pub(crate) fn strike<const M: usize>(&self, row: usize, col: usize) -> Matrix<T, M> {
    const { assert!(M + 1 == N, "a strike drops exactly one dimension") };
    assert!(row < N && col < N, "strike ({row}, {col}) out of a {N}x{N} matrix");

    let mut minor = SquareArray::<T, M>::new();
    let mut k = 0;
    for (i, source_row) in self.data.rows().iter().enumerate() {
      if i == row {
        continue;
      }
      for (j, v) in source_row.iter().enumerate() {
        if j == col {
          continue;
        }
        minor[k] = *v;
        k += 1;
      }
    }
    minor.into()
  }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
  fn default() -> Self {
    Self::zero()
  }
}

impl<T, const N: usize> From<SquareArray<T, N>> for Matrix<T, N> {
  fn from(data: SquareArray<T, N>) -> Self {
    Self { data }
  }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
  fn from(rows: [[T; N]; N]) -> Self {
    Self::new(rows)
  }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Matrix<T, N> {
  type Error = MatrixError;

  fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
    Self::from_slice(elements)
  }
}

impl<T, const N: usize> Index<IndexPair> for Matrix<T, N> {
  type Output = T;

  fn index(&self, index: IndexPair) -> &T {
    &self.data[index]
  }
}

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.data[index]
  }
}

impl<T, const N: usize> AsRef<[T]> for Matrix<T, N> {
  fn as_ref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T: fmt::Debug, const N: usize> fmt::Display for Matrix<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for (i, row) in self.data.rows().iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{row:?}")?;
    }
    Ok(())
  }
}

impl<T: Scalar, const N: usize> num_traits::Zero for Matrix<T, N> {
  #[inline(always)]
  fn zero() -> Self {
    Self::from(SquareArray::<T, N>::new())
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.data.iter().all(|v| v.is_zero())
  }
}

impl<T: Scalar, const N: usize> num_traits::One for Matrix<T, N> {
  #[inline(always)]
  fn one() -> Self {
    Self::identity()
  }
}
