use crate::*;

/// Square matrices whose determinant is defined by cofactor expansion.
///
/// Implemented for every dimension from 1 to 8. Expansion along the first row costs O(N!) and
/// recurses N levels deep, which is fine for the small transforms this crate targets but is a
/// hard ceiling for larger systems.
///
/// Cofactor signs need negation, so unsigned element types have no determinant:
///
/// ```compile_fail
/// use squaremat_algebra::{Determinant, Matrix};
///
/// let _ = Matrix::<u32, 2>::new([[1, 2], [3, 4]]).determinant();
/// ```
pub trait Determinant<T: SignedScalar> {
  #[must_use]
  fn determinant(&self) -> T;

  /// The determinant of what is left after striking `row` and `col`.
  ///
  /// # Panics
  ///
  /// If `row` or `col` is out of range. Use [`Matrix::cofactor`] for a checked version.
  #[must_use]
  fn minor(&self, row: usize, col: usize) -> T;
}

/// Square matrices that have a lower dimension to strike a row and a column into.
///
/// There is no impl for 1x1 matrices, a submatrix of those is a type error.
pub trait Submatrix<T: SignedScalar> {
  type Minor;

  fn submatrix(&self, row: usize, col: usize) -> Result<Self::Minor, MatrixError>;
}

impl<T: SignedScalar> Determinant<T> for Matrix<T, 1> {
  fn determinant(&self) -> T {
    self[0]
  }

  /// The empty matrix left over has determinant one.
  fn minor(&self, row: usize, col: usize) -> T {
    assert!(row == 0 && col == 0, "minor ({row}, {col}) out of a 1x1 matrix");
    T::one()
  }
}

macro_rules! impl_cofactor_expansion {
  ($($n:literal => $m:literal),+ $(,)?) => {
    $(
      impl<T: SignedScalar> Determinant<T> for Matrix<T, $n> {
        fn determinant(&self) -> T {
          (0..$n).fold(T::zero(), |acc, col| acc + self[col] * self.signed_minor(0, col))
        }

        fn minor(&self, row: usize, col: usize) -> T {
          self.strike::<$m>(row, col).determinant()
        }
      }

      impl<T: SignedScalar> Submatrix<T> for Matrix<T, $n> {
        type Minor = Matrix<T, $m>;

        fn submatrix(&self, row: usize, col: usize) -> Result<Self::Minor, MatrixError> {
          SquareArray::<T, $n>::to_linear_index(row, col)?;
          Ok(self.strike(row, col))
        }
      }
    )+
  };
}

impl_cofactor_expansion!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);
