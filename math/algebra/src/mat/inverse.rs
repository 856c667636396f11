use serde::{Deserialize, Serialize};

use crate::*;

/// Controls when [`Matrix::invert_with`] treats a determinant as zero.
///
/// The default threshold is zero, so only a bit-exact zero (or negative zero) determinant is
/// rejected. Floating point matrices that are merely close to singular still invert, into very
/// large values.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseOption<T> {
  pub singular_threshold: T,
}

impl<T: Scalar> Default for InverseOption<T> {
  fn default() -> Self {
    Self {
      singular_threshold: T::zero(),
    }
  }
}

impl<T: SignedScalar> InverseOption<T> {
  pub fn with_threshold(singular_threshold: T) -> Self {
    Self { singular_threshold }
  }

  /// A NaN determinant is never considered singular.
  pub fn is_singular(&self, det: T) -> bool {
    let threshold = self.singular_threshold.abs();
    det <= threshold && det >= -threshold
  }
}

impl<T: SignedScalar, const N: usize> Matrix<T, N>
where
  Self: Determinant<T>,
{
  pub(crate) fn signed_minor(&self, row: usize, col: usize) -> T {
    let minor = self.minor(row, col);
    if (row + col) % 2 == 1 {
      -minor
    } else {
      minor
    }
  }

  /// The minor at `(row, col)` signed by the checkerboard `(-1)^(row + col)`.
  pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
    SquareArray::<T, N>::to_linear_index(row, col)?;
    Ok(self.signed_minor(row, col))
  }

  /// The transposed cofactor matrix: `adjugate[row, col] = cofactor(col, row)`.
  #[must_use]
  pub fn adjugate(&self) -> Self {
    Self::from_fn(|row, col| self.signed_minor(col, row))
  }
}

impl<T: Real, const N: usize> Matrix<T, N>
where
  Self: Determinant<T>,
{
  /// Invert through the adjugate, failing with [`MatrixError::Singular`] when the determinant
  /// is exactly zero.
  ///
  /// Only real element types invert, integer division would truncate the result:
  ///
  /// ```compile_fail
  /// use squaremat_algebra::{mat, Matrix};
  ///
  /// let m: Matrix<i32, 2> = mat![2, 0; 0, 1];
  /// let _ = m.invert();
  /// ```
  pub fn invert(&self) -> Result<Self, MatrixError> {
    self.invert_with(&InverseOption::default())
  }

  pub fn invert_with(&self, option: &InverseOption<T>) -> Result<Self, MatrixError> {
    let det = self.determinant();
    if option.is_singular(det) {
      log::debug!(
        "refuse to invert {N}x{N} matrix, determinant {det:?} is within {:?} of zero",
        option.singular_threshold
      );
      return Err(MatrixError::Singular);
    }
    Ok(self.adjugate() * (T::one() / det))
  }

  #[must_use]
  pub fn inverse_or_identity(&self) -> Self {
    self.invert().unwrap_or(Self::identity())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[rustfmt::skip]
  fn m3() -> Mat3f {
    mat![
      1., 2., 3.;
      4., 5., 6.;
      7., 8., 9.;
    ]
  }

  fn m2() -> Mat2f {
    mat![1., 2.; 3., 4.]
  }

  #[test]
  fn cofactors() {
    assert_eq!(m2().cofactor(0, 1), Ok(-3.));
    assert_eq!(m3().cofactor(2, 2), Ok(-3.));
    assert!(m3().cofactor(1, 3).is_err());
    let single: Matrix<f32, 1> = mat![5.];
    assert_eq!(single.cofactor(0, 0), Ok(1.));
  }

  #[test]
  fn adjugates() {
    assert_eq!(m2().adjugate(), mat![4., -2.; -3., 1.]);

    #[rustfmt::skip]
    let m3a = mat![
      -3.,   6., -3.;
       6., -12.,  6.;
      -3.,   6., -3.;
    ];
    assert_eq!(m3().adjugate(), m3a);
  }

  #[test]
  fn adjugate_is_transposed_for_asymmetric_matrix() {
    #[rustfmt::skip]
    let m: Matrix<i32, 3> = mat![
      1, 2, 0;
      0, 1, 3;
      4, 0, 1;
    ];
    #[rustfmt::skip]
    let expected = mat![
       1, -2,  6;
      12,  1, -3;
      -4,  8,  1;
    ];
    let adjugate = m.adjugate();
    assert_eq!(adjugate, expected);
    assert_ne!(adjugate, adjugate.transpose());
    assert_eq!(m.determinant(), 25);
    assert_eq!(m * adjugate, Matrix::identity() * 25);
    assert_eq!(adjugate * m, Matrix::identity() * 25);
  }

  #[test]
  fn inversions() {
    assert_eq!(m2().invert(), Ok(mat![-2., 1.; 1.5, -0.5]));
    let inverse = m2().invert().unwrap();
    assert_eq!(m2() * inverse, Mat2f::identity());
    assert_eq!(inverse * m2(), Mat2f::identity());
  }

  #[test]
  fn singular_inversion_fails() {
    assert_eq!(m3().invert(), Err(MatrixError::Singular));
    assert_eq!(Mat4f::zero().invert(), Err(MatrixError::Singular));
    assert_eq!(m3().inverse_or_identity(), Mat3f::identity());
  }

  #[test]
  fn integer_matrix_inverts_through_float() {
    let m: Matrix<i32, 2> = mat![2, 0; 0, 1];
    assert_eq!(m.determinant(), 2);
    assert_eq!(m.adjugate(), mat![1, 0; 0, 2]);
    let inverse = m.map(f64::from).invert().unwrap();
    assert_eq!(inverse, mat![0.5, 0.; 0., 1.]);
    assert_eq!(m.map(f64::from) * inverse, Mat2d::identity());
  }

  #[test]
  fn single_element_inverse() {
    let m: Matrix<f64, 1> = mat![4.];
    assert_eq!(m.invert(), Ok(mat![0.25]));
  }

  #[test]
  fn threshold() {
    let nearly: Mat2d = mat![1., 1.; 1., 1. + 1e-12];
    assert!(nearly.invert().is_ok());
    assert_eq!(
      nearly.invert_with(&InverseOption::with_threshold(1e-9)),
      Err(MatrixError::Singular)
    );
    // the sign of the threshold does not matter
    assert_eq!(
      nearly.invert_with(&InverseOption::with_threshold(-1e-9)),
      Err(MatrixError::Singular)
    );
    assert!(InverseOption::<f32>::default().is_singular(-0.));
    assert!(!InverseOption::<f32>::default().is_singular(f32::NAN));
  }

  #[test]
  fn inverse_of_4x4_composes_to_identity() {
    #[rustfmt::skip]
    let m: Mat4d = mat![
      2., 0., 0., 0.;
      0., 4., 0., 0.;
      0., 0., 8., 0.;
      1., 2., 3., 1.;
    ];
    let inverse = m.invert().unwrap();
    assert_eq!(m * inverse, Mat4d::identity());
    assert_eq!(inverse * m, Mat4d::identity());
    assert_eq!(inverse.invert(), Ok(m));
  }
}
