use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::*;

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
  type Output = Self;

  /// `result[row, col] = sum_i self[row, i] * rhs[i, col]`
  fn mul(self, rhs: Self) -> Self {
    Matrix::from_fn(|row, col| {
      (0..N).fold(T::zero(), |acc, i| acc + self[(row, i)] * rhs[(i, col)])
    })
  }
}

impl<T: Scalar, const N: usize> Mul<T> for Matrix<T, N> {
  type Output = Self;

  fn mul(self, scalar: T) -> Self {
    self.map(|v| v * scalar)
  }
}

/// The vector is a row vector multiplied from the left: `result[col] = sum_row self[row, col] *
/// v[row]`. Together with the transform builders this makes `(a * b) * v` apply `a` first.
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
  type Output = Vector<T, N>;

  fn mul(self, v: Vector<T, N>) -> Vector<T, N> {
    Vector::from_fn(|col| {
      (0..N).fold(T::zero(), |acc, row| acc + self[(row, col)] * v[row])
    })
  }
}

impl<T: Scalar, const N: usize> Div<T> for Matrix<T, N> {
  type Output = Self;

  fn div(self, scalar: T) -> Self {
    self.map(|v| v / scalar)
  }
}

impl<T: Scalar, const N: usize> Add for Matrix<T, N> {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
  }
}

impl<T: Scalar, const N: usize> Sub for Matrix<T, N> {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
  }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Matrix<T, N> {
  type Output = Self;

  fn neg(self) -> Self {
    self.map(|v| -v)
  }
}

macro_rules! impl_scalar_ops {
  ($($S:ty),+) => {
    $(
      impl<const N: usize> Mul<Matrix<$S, N>> for $S {
        type Output = Matrix<$S, N>;

        fn mul(self, matrix: Matrix<$S, N>) -> Matrix<$S, N> {
          matrix * self
        }
      }
    )+
  };
}

impl_scalar_ops!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

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

  #[test]
  fn scalar_products() {
    let m2: Mat2f = mat![1., 2.; 3., 4.];
    assert_eq!(m2 * 2., mat![2., 4.; 6., 8.]);
    assert_eq!(2. * m2, m2 * 2.);

    #[rustfmt::skip]
    let m3x3 = mat![
       3.,  6.,  9.;
      12., 15., 18.;
      21., 24., 27.;
    ];
    assert_eq!(m3() * 3., m3x3);
    assert_eq!(m3x3 / 3., m3());
  }

  #[test]
  fn matrix_products() {
    let m2: Mat2f = mat![1., 2.; 3., 4.];
    assert_eq!(m2 * m2, mat![7., 10.; 15., 22.]);

    #[rustfmt::skip]
    let m3m = mat![
       30.,  36.,  42.;
       66.,  81.,  96.;
      102., 126., 150.;
    ];
    assert_eq!(m3() * m3(), m3m);
    assert_eq!(m3() * Mat3f::identity(), m3());
    assert_eq!(Mat3f::identity() * m3(), m3());
  }

  #[test]
  fn vector_product_reads_columns() {
    let m: Matrix<i32, 2> = mat![1, 2; 3, 4];
    // (x, y) * m = (1x + 3y, 2x + 4y)
    assert_eq!(m * vec2(1, 0), vec2(1, 2));
    assert_eq!(m * vec2(0, 1), vec2(3, 4));
    assert_eq!(m * vec2(5, 6), vec2(23, 34));
  }

  #[test]
  fn vector_product_composes_left_to_right() {
    let a: Matrix<i32, 2> = mat![1, 2; 3, 4];
    let b: Matrix<i32, 2> = mat![0, -1; 1, 0];
    let v = vec2(5, 6);
    assert_eq!((a * b) * v, b * (a * v));
  }

  #[test]
  fn element_wise() {
    let a: Matrix<i32, 2> = mat![1, 2; 3, 4];
    let b: Matrix<i32, 2> = mat![4, 3; 2, 1];
    assert_eq!(a + b, mat![5, 5; 5, 5]);
    assert_eq!(a - b, mat![-3, -1; 1, 3]);
    assert_eq!(-a, mat![-1, -2; -3, -4]);
    assert_eq!(a - a, Matrix::zero());
  }
}
