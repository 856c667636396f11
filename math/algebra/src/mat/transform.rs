//! Homogeneous 4x4 transforms.
//!
//! Each builder starts from the identity and overwrites a few linear positions. Translation
//! lives at 12, 13 and 14, so points are transformed as `matrix * point` with the point
//! multiplied from the left, and the flat storage matches what an OpenGL style column-major
//! uniform upload expects.

use crate::*;

pub fn identity4<T: Scalar>() -> Matrix<T, 4> {
  Matrix::identity()
}

fn from_identity<T: Scalar>(cells: &[(usize, T)]) -> Matrix<T, 4> {
  let mut data = identity4::<T>().into_container();
  for &(index, value) in cells {
    data[index] = value;
  }
  data.into()
}

pub fn translate<T: Scalar>(x: T, y: T, z: T) -> Matrix<T, 4> {
  from_identity(&[(12, x), (13, y), (14, z)])
}

pub fn translate_vec<T: Scalar>(v: Vector<T, 3>) -> Matrix<T, 4> {
  translate(v.x(), v.y(), v.z())
}

pub fn scale<T: Scalar>(x: T, y: T, z: T) -> Matrix<T, 4> {
  from_identity(&[(0, x), (5, y), (10, z)])
}

pub fn scale_vec<T: Scalar>(v: Vector<T, 3>) -> Matrix<T, 4> {
  scale(v.x(), v.y(), v.z())
}

/// Rotate `theta` counterclockwise around the x axis. A bare float is taken as radians.
pub fn rotate_x<T: Real>(theta: impl IntoRad<T>) -> Matrix<T, 4> {
  let (s, c) = theta.into_rad().sin_cos();
  from_identity(&[(5, c), (6, s), (9, -s), (10, c)])
}

pub fn rotate_y<T: Real>(theta: impl IntoRad<T>) -> Matrix<T, 4> {
  let (s, c) = theta.into_rad().sin_cos();
  from_identity(&[(0, c), (2, -s), (8, s), (10, c)])
}

pub fn rotate_z<T: Real>(theta: impl IntoRad<T>) -> Matrix<T, 4> {
  let (s, c) = theta.into_rad().sin_cos();
  from_identity(&[(0, c), (1, s), (4, -s), (5, c)])
}
