use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

/// `N` components of `T`, consumed by matrix products and the transform builders.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Vector<T, const N: usize> {
  data: [T; N],
}

pub type Vec2f = Vector<f32, 2>;
pub type Vec3f = Vector<f32, 3>;
pub type Vec4f = Vector<f32, 4>;

pub fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
  Vector::new([x, y])
}

pub fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
  Vector::new([x, y, z])
}

pub fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
  Vector::new([x, y, z, w])
}

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T, const N: usize> Vector<T, N> {
  pub const fn new(data: [T; N]) -> Self {
    Self { data }
  }

  pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
    Self {
      data: std::array::from_fn(f),
    }
  }

  pub fn data(&self) -> &[T; N] {
    &self.data
  }

  pub fn into_data(self) -> [T; N] {
    self.data
  }

  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  pub fn as_ptr(&self) -> *const T {
    self.data.as_ptr()
  }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
  pub fn zero() -> Self {
    Self {
      data: [T::zero(); N],
    }
  }

  pub fn from_slice(elements: &[T]) -> Result<Self, MatrixError> {
    let data = <[T; N]>::try_from(elements).map_err(|_| MatrixError::ShapeMismatch {
      expected: N,
      actual: elements.len(),
    })?;
    Ok(Self { data })
  }

  #[inline]
  pub fn dot(&self, other: Self) -> T {
    self
      .data
      .iter()
      .zip(other.data)
      .fold(T::zero(), |acc, (a, b)| acc + *a * b)
  }
}

impl<T: Copy> Vector<T, 3> {
  pub fn x(&self) -> T {
    self.data[0]
  }
  pub fn y(&self) -> T {
    self.data[1]
  }
  pub fn z(&self) -> T {
    self.data[2]
  }
}

impl<T: Scalar> Vector<T, 3> {
  /// The homogeneous point with `w = 1`.
  pub fn expand_with_one(self) -> Vector<T, 4> {
    let [x, y, z] = self.data;
    vec4(x, y, z, T::one())
  }
}

impl<T: Copy> Vector<T, 4> {
  pub fn x(&self) -> T {
    self.data[0]
  }
  pub fn y(&self) -> T {
    self.data[1]
  }
  pub fn z(&self) -> T {
    self.data[2]
  }
  pub fn w(&self) -> T {
    self.data[3]
  }
}

impl<T: bytemuck::Pod, const N: usize> Vector<T, N> {
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.data)
  }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
  fn default() -> Self {
    Self::zero()
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.data[index]
  }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
  fn index_mut(&mut self, index: usize) -> &mut T {
    &mut self.data[index]
  }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
  fn from(data: [T; N]) -> Self {
    Self { data }
  }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
  fn from(v: Vector<T, N>) -> Self {
    v.data
  }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
  type Error = MatrixError;

  fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
    Self::from_slice(elements)
  }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "(")?;
    for (i, v) in self.data.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{v:?}")?;
    }
    write!(f, ")")
  }
}

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(&self.data)
  }
}

impl<'de, T: Deserialize<'de> + Scalar, const N: usize> Deserialize<'de> for Vector<T, N> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let elements = Vec::<T>::deserialize(deserializer)?;
    Self::from_slice(&elements).map_err(D::Error::custom)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn accessors() {
    let v = vec3(1., 2., 3.);
    assert_eq!((v.x(), v.y(), v.z()), (1., 2., 3.));
    let p = v.expand_with_one();
    assert_eq!(p.w(), 1.);
    assert_eq!(p.as_slice(), &[1., 2., 3., 1.]);
    assert_eq!(v.dot(vec3(4., 5., 6.)), 32.);
  }

  #[test]
  fn display() {
    assert_eq!(vec2(1, -2).to_string(), "(1, -2)");
  }

  #[test]
  fn from_slice_checks_length() {
    assert_eq!(Vec3f::from_slice(&[1., 2., 3.]), Ok(vec3(1., 2., 3.)));
    assert_eq!(
      Vec3f::from_slice(&[1., 2.]),
      Err(MatrixError::ShapeMismatch {
        expected: 3,
        actual: 2
      })
    );
  }

  #[test]
  fn serde_round_trip() {
    let v = vec4(1.5f32, -2., 0., 1.);
    let bytes = bincode::serialize(&v).unwrap();
    assert_eq!(bincode::deserialize::<Vec4f>(&bytes).unwrap(), v);
    assert!(bincode::deserialize::<Vec3f>(&bytes).is_err());
  }
}
