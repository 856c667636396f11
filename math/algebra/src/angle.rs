use num_traits::Float;

/// An angle in degrees.
///
/// Bare floats passed to the rotation builders are radians, wrap a value in `Deg` to rotate by
/// degrees instead.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Deg<T> {
  pub value: T,
}

impl<T: Float> Deg<T> {
  pub fn by(value: T) -> Self {
    Deg { value }
  }
  pub fn to_rad(&self) -> T {
    self.value.to_radians()
  }
  pub fn from_rad(rad: T) -> Self {
    Self::by(rad.to_degrees())
  }
}

/// Angles the rotation builders accept: radians as a bare float, or [`Deg`].
pub trait IntoRad<T> {
  fn into_rad(self) -> T;
}

impl<T: Float> IntoRad<T> for T {
  fn into_rad(self) -> T {
    self
  }
}

impl<T: Float> IntoRad<T> for Deg<T> {
  fn into_rad(self) -> T {
    self.to_rad()
  }
}

#[test]
fn half_turn() {
  use std::f64::consts::PI;
  assert!((Deg::by(180f64).to_rad() - PI).abs() < 1e-12);
  assert!((Deg::from_rad(PI).value - 180.).abs() < 1e-9);
  assert_eq!(PI.into_rad(), PI);
  assert_eq!(Deg::by(180f64).into_rad(), Deg::by(180f64).to_rad());
}
