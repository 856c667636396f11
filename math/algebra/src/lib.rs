//! Fixed size square matrices with exact cofactor based algebra.
//!
//! The storage layer is [`SquareArray`], a row-major `N x N` container. [`Matrix`] builds the
//! linear algebra surface on top of it: identity, submatrix, cofactor, determinant, adjugate,
//! inverse, transpose and the products. The 4x4 homogeneous transform builders live in
//! [`transform`].
//!
//! Matrix times vector treats the vector as a row vector multiplied from the left, so the flat
//! storage of a transform matrix is directly consumable by column-major graphics apis.

/// Build a [`Matrix`] from rows separated by `;`.
///
/// ```
/// use squaremat_algebra::{mat, Mat2f};
///
/// let m: Mat2f = mat![
///   1., 2.;
///   3., 4.;
/// ];
/// assert_eq!(m.as_slice(), &[1., 2., 3., 4.]);
/// ```
#[macro_export]
macro_rules! mat {
  ( $( $( $elem:expr ),+ );+ $(;)? ) => {
    $crate::Matrix::new([
      $([$($elem),+]),+
    ])
  };
}

mod angle;
mod error;
mod square_array;

pub mod mat;
pub mod vec;

pub use angle::*;
pub use error::*;
pub use mat::*;
pub use square_array::*;
pub use vec::*;

use std::fmt::Debug;

/// The element type storage, products and element-wise ops are defined over.
///
/// Unsigned integers are only good for storage and products. Cofactors need negation, see
/// [`SignedScalar`], and inversion needs real division, see [`Real`].
pub trait Scalar: num_traits::Num + Copy + PartialOrd + Debug {}
impl<T: num_traits::Num + Copy + PartialOrd + Debug> Scalar for T {}

/// Elements that cofactors, determinants and adjugates are defined over: signed integers and
/// floats.
pub trait SignedScalar: Scalar + num_traits::Signed {}
impl<T: Scalar + num_traits::Signed> SignedScalar for T {}

/// Elements a matrix can be inverted over.
pub trait Real: SignedScalar + num_traits::Float {}
impl<T: SignedScalar + num_traits::Float> Real for T {}
