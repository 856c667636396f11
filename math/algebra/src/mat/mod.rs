mod dimension;
mod inverse;
mod matrix;
mod ops;
pub mod transform;

pub use dimension::*;
pub use inverse::*;
pub use matrix::*;
