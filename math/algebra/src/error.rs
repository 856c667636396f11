use std::fmt;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
  #[error("index {position} out of range for a {dimension}x{dimension} square")]
  IndexOutOfRange {
    position: Position,
    dimension: usize,
  },
  #[error("expect {expected} elements to fill the square, got {actual}")]
  ShapeMismatch { expected: usize, actual: usize },
  #[error("singular matrix, determinant is zero")]
  Singular,
}

/// The address a checked access was given, as a row/column pair or a row-major offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
  Pair { row: usize, col: usize },
  Linear(usize),
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Position::Pair { row, col } => write!(f, "({row}, {col})"),
      Position::Linear(index) => write!(f, "{index} (linear)"),
    }
  }
}

#[test]
fn index_errors_read_the_same() {
  let pair = MatrixError::IndexOutOfRange {
    position: Position::Pair { row: 0, col: 3 },
    dimension: 3,
  };
  let linear = MatrixError::IndexOutOfRange {
    position: Position::Linear(9),
    dimension: 3,
  };
  assert_eq!(pair.to_string(), "index (0, 3) out of range for a 3x3 square");
  assert_eq!(linear.to_string(), "index 9 (linear) out of range for a 3x3 square");
}
