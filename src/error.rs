//! Error types.
//!
//! Every check runs before any buffer is touched, so an `Err` always means
//! the receiver is exactly as it was before the call.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// Any failure reported by a matrix operation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// Operand shapes are incompatible with the operation.
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// A bounds-checked access fell outside the matrix.
    #[error("index ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    Index {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Encoded data is structurally inconsistent.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl MatrixError {
    pub fn is_dimension(&self) -> bool {
        matches!(self, MatrixError::Dimension(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, MatrixError::Index { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, MatrixError::Format(_))
    }
}

/// Details of a shape failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DimensionError {
    #[error("dimensions must be positive, got {rows}x{columns}")]
    NonPositive { rows: usize, columns: usize },

    #[error("{op}: incompatible shapes {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    Mismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("expected a square matrix, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    #[error("expected a row or column vector, got {rows}x{columns}")]
    NotVector { rows: usize, columns: usize },

    #[error("expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("{rows}x{columns} overflows the addressable cell count")]
    TooLarge { rows: usize, columns: usize },
}

/// Details of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("encoded dimensions must be positive, got {rows}x{columns}")]
    NonPositive { rows: i32, columns: i32 },

    #[error("encoded {rows}x{columns} matrix carries {got} values")]
    LengthMismatch { rows: i32, columns: i32, got: usize },

    #[error("{rows}x{columns} matrix does not fit the 32-bit encoded header")]
    TooLarge { rows: usize, columns: usize },
}
