//! Error types for board coordinates and notation.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: i64 },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: i64 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for decoding boards and game states from their letter encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Board does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// A row does not have exactly 8 cells
    WrongColumnCount { row: usize, found: usize },
    /// A cell is not a piece letter or the empty marker
    InvalidCell { row: usize, col: usize, cell: String },
    /// A piece field is not a single piece letter
    InvalidPiece { found: String },
    /// A recorded square is off the board
    InvalidSquare(SquareError),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongRowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            NotationError::WrongColumnCount { row, found } => {
                write!(f, "Row {row} must have 8 cells, found {found}")
            }
            NotationError::InvalidCell { row, col, cell } => {
                write!(f, "Invalid cell '{cell}' at ({row},{col})")
            }
            NotationError::InvalidPiece { found } => {
                write!(f, "Invalid piece '{found}'")
            }
            NotationError::InvalidSquare(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for NotationError {
    fn from(err: SquareError) -> Self {
        NotationError::InvalidSquare(err)
    }
}
