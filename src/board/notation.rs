//! Letter encoding of pieces and boards.
//!
//! Each square is one character: `PNBRQK` for White, `pnbrqk` for Black and
//! `.` for an empty square. Rows are listed top (row 0, Black's side) first.

use std::fmt;

use super::error::NotationError;
use super::{Board, Cell, Color, Piece, Square};

/// Character used for an empty square.
pub const EMPTY_MARKER: char = '.';

/// Encode a cell as its single-character code.
#[inline]
#[must_use]
pub fn cell_to_char(cell: Cell) -> char {
    match cell {
        Some((color, piece)) => piece.to_colored_char(color),
        None => EMPTY_MARKER,
    }
}

/// Decode a single-character code. Returns `None` for unknown characters.
#[must_use]
pub fn cell_from_char(c: char) -> Option<Cell> {
    if c == EMPTY_MARKER {
        return Some(None);
    }
    let piece = Piece::from_char(c)?;
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Some((color, piece)))
}

impl Board {
    /// Encode the board as an 8x8 character grid, row 0 first.
    #[must_use]
    pub fn to_grid(&self) -> [[char; 8]; 8] {
        let mut grid = [[EMPTY_MARKER; 8]; 8];
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                grid[row][col] = cell_to_char(cell);
            }
        }
        grid
    }

    /// Encode each row as an 8-character string, row 0 first.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.to_grid()
            .iter()
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Decode a board from 8 row strings of 8 characters each.
    ///
    /// ```
    /// use chess_session::board::{Board, Color, Piece, Square};
    ///
    /// let board = Board::from_rows(&[
    ///     "....k...", "........", "........", "........",
    ///     "........", "........", "........", "....K..R",
    /// ]).unwrap();
    /// assert_eq!(board.piece_at(Square(7, 7)), Some((Color::White, Piece::Rook)));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, NotationError> {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.as_ref().chars().map(String::from).collect())
            .collect();
        Board::try_from_cells(&cells)
    }

    /// Decode a board from a grid of one-character strings (the wire shape).
    pub fn try_from_cells<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, NotationError> {
        if rows.len() != 8 {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }
        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(NotationError::WrongColumnCount {
                    row,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                let text = cell.as_ref();
                let invalid = || NotationError::InvalidCell {
                    row,
                    col,
                    cell: text.to_string(),
                };
                let mut chars = text.chars();
                let decoded = match (chars.next(), chars.next()) {
                    (Some(c), None) => cell_from_char(c).ok_or_else(invalid)?,
                    _ => return Err(invalid()),
                };
                if let Some((color, piece)) = decoded {
                    board.set_piece(Square(row, col), color, piece);
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.to_rows().iter().enumerate() {
            writeln!(f, "{} {}", 8 - row, line)?;
        }
        write!(f, "  abcdefgh")
    }
}
