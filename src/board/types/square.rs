//! Square type and conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's back rank and row 7 is White's, matching the way the
/// board is drawn with White at the bottom. Out-of-range values are
/// representable so that malformed proposals can be rejected by the rules
/// instead of by the type system; use [`Square::is_on_board`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        let sq = Square(row, col);
        sq.is_on_board().then_some(sq)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Returns true if both coordinates are in 0..8
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Offset this square by a signed delta, returning `None` if the result
    /// leaves the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Iterate over all 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
        } else {
            write!(f, "({},{})", self.0, self.1)
        }
    }
}

impl TryFrom<(i64, i64)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        if !(0..8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if !(0..8).contains(&col) {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row as usize, col as usize))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation: `a8` is (0, 0), `h1` is (7, 7).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
