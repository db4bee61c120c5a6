use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

/// Contents of a single square: `None` when empty.
pub type Cell = Option<(Color, Piece)>;

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for color in Color::BOTH {
        for (col, &piece) in BACK_ROW.iter().enumerate() {
            board.set_piece(Square(color.back_row(), col), color, piece);
        }
        for col in 0..8 {
            board.set_piece(Square(color.pawn_start_row(), col), color, Piece::Pawn);
        }
    }
    board
});

/// An 8x8 mailbox board.
///
/// Lookups with an off-board square return nothing and writes to one are
/// ignored, so callers never index out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Cell; 8]; 8],
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        *STARTING_BOARD
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        if sq.is_on_board() {
            self.squares[sq.0][sq.1]
        } else {
            None
        }
    }

    /// Returns true if `sq` is on the board and holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_on_board() && self.squares[sq.0][sq.1].is_none()
    }

    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        if sq.is_on_board() {
            self.squares[sq.0][sq.1] = Some((color, piece));
        }
    }

    /// Empty a square, returning what was on it.
    pub fn clear(&mut self, sq: Square) -> Cell {
        if sq.is_on_board() {
            self.squares[sq.0][sq.1].take()
        } else {
            None
        }
    }

    /// Move whatever stands on `from` to `to`, returning the piece that was
    /// replaced on `to`. No legality checks are made.
    pub fn relocate(&mut self, from: Square, to: Square) -> Cell {
        if !from.is_on_board() || !to.is_on_board() {
            return None;
        }
        let moving = self.clear(from);
        std::mem::replace(&mut self.squares[to.0][to.1], moving)
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Returns true if `color` still has a king anywhere on the board.
    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces().any(|(_, c, p)| c == color && p == Piece::King)
    }

    /// Number of pieces `color` has on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|&(_, c, _)| c == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
