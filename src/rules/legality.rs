use std::fmt;

use crate::board::{Board, Color, Piece, Square};

/// First check a proposed move failed.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalReason {
    /// Origin or destination is outside the 8x8 grid
    OffBoard,
    /// No piece on the origin square
    EmptySource,
    /// The piece belongs to the side not on move
    WrongColor,
    /// Origin and destination are the same square
    NullMove,
    /// Destination holds a piece of the mover's own side
    OwnPieceCaptured,
    /// The piece kind cannot move that way
    BadGeometry,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            IllegalReason::OffBoard => "square is off the board",
            IllegalReason::EmptySource => "no piece on the origin square",
            IllegalReason::WrongColor => "piece belongs to the other side",
            IllegalReason::OwnPieceCaptured => "cannot capture your own piece",
            IllegalReason::NullMove => "origin and destination are the same",
            IllegalReason::BadGeometry => "piece cannot move that way",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for IllegalReason {}

/// Validate a move for `turn`, reporting the first failed check.
///
/// Checks, in order: both squares on the board, a piece on `from`, that
/// piece belongs to `turn`, `from` differs from `to`, `to` is not occupied
/// by the same side, and the piece kind's movement geometry.
pub fn check_move(
    board: &Board,
    turn: Color,
    from: Square,
    to: Square,
) -> Result<(), IllegalReason> {
    if !to.is_on_board() || !from.is_on_board() {
        return Err(IllegalReason::OffBoard);
    }

    let Some((color, piece)) = board.piece_at(from) else {
        return Err(IllegalReason::EmptySource);
    };
    if color != turn {
        return Err(IllegalReason::WrongColor);
    }

    if from == to {
        return Err(IllegalReason::NullMove);
    }

    if let Some((target_color, _)) = board.piece_at(to) {
        if target_color == color {
            return Err(IllegalReason::OwnPieceCaptured);
        }
    }

    if !geometry_allows(board, color, piece, from, to) {
        return Err(IllegalReason::BadGeometry);
    }
    Ok(())
}

/// Returns true if `turn` may move the piece on `from` to `to`.
#[inline]
#[must_use]
pub fn is_legal_move(board: &Board, turn: Color, from: Square, to: Square) -> bool {
    check_move(board, turn, from, to).is_ok()
}

#[inline]
fn delta(from: Square, to: Square) -> (isize, isize) {
    (
        to.0 as isize - from.0 as isize,
        to.1 as isize - from.1 as isize,
    )
}

fn geometry_allows(board: &Board, color: Color, piece: Piece, from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    let (adr, adc) = (dr.abs(), dc.abs());

    match piece {
        Piece::Pawn => pawn_move_allowed(board, color, from, to),
        Piece::Knight => matches!((adr, adc), (2, 1) | (1, 2)),
        Piece::Bishop => adr == adc && adr > 0 && path_is_clear(board, from, to),
        Piece::Rook => ((dr == 0) != (dc == 0)) && path_is_clear(board, from, to),
        Piece::Queen => {
            let straight = (dr == 0) != (dc == 0);
            let diagonal = adr == adc && adr > 0;
            (straight || diagonal) && path_is_clear(board, from, to)
        }
        Piece::King => adr <= 1 && adc <= 1,
    }
}

/// Pawn pushes need an empty destination; the square skipped by a double
/// push from the start row is not inspected. Captures go one step diagonally
/// forward onto an occupied square.
fn pawn_move_allowed(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    let forward = color.pawn_direction();

    if dc == 0 {
        if !board.is_empty(to) {
            return false;
        }
        dr == forward || (from.row() == color.pawn_start_row() && dr == 2 * forward)
    } else {
        dc.abs() == 1 && dr == forward && board.piece_at(to).is_some()
    }
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The walk moves one unit step at a time toward `to`. Squares that are not
/// on a shared row, column or diagonal (or are off the board) have no path
/// and yield false.
#[must_use]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let (dr, dc) = delta(from, to);
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return false;
    }

    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut current = from;
    loop {
        current = match current.offset(step_r, step_c) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}
