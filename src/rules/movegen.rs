use crate::board::{Board, Color, Square};

use super::is_legal_move;

/// All squares the piece on `from` may move to, in row-major order.
#[must_use]
pub fn legal_destinations(board: &Board, turn: Color, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal_move(board, turn, from, to))
        .collect()
}

/// Every legal `(from, to)` pair for `turn`, ordered by origin then destination.
#[must_use]
pub fn legal_moves(board: &Board, turn: Color) -> Vec<(Square, Square)> {
    board
        .pieces()
        .filter(|&(_, color, _)| color == turn)
        .flat_map(|(from, _, _)| {
            legal_destinations(board, turn, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}
