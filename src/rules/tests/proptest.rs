//! Property-based tests using proptest.

use crate::board::{Board, Cell, Color, Piece, Square};
use crate::rules::{is_legal_move, legal_moves};
use proptest::prelude::*;

fn color_strategy() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::BOTH.to_vec())
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop::sample::select(Piece::ALL.to_vec())
}

fn slider_strategy() -> impl Strategy<Value = Piece> {
    prop::sample::select(vec![Piece::Bishop, Piece::Rook, Piece::Queen])
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..8usize, 0..8usize).prop_map(|(row, col)| Square(row, col))
}

/// Mostly-empty cells so that random boards have open lines.
fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        3 => Just(None),
        1 => (color_strategy(), piece_strategy()).prop_map(Some),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell_strategy(), 64).prop_map(|cells| {
        let mut board = Board::empty();
        for (idx, cell) in cells.into_iter().enumerate() {
            if let Some((color, piece)) = cell {
                board.set_piece(Square(idx / 8, idx % 8), color, piece);
            }
        }
        board
    })
}

/// Squares strictly between two aligned squares, computed independently of
/// the rule engine's walk.
fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let dr = to.0 as isize - from.0 as isize;
    let dc = to.1 as isize - from.1 as isize;
    let steps = dr.abs().max(dc.abs());
    (1..steps)
        .map(|k| {
            Square(
                (from.0 as isize + k * dr.signum()) as usize,
                (from.1 as isize + k * dc.signum()) as usize,
            )
        })
        .collect()
}

proptest! {
    /// Property: a sliding move through any occupied square is rejected
    #[test]
    fn prop_sliders_never_pass_through_pieces(
        board in board_strategy(),
        color in color_strategy(),
        slider in slider_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let mut board = board;
        board.set_piece(from, color, slider);

        let between = squares_between(from, to);
        let blocked = between.iter().any(|&sq| board.piece_at(sq).is_some());
        if blocked {
            prop_assert!(!is_legal_move(&board, color, from, to));
        }
    }

    /// Property: a double push depends only on the start row and the far square
    #[test]
    fn prop_double_push_ignores_skipped_square(
        board in board_strategy(),
        color in color_strategy(),
        col in 0..8usize,
        skipped in prop::option::of((color_strategy(), piece_strategy())),
    ) {
        let mut board = board;
        let start = Square(color.pawn_start_row(), col);
        let one = start.offset(color.pawn_direction(), 0).unwrap();
        let two = one.offset(color.pawn_direction(), 0).unwrap();
        board.set_piece(start, color, Piece::Pawn);

        let expected = board.is_empty(two);
        prop_assert_eq!(is_legal_move(&board, color, start, two), expected);

        match skipped {
            Some((c, p)) => board.set_piece(one, c, p),
            None => {
                board.clear(one);
            }
        }
        prop_assert_eq!(is_legal_move(&board, color, start, two), expected);
    }

    /// Property: off-board destinations and origins are always illegal
    #[test]
    fn prop_off_board_is_illegal(
        board in board_strategy(),
        color in color_strategy(),
        from in square_strategy(),
        row in 8..64usize,
        col in 0..64usize,
    ) {
        prop_assert!(!is_legal_move(&board, color, from, Square(row, col)));
        prop_assert!(!is_legal_move(&board, color, Square(col, row), from));
    }

    /// Property: generated moves move the side's own piece and never land on it
    #[test]
    fn prop_legal_moves_respect_ownership(board in board_strategy(), color in color_strategy()) {
        for (from, to) in legal_moves(&board, color) {
            prop_assert_eq!(board.piece_at(from).map(|(c, _)| c), Some(color));
            prop_assert_ne!(board.piece_at(to).map(|(c, _)| c), Some(color));
            prop_assert_ne!(from, to);
        }
    }
}
