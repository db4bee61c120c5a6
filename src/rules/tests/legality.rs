//! Move legality tests.

use super::rows;
use crate::board::{Board, Color, Square};
use crate::rules::{check_move, is_legal_move, legal_moves, path_is_clear, IllegalReason};

fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

fn legal(board: &Board, turn: Color, from: &str, to: &str) -> bool {
    is_legal_move(board, turn, sq(from), sq(to))
}

#[test]
fn test_starting_position_move_count() {
    let board = Board::new();
    assert_eq!(legal_moves(&board, Color::White).len(), 20);
    assert_eq!(legal_moves(&board, Color::Black).len(), 20);
}

#[test]
fn test_pawn_single_and_double_push() {
    let board = Board::new();
    assert!(legal(&board, Color::White, "e2", "e3"));
    assert!(legal(&board, Color::White, "e2", "e4"));
    assert!(!legal(&board, Color::White, "e2", "e5"));
    assert!(legal(&board, Color::Black, "d7", "d6"));
    assert!(legal(&board, Color::Black, "d7", "d5"));
}

#[test]
fn test_pawn_cannot_move_backward_or_sideways() {
    let board = rows([
        "....k...", "........", "........", "...P....", "........", "........", "........",
        "....K...",
    ]);
    assert!(!legal(&board, Color::White, "d5", "d4"));
    assert!(!legal(&board, Color::White, "d5", "e5"));
    assert!(legal(&board, Color::White, "d5", "d6"));
}

#[test]
fn test_pawn_double_push_only_from_start_row() {
    let board = rows([
        "....k...", "........", "........", "........", "........", "...P....", "........",
        "....K...",
    ]);
    assert!(legal(&board, Color::White, "d3", "d4"));
    assert!(!legal(&board, Color::White, "d3", "d5"));
}

#[test]
fn test_pawn_double_push_blocked_at_destination() {
    let board = rows([
        "....k...", "........", "........", "........", "....p...", "........", "....P...",
        "....K...",
    ]);
    assert!(legal(&board, Color::White, "e2", "e3"));
    assert!(!legal(&board, Color::White, "e2", "e4"));
}

#[test]
fn test_pawn_double_push_ignores_intermediate_square() {
    let board = rows([
        "....k...", "........", "........", "........", "........", "....n...", "....P...",
        "....K...",
    ]);
    assert!(!legal(&board, Color::White, "e2", "e3"));
    assert!(legal(&board, Color::White, "e2", "e4"));
}

#[test]
fn test_pawn_captures_diagonally_only() {
    let board = rows([
        "....k...", "........", "........", "........", "...p.p..", "....p...", "....P...",
        "....K...",
    ]);
    // Blocked straight ahead, no capture forward
    assert!(!legal(&board, Color::White, "e2", "e3"));

    let board = rows([
        "....k...", "........", "........", "........", "........", "...p.N..", "....P...",
        "....K...",
    ]);
    assert!(legal(&board, Color::White, "e2", "d3"));
    assert_eq!(
        check_move(&board, Color::White, sq("e2"), sq("f3")),
        Err(IllegalReason::OwnPieceCaptured)
    );

    // Diagonal onto an empty square is not a move
    let board = Board::new();
    assert!(!legal(&board, Color::White, "e2", "d3"));
}

#[test]
fn test_black_pawn_direction() {
    let board = rows([
        "....k...", "........", "........", "...p....", "....P...", "........", "........",
        "....K...",
    ]);
    assert!(legal(&board, Color::Black, "d5", "d4"));
    assert!(legal(&board, Color::Black, "d5", "e4"));
    assert!(!legal(&board, Color::Black, "d5", "d6"));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::new();
    assert!(legal(&board, Color::White, "b1", "c3"));
    assert!(legal(&board, Color::White, "b1", "a3"));
    assert!(!legal(&board, Color::White, "b1", "b3"));
    assert!(legal(&board, Color::Black, "g8", "f6"));
}

#[test]
fn test_bishop_needs_clear_diagonal() {
    let board = Board::new();
    assert!(!legal(&board, Color::White, "c1", "e3"));

    let board = rows([
        "....k...", "........", "........", "......p.", "........", "........", "........",
        "..B.K...",
    ]);
    assert!(legal(&board, Color::White, "c1", "f4"));
    assert!(legal(&board, Color::White, "c1", "g5"));
    assert!(!legal(&board, Color::White, "c1", "h6"));
    assert!(!legal(&board, Color::White, "c1", "c2"));
    assert!(!legal(&board, Color::White, "c1", "d3"));
}

#[test]
fn test_rook_straight_lines_with_path() {
    let board = rows([
        "....k...", "........", "........", "........", "R..p....", "........", "........",
        "....K...",
    ]);
    assert!(legal(&board, Color::White, "a4", "c4"));
    assert!(legal(&board, Color::White, "a4", "d4"));
    assert!(!legal(&board, Color::White, "a4", "e4"));
    assert!(legal(&board, Color::White, "a4", "a8"));
    assert!(!legal(&board, Color::White, "a4", "b5"));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let board = rows([
        "....k...", "........", "........", "........", "...Q....", "........", "........",
        "....K...",
    ]);
    assert!(legal(&board, Color::White, "d4", "d8"));
    assert!(legal(&board, Color::White, "d4", "h4"));
    assert!(legal(&board, Color::White, "d4", "g7"));
    assert!(legal(&board, Color::White, "d4", "a1"));
    assert!(!legal(&board, Color::White, "d4", "e6"));
    assert!(!legal(&board, Color::White, "d4", "f3"));
}

#[test]
fn test_queen_blocked_by_any_piece() {
    let board = Board::new();
    assert!(!legal(&board, Color::White, "d1", "d3"));
    assert!(!legal(&board, Color::White, "d1", "h5"));
}

#[test]
fn test_king_single_step() {
    let board = rows([
        "....k...", "........", "........", "........", "........", "........", "........",
        "....K...",
    ]);
    assert!(legal(&board, Color::White, "e1", "d1"));
    assert!(legal(&board, Color::White, "e1", "e2"));
    assert!(legal(&board, Color::White, "e1", "f2"));
    assert!(!legal(&board, Color::White, "e1", "g1"));
    assert!(!legal(&board, Color::White, "e1", "e3"));
}

#[test]
fn test_precondition_reasons() {
    let board = Board::new();
    assert_eq!(
        check_move(&board, Color::White, Square(6, 4), Square(8, 4)),
        Err(IllegalReason::OffBoard)
    );
    assert_eq!(
        check_move(&board, Color::White, Square(9, 9), Square(5, 4)),
        Err(IllegalReason::OffBoard)
    );
    assert_eq!(
        check_move(&board, Color::White, sq("e4"), sq("e5")),
        Err(IllegalReason::EmptySource)
    );
    assert_eq!(
        check_move(&board, Color::White, sq("e7"), sq("e5")),
        Err(IllegalReason::WrongColor)
    );
    assert_eq!(
        check_move(&board, Color::White, sq("e2"), sq("e2")),
        Err(IllegalReason::NullMove)
    );
    assert_eq!(
        check_move(&board, Color::White, sq("a1"), sq("a2")),
        Err(IllegalReason::OwnPieceCaptured)
    );
    assert_eq!(
        check_move(&board, Color::White, sq("a1"), sq("a3")),
        Err(IllegalReason::BadGeometry)
    );
    assert_eq!(check_move(&board, Color::White, sq("g1"), sq("f3")), Ok(()));
}

#[test]
fn test_path_is_clear_walks_strictly_between() {
    let board = Board::new();
    // Adjacent squares have nothing between them
    assert!(path_is_clear(&board, sq("a1"), sq("a2")));
    assert!(path_is_clear(&board, sq("a2"), sq("a7")));
    assert!(!path_is_clear(&board, sq("a1"), sq("a3")));
    assert!(!path_is_clear(&board, sq("c1"), sq("e3")));
    assert!(path_is_clear(&board, sq("a3"), sq("d6")));
}

#[test]
fn test_path_is_clear_rejects_unaligned_and_off_board() {
    let board = Board::empty();
    assert!(!path_is_clear(&board, sq("a1"), sq("b3")));
    assert!(!path_is_clear(&board, Square(0, 0), Square(0, 9)));
}
