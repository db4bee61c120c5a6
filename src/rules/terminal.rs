use std::fmt;

use crate::board::{Board, Color};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{color} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of inspecting a board after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalState {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl TerminalState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, TerminalState::Ongoing)
    }

    /// The recorded outcome, if the game has ended.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            TerminalState::Ongoing => None,
            TerminalState::Checkmate { winner } => Some(Outcome::Winner(winner)),
            TerminalState::Stalemate => Some(Outcome::Draw),
        }
    }
}

/// Inspect the board right after `mover` has moved.
///
/// "Checkmate" here means the opponent's king is gone: kings are captured
/// like any other piece and the game ends the moment one leaves the board.
/// There is no attack or pin analysis and no look-ahead.
#[must_use]
pub fn detect_terminal_state(board: &Board, mover: Color) -> TerminalState {
    let defender = mover.opponent();
    if !board.has_king(defender) {
        TerminalState::Checkmate { winner: mover }
    } else if is_stalemate(board, defender) {
        TerminalState::Stalemate
    } else {
        TerminalState::Ongoing
    }
}

// Stalemate is never declared; a position with no legal moves just waits.
fn is_stalemate(_board: &Board, _side: Color) -> bool {
    false
}
