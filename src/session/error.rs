//! Rejection reasons for move proposals.

use std::fmt;

use crate::rules::IllegalReason;

/// Why a proposal was refused. A rejected proposal never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The game has ended; only a reset is accepted
    GameOver,
    /// The requester is not the side to move
    NotYourTurn,
    /// The move failed the rules
    IllegalMove(IllegalReason),
}

impl MoveRejection {
    /// The underlying rule failure, for illegal moves.
    #[must_use]
    pub const fn reason(&self) -> Option<IllegalReason> {
        match self {
            MoveRejection::IllegalMove(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "Game is over - reset to play again"),
            MoveRejection::NotYourTurn => write!(f, "Not your turn!"),
            MoveRejection::IllegalMove(_) => write!(f, "Invalid move - check chess rules!"),
        }
    }
}

impl std::error::Error for MoveRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveRejection::IllegalMove(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<IllegalReason> for MoveRejection {
    fn from(reason: IllegalReason) -> Self {
        MoveRejection::IllegalMove(reason)
    }
}
