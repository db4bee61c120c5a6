//! Move legality and terminal-state detection.
//!
//! Everything here is a pure function of the board and the side being
//! asked about. Nothing is cached and no game history is consulted.

mod legality;
mod movegen;
mod terminal;

#[cfg(test)]
mod tests;

pub use legality::{check_move, is_legal_move, path_is_clear, IllegalReason};
pub use movegen::{legal_destinations, legal_moves};
pub use terminal::{detect_terminal_state, Outcome, TerminalState};
