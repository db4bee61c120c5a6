pub mod board;
pub mod protocol;
pub mod rules;
pub mod session;
pub mod wire;

pub use board::{Board, Color, Piece, Square};
pub use rules::{detect_terminal_state, is_legal_move, Outcome, TerminalState};
pub use session::{GameSession, GameState, MoveRejection, SessionHandle, SessionOptions};
