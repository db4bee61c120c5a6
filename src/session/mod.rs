//! The authoritative game session.
//!
//! `GameSession` owns the single `GameState`, validates proposals through
//! the rule engine and applies accepted moves. `SessionHandle` shares one
//! session between callers and serialises access to it.

mod error;
mod game;
mod handle;
mod options;
mod players;

pub use error::MoveRejection;
pub use game::{CapturedPieces, GameSession, GameState, MoveRecord, Phase};
pub use handle::SessionHandle;
pub use options::{SessionOptions, OPTIONS_ENV_VAR};
pub use players::{PlayerInfo, PlayerRegistry};
