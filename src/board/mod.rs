//! Board representation.
//!
//! A plain 8x8 mailbox: each square holds `Option<(Color, Piece)>`. Row 0 is
//! Black's back rank, row 7 is White's.
//!
//! # Example
//! ```
//! use chess_session::board::{Board, Color, Piece, Square};
//!
//! let board = Board::new();
//! assert_eq!(board.piece_at(Square(7, 4)), Some((Color::White, Piece::King)));
//! ```

mod builder;
mod error;
pub mod notation;
mod state;
mod types;

pub use builder::BoardBuilder;
pub use error::{NotationError, SquareError};
pub use state::{Board, Cell};
pub use types::{Color, Piece, Square};
