//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and the two sides
//! - `Square` - (row, column) coordinate on the 8x8 grid

mod piece;
mod square;

pub use piece::{Color, Piece};
pub use square::Square;
