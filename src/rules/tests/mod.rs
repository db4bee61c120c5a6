//! Rule engine tests.
//!
//! - `legality.rs` - per-piece geometry and the ordered precondition checks
//! - `terminal.rs` - king-capture and stalemate detection
//! - `proptest.rs` - property-based tests over random boards

mod legality;
mod proptest;

use crate::board::Board;

/// Shorthand for building a board from row strings in tests.
pub(super) fn rows(rows: [&str; 8]) -> Board {
    Board::from_rows(&rows).expect("test board rows are valid")
}
