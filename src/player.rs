#![cfg(feature = "std")]

use crate::common::Piece;
use crate::input::{InputError, Terminal};

/// Interface implemented by different player types.
///
/// A player only knows its piece and how to produce the next requested
/// square index; range and occupancy checks belong to the board.
pub trait Player {
    fn piece(&self) -> Piece;

    /// Ask for the index of the square to move to. May be any integer.
    fn next_move(&mut self, terminal: &mut dyn Terminal) -> Result<i64, InputError>;
}
