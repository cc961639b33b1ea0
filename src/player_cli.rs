#![cfg(feature = "std")]

use crate::{
    common::Piece,
    input::{InputError, Terminal},
    player::Player,
};

pub const MOVE_PROMPT: &str = "Enter the index of the square you want to move to (0 to 8): ";

/// Human player entering square indices at the console.
pub struct CliPlayer {
    piece: Piece,
}

impl CliPlayer {
    pub fn new(piece: Piece) -> Self {
        Self { piece }
    }
}

impl Player for CliPlayer {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn next_move(&mut self, terminal: &mut dyn Terminal) -> Result<i64, InputError> {
        terminal.say(&format!("PLAYER {}", self.piece))?;
        terminal.read_int(MOVE_PROMPT)
    }
}
