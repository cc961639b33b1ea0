#![cfg(feature = "std")]

use std::collections::VecDeque;

use crate::{
    common::Piece,
    input::{InputError, Terminal},
    player::Player,
};

/// Player that replays a fixed list of square indices.
///
/// Used by the `sim` binary and tests. Running out of moves behaves like
/// closed input.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    piece: Piece,
    moves: VecDeque<i64>,
    requests: usize,
}

impl ScriptedPlayer {
    pub fn new(piece: Piece, moves: impl IntoIterator<Item = i64>) -> Self {
        Self {
            piece,
            moves: moves.into_iter().collect(),
            requests: 0,
        }
    }

    /// How many times the game asked this player for a move.
    pub fn requests(&self) -> usize {
        self.requests
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn next_move(&mut self, _terminal: &mut dyn Terminal) -> Result<i64, InputError> {
        self.requests += 1;
        self.moves.pop_front().ok_or(InputError::Closed)
    }
}
