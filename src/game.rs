#![cfg(feature = "std")]

use crate::{
    board::Board,
    common::{GameStatus, Piece, SquareIndex},
    input::{InputError, Terminal},
    player::Player,
};

/// Drives one game between two players over a [`Terminal`].
///
/// The turn counter starts at 0 and advances once per ply. Odd turns belong
/// to the first player, even turns to the second; a rejected move is asked
/// again from the same player without touching the counter.
pub struct GameLoop<T> {
    board: Board,
    players: [Box<dyn Player>; 2],
    terminal: T,
    turn: u32,
}

impl<T: Terminal> GameLoop<T> {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, terminal: T) -> Self {
        Self {
            board: Board::new(),
            players: [first, second],
            terminal,
            turn: 0,
        }
    }

    /// Seat (0 = first player, 1 = second) that moves on `turn`.
    pub fn player_for_turn(turn: u32) -> usize {
        if turn % 2 == 1 {
            0
        } else {
            1
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of plies started so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Piece of the player whose ply is in progress (or the first player
    /// before any ply).
    pub fn active_piece(&self) -> Piece {
        let turn = self.turn.max(1);
        self.players[Self::player_for_turn(turn)].piece()
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Play the game to a win or draw and announce the result.
    pub fn run(&mut self) -> Result<GameStatus, InputError> {
        self.terminal.write_str(&self.board.render())?;
        while self.play_turn()?.is_some() {}

        self.terminal.blank_line()?;
        let status = self.board.status();
        match status.winner() {
            Some(piece) => self.terminal.say(&format!("{} wins!", piece))?,
            None => self.terminal.say("Draw")?,
        }
        log::info!("game finished after {} turns: {:?}", self.turn, status);
        Ok(status)
    }

    /// Play a single ply and show the updated board.
    ///
    /// Returns `None` without asking anyone once the board is in a
    /// terminal state.
    pub fn play_turn(&mut self) -> Result<Option<SquareIndex>, InputError> {
        if self.board.is_game_over() {
            return Ok(None);
        }
        self.turn += 1;
        let seat = Self::player_for_turn(self.turn);
        let piece = self.players[seat].piece();

        let square = loop {
            self.terminal.blank_line()?;
            let requested = self.players[seat].next_move(&mut self.terminal)?;
            match self.board.is_legal_move(requested) {
                Ok(square) => break square,
                Err(e) => {
                    log::debug!("turn {}: {} rejected {}: {:?}", self.turn, piece, requested, e);
                    self.terminal.say(&e.to_string())?;
                }
            }
        };

        self.board.place(piece, square);
        log::debug!("turn {}: {} placed at {}", self.turn, piece, square.index());
        self.terminal.blank_line()?;
        self.terminal.write_str(&self.board.render())?;
        Ok(Some(square))
    }
}
