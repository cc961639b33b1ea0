//! The 3x3 grid: placement, legal-move checks and win/draw detection.

use crate::common::{GameStatus, MoveError, Piece, Square, SquareIndex};
use crate::config::{NUM_SQUARES, ROWS, WINNING_LINES};
use core::cell::Cell;
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Memoized result of the winning-line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WinnerCache {
    /// Board changed since the last scan.
    Stale,
    Known(Option<Piece>),
}

#[derive(Debug, Clone)]
pub struct Board {
    squares: [Square; NUM_SQUARES],
    winner: Cell<WinnerCache>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::from_squares([Square::Empty; NUM_SQUARES])
    }

    /// Build a board from an arbitrary grid in row-major order.
    ///
    /// No consistency checks are made, so grids that cannot arise in play
    /// (both pieces holding a line, uneven piece counts) are accepted.
    pub fn from_squares(squares: [Square; NUM_SQUARES]) -> Self {
        Board {
            squares,
            winner: Cell::new(WinnerCache::Stale),
        }
    }

    /// All squares in row-major order (`index = row * 3 + col`).
    pub fn squares(&self) -> &[Square; NUM_SQUARES] {
        &self.squares
    }

    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Indices that are still open for a move.
    pub fn empty_squares(&self) -> impl Iterator<Item = SquareIndex> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| sq.is_empty())
            .map(|(i, _)| SquareIndex(i))
    }

    /// Check that `index` names an empty square on this board.
    pub fn is_legal_move(&self, index: i64) -> Result<SquareIndex, MoveError> {
        let i = usize::try_from(index)
            .ok()
            .filter(|&i| i < NUM_SQUARES)
            .ok_or(MoveError::OutOfRange(index))?;
        if !self.squares[i].is_empty() {
            return Err(MoveError::SquareTaken(i));
        }
        Ok(SquareIndex(i))
    }

    /// Write `piece` into the square.
    ///
    /// This is a plain write with no validation: the caller must obtain
    /// `square` from [`Board::is_legal_move`] on the current board state and
    /// place it once. Reusing a stale index would overwrite a piece, which
    /// breaks the rule that occupied squares never change; debug builds
    /// panic in that case, release builds do not check.
    pub fn place(&mut self, piece: Piece, square: SquareIndex) {
        let i = square.index();
        debug_assert!(
            self.squares[i].is_empty(),
            "place on occupied square {i}"
        );
        self.squares[i] = Square::Occupied(piece);
        // a completed line stays completed, so a known winner survives writes
        if !matches!(self.winner.get(), WinnerCache::Known(Some(_))) {
            self.winner.set(WinnerCache::Stale);
        }
    }

    /// The piece holding a full line, if any.
    ///
    /// X's lines are checked before O's, each in rows, columns, diagonals
    /// order. The answer is cached until the next `place`.
    pub fn winner(&self) -> Option<Piece> {
        if let WinnerCache::Known(winner) = self.winner.get() {
            return winner;
        }
        let winner = self.scan_winner();
        self.winner.set(WinnerCache::Known(winner));
        winner
    }

    fn scan_winner(&self) -> Option<Piece> {
        [Piece::X, Piece::O].into_iter().find(|&piece| {
            WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&i| self.squares[i] == Square::Occupied(piece)))
        })
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|sq| !sq.is_empty())
    }

    /// `true` once someone has won or no empty square remains.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(piece) => GameStatus::Won(piece),
            None if self.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Text layout of the grid, one line per row with dashed separators.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Square; NUM_SQUARES]> for Board {
    fn from(squares: [Square; NUM_SQUARES]) -> Self {
        Board::from_squares(squares)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in ROWS.iter().enumerate() {
            if row > 0 {
                writeln!(f, "---|---|---")?;
            }
            let [a, b, c] = line.map(|i| self.squares[i].symbol());
            writeln!(f, " {} | {} | {} ", a, b, c)?;
        }
        Ok(())
    }
}
