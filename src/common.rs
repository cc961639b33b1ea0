//! Common types for tic-tac-toe: pieces, squares, move errors and game status.

use core::fmt;

/// One of the two marks a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    /// Moves first.
    X,
    O,
}

impl Piece {
    pub fn symbol(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Square {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Square {
    /// Character used when rendering; empty squares render as a space.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(piece) => piece.symbol(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    pub fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }
}

impl From<Piece> for Square {
    fn from(piece: Piece) -> Self {
        Square::Occupied(piece)
    }
}

/// An index that has passed [`Board::is_legal_move`](crate::Board::is_legal_move).
///
/// Only the board hands these out, so holding one means the square was in
/// range and empty at the time of the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareIndex(pub(crate) usize);

impl SquareIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reasons a requested move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Requested index is outside `0..9`.
    OutOfRange(i64),
    /// Requested square already holds a piece.
    SquareTaken(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(_) => write!(f, "Not a valid square!"),
            MoveError::SquareTaken(_) => write!(f, "That square is already taken!"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Where the board sits in its lifecycle. `Won` and `Drawn` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    InProgress,
    Won(Piece),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Piece> {
        match self {
            GameStatus::Won(piece) => Some(piece),
            _ => None,
        }
    }
}
