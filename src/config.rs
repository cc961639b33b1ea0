pub const BOARD_WIDTH: usize = 3;
pub const NUM_SQUARES: usize = BOARD_WIDTH * BOARD_WIDTH;

/// A line is three square indices that win when held by one piece.
pub type Line = [usize; BOARD_WIDTH];

pub const ROWS: [Line; BOARD_WIDTH] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
pub const COLUMNS: [Line; BOARD_WIDTH] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
pub const DIAGONALS: [Line; 2] = [[0, 4, 8], [2, 4, 6]];

/// Every winning line in scan order: rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    ROWS[0],
    ROWS[1],
    ROWS[2],
    COLUMNS[0],
    COLUMNS[1],
    COLUMNS[2],
    DIAGONALS[0],
    DIAGONALS[1],
];
