//! Win detection over the fixed line table.

use super::types::{Board, Mark, Square};

/// A winning triple of board indices.
pub type WinLine = [usize; 3];

/// The 8 win lines in canonical order: rows, then columns, then diagonals.
///
/// The order is fixed so that a board completing several lines at once
/// always reports the same one.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Scans the board for a completed line.
///
/// Returns the owning mark and the first matching line in canonical
/// order, or `None` when no line is complete.
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(Square::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(mark))
            && board.get(c) == Some(Square::Occupied(mark))
        {
            return Some((mark, line));
        }
    }
    None
}
