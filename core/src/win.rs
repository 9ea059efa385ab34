use serde::{Deserialize, Serialize};

use crate::*;

/// Every line that wins the game, in the order they are checked: rows, then
/// columns, then the two diagonals.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed three-in-a-row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    pub player: Player,
    pub line: Line,
}

impl Win {
    pub fn contains(&self, index: CellIndex) -> bool {
        self.line.contains(&index)
    }
}

/// Finds the first line in [`WINNING_LINES`] held entirely by one player.
///
/// A full board without a line also yields `None`; telling a draw apart from
/// a game in progress is up to the caller.
pub fn evaluate(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = board[a].player()?;
        (board[b] == board[a] && board[c] == board[a]).then_some(Win { player, line })
    })
}
