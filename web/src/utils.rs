use tictactoe_core::*;

/// 1-based `(row, col)` of a cell, the way players count squares.
pub(crate) const fn location(index: CellIndex) -> (CellIndex, CellIndex) {
    (row_of(index) + 1, col_of(index) + 1)
}

pub(crate) fn describe_move(entry: &HistoryEntry) -> String {
    match entry.last_move {
        None => format!("#{} Game start", entry.step),
        Some(index) => {
            let (row, col) = location(index);
            format!("#{}: ({}, {})", entry.step, row, col)
        }
    }
}

pub(crate) fn status_text(status: GameStatus) -> String {
    use GameStatus::*;
    match status {
        InProgress { next } => format!("Next player: {}", next),
        Won(win) => format!("Winner: {}", win.player),
        Draw => "Draw".to_string(),
    }
}

pub(crate) const fn order_label(order: DisplayOrder) -> &'static str {
    match order {
        DisplayOrder::Ascending => "Ascending",
        DisplayOrder::Descending => "Descending",
    }
}
