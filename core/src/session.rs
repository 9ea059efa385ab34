use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A board together with the move that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    /// `None` only for the empty board the game starts from.
    pub last_move: Option<CellIndex>,
}

impl Snapshot {
    pub const fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }
}

/// Derived status of the snapshot under the cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress { next: Player },
    Won(Win),
    Draw,
}

impl GameStatus {
    pub fn of(board: &Board, next: Player) -> Self {
        if let Some(win) = evaluate(board) {
            Self::Won(win)
        } else if board.is_full() {
            Self::Draw
        } else {
            Self::InProgress { next }
        }
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    pub const fn winning_line(self) -> Option<Line> {
        match self {
            Self::Won(win) => Some(win.line),
            _ => None,
        }
    }
}

/// Order in which the move list is meant to be shown. Has no effect on play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayOrder {
    Ascending,
    Descending,
}

impl DisplayOrder {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl Default for DisplayOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

/// One row of the move list handed to the view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub step: usize,
    pub last_move: Option<CellIndex>,
    pub is_current: bool,
}

/// A game with its full move history and a cursor for time travel.
///
/// Whose turn it is comes from the parity of the cursor, so jumping anywhere
/// in the history always leaves the turn consistent with the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionData")]
pub struct GameSession {
    history: Vec<Snapshot>,
    step: usize,
    display_order: DisplayOrder,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
            display_order: Default::default(),
        }
    }

    /// Throws away the whole game, history included.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.step]
    }

    pub fn current_board(&self) -> &Board {
        &self.current_snapshot().board
    }

    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    pub fn current_status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.next_player())
    }

    pub fn can_play_at(&self, index: CellIndex) -> bool {
        !self.current_status().is_final() && self.current_board().is_empty_at(index)
    }

    /// Places the next player's mark at `index`, branching off the snapshot
    /// under the cursor.
    ///
    /// Playing on a won board or an occupied cell is not an error: nothing
    /// happens and [`MoveOutcome::NoChange`] is returned.
    pub fn apply_move(&mut self, index: CellIndex) -> Result<MoveOutcome> {
        let index = Board::validate_index(index)?;
        let current = *self.current_snapshot();

        if let Some(win) = evaluate(&current.board) {
            log::debug!("move at {} rejected, {} already won", index, win.player);
            return Ok(MoveOutcome::NoChange);
        }
        if !current.board.is_empty_at(index) {
            log::debug!("move at {} rejected, cell is taken", index);
            return Ok(MoveOutcome::NoChange);
        }

        let player = self.next_player();
        let board = current.board.with_mark(index, player)?;

        if self.history.len() > self.step + 1 {
            log::trace!(
                "discarding {} future snapshots",
                self.history.len() - self.step - 1
            );
        }
        self.history.truncate(self.step + 1);
        self.history.push(Snapshot {
            board,
            last_move: Some(index),
        });
        self.step = self.history.len() - 1;
        log::debug!("{} played at {}, step {}", player, index, self.step);

        Ok(match self.current_status() {
            GameStatus::InProgress { .. } => MoveOutcome::Placed,
            GameStatus::Won(win) => {
                log::debug!("{} won with {:?}", win.player, win.line);
                MoveOutcome::Won
            }
            GameStatus::Draw => {
                log::debug!("game ended in a draw");
                MoveOutcome::Drew
            }
        })
    }

    /// Moves the cursor to `step` without touching the history.
    pub fn jump_to(&mut self, step: usize) -> Result<()> {
        let len = self.history.len();
        if step >= len {
            return Err(GameError::InvalidStep { step, len });
        }
        log::debug!("jump from step {} to {}", self.step, step);
        self.step = step;
        Ok(())
    }

    pub fn toggle_display_order(&mut self) {
        self.display_order = self.display_order.toggled();
    }

    /// Move list in the order the moves were played.
    pub fn history_list(&self) -> impl DoubleEndedIterator<Item = HistoryEntry> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| HistoryEntry {
                step,
                last_move: snapshot.last_move,
                is_current: step == self.step,
            })
    }

    /// Move list in the order selected by [`Self::toggle_display_order`].
    pub fn history_list_in_display_order(&self) -> Vec<HistoryEntry> {
        match self.display_order {
            DisplayOrder::Ascending => self.history_list().collect(),
            DisplayOrder::Descending => self.history_list().rev().collect(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct SessionData {
    history: Vec<Snapshot>,
    step: usize,
    display_order: DisplayOrder,
}

impl TryFrom<SessionData> for GameSession {
    type Error = GameError;

    fn try_from(data: SessionData) -> Result<Self> {
        let SessionData {
            history,
            step,
            display_order,
        } = data;
        if history.first() != Some(&Snapshot::initial()) {
            return Err(GameError::InvalidHistory);
        }
        for (prev_step, pair) in history.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if !follows(prev, next, Player::for_step(prev_step)) {
                return Err(GameError::InvalidSnapshot {
                    step: prev_step + 1,
                });
            }
        }
        if step >= history.len() {
            return Err(GameError::InvalidStep {
                step,
                len: history.len(),
            });
        }
        Ok(Self {
            history,
            step,
            display_order,
        })
    }
}

/// Whether `next` is what playing one legal move by `player` on `prev` gives.
fn follows(prev: &Snapshot, next: &Snapshot, player: Player) -> bool {
    let Some(index) = next.last_move else {
        return false;
    };
    evaluate(&prev.board).is_none()
        && prev.board.is_empty_at(index)
        && prev.board.with_mark(index, player).ok() == Some(next.board)
}
