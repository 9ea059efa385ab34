use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {0}, must be below 9")]
    InvalidCell(CellIndex),
    #[error("Invalid history step {step}, history has {len} entries")]
    InvalidStep { step: usize, len: usize },
    #[error("History must start from an empty board")]
    InvalidHistory,
    #[error("Snapshot {step} does not follow from one legal move")]
    InvalidSnapshot { step: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
