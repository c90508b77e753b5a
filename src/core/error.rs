//! Construction errors.
//!
//! Gameplay never fails with an error: rejected operations are reported as
//! ordinary return values. These types cover the places a caller can hand
//! the engine something it cannot work with at all.

use thiserror::Error;

use super::coord::BOARD_SIZE;

/// Invalid `EngineConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported board size {0}: the ring topology requires {}", BOARD_SIZE)]
    UnsupportedBoardSize(usize),
    #[error("win length {win_length} must be between 1 and the board size {board_size}")]
    InvalidWinLength { win_length: usize, board_size: usize },
}

/// A board that cannot be turned into a playable position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position is already decided")]
    AlreadyDecided,
}

/// A deserialized match state whose parts contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("move count {move_count} does not match {stones} pieces on the board")]
    MoveCountMismatch { move_count: u32, stones: u32 },
    #[error("history holds {history} moves but only {move_count} were made")]
    HistoryTooLong { history: u32, move_count: u32 },
    #[error("phase and status disagree about whether the match is over")]
    PhaseStatusMismatch,
    #[error("pending placement is not a legal earmark for the player to move")]
    InvalidPending,
}
