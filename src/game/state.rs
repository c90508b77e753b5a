//! Game state aggregate.
//!
//! ## GameState
//!
//! Everything the presentation layer renders after each operation:
//! - Board occupancy
//! - Current player, pending (unconfirmed) placement
//! - Confirmed move count and history
//! - Result status and turn phase
//!
//! The state is caller-owned and read-only from outside this module; every
//! mutation goes through [`Engine`](super::Engine). Any number of matches can
//! live side by side.
//!
//! History uses `im` persistent vectors so cloning a state for lookahead is
//! O(1).
//!
//! Deserialization checks that the parts agree with each other (piece count
//! against move count, phase against status, the pending earmark against
//! the board) and fails with a [`StateError`] otherwise.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Color, Coord, StateError};
use crate::rules::Status;

/// Coarse step within a single turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Awaiting a placement and/or its confirmation.
    #[default]
    Placing,
    /// Placement confirmed; waiting for the caller to apply the rotation.
    Rotating,
    /// Terminal.
    Ended,
}

/// A previewed but unconfirmed placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pending {
    pub coord: Coord,
    pub color: Color,
}

/// A confirmed placement, as it was made (before any rotation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub number: u32,
    pub color: Color,
    pub coord: Coord,
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(super) board: Board,
    pub(super) current_player: Color,
    pub(super) pending: Option<Pending>,
    pub(super) move_count: u32,
    pub(super) status: Status,
    pub(super) phase: Phase,
    pub(super) history: Vector<MoveRecord>,
}

/// Unchecked wire form of a `GameState`.
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Color,
    pending: Option<Pending>,
    move_count: u32,
    status: Status,
    phase: Phase,
    history: Vector<MoveRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let stones = raw.board.stones() as u32;
        if stones != raw.move_count {
            return Err(StateError::MoveCountMismatch {
                move_count: raw.move_count,
                stones,
            });
        }
        let history = raw.history.len() as u32;
        if history > raw.move_count {
            return Err(StateError::HistoryTooLong {
                history,
                move_count: raw.move_count,
            });
        }
        if (raw.phase == Phase::Ended) != raw.status.is_over() {
            return Err(StateError::PhaseStatusMismatch);
        }
        if let Some(pending) = raw.pending {
            if raw.phase != Phase::Placing
                || pending.color != raw.current_player
                || !raw.board.is_open(pending.coord)
            {
                return Err(StateError::InvalidPending);
            }
        }

        Ok(Self {
            board: raw.board,
            current_player: raw.current_player,
            pending: raw.pending,
            move_count: raw.move_count,
            status: raw.status,
            phase: raw.phase,
            history: raw.history,
        })
    }
}

impl GameState {
    /// A fresh match: empty board, `starting` to move, Placing.
    #[must_use]
    pub fn new(starting: Color) -> Self {
        Self {
            board: Board::new(),
            current_player: starting,
            pending: None,
            move_count: 0,
            status: Status::InProgress,
            phase: Phase::Placing,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Confirmed placements so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Confirmed placements in order. Empty for restored positions.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Empty playable cells in row-major order; none once the match is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.board.open_cells().collect()
    }

    pub(super) fn end(&mut self, status: Status) {
        debug_assert!(status.is_over());
        self.status = status;
        self.phase = Phase::Ended;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Color::Black);

        assert_eq!(state.current_player(), Color::Black);
        assert_eq!(state.pending(), None);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.phase(), Phase::Placing);
        assert!(state.history().is_empty());
        assert_eq!(state.board().stones(), 0);
        assert!(!state.is_over());
        assert_eq!(state.legal_moves().len(), 24);
    }

    #[test]
    fn test_end_clears_pending() {
        let mut state = GameState::new(Color::White);
        state.pending = Some(Pending {
            coord: Coord::new(0, 0),
            color: Color::White,
        });

        state.end(Status::Draw);

        assert_eq!(state.phase(), Phase::Ended);
        assert_eq!(state.pending(), None);
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = GameState::new(Color::White);
        state.history.push_back(MoveRecord {
            number: 1,
            color: Color::White,
            coord: Coord::new(0, 0),
        });

        let mut copy = state.clone();
        copy.history.push_back(MoveRecord {
            number: 2,
            color: Color::Black,
            coord: Coord::new(0, 1),
        });

        assert_eq!(state.history().len(), 1);
        assert_eq!(copy.history().len(), 2);
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::new(Color::Black);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    fn tampered(edit: impl FnOnce(&mut serde_json::Value)) -> Result<GameState, serde_json::Error> {
        let mut state = GameState::new(Color::White);
        state.board.set(Coord::new(0, 0), Cell::White);
        state.move_count = 1;
        state.history.push_back(MoveRecord {
            number: 1,
            color: Color::White,
            coord: Coord::new(0, 0),
        });
        state.current_player = Color::Black;

        let mut value = serde_json::to_value(&state).unwrap();
        edit(&mut value);
        serde_json::from_value(value)
    }

    #[test]
    fn test_deserialize_accepts_consistent_state() {
        let state = tampered(|_| {}).unwrap();
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.board().stones(), 1);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_state() {
        let err = tampered(|v| v["move_count"] = 4.into()).unwrap_err();
        assert!(err.to_string().contains("does not match 1 pieces"));

        let err = tampered(|v| {
            v["move_count"] = 0.into();
            v["board"] = serde_json::to_value(Board::new()).unwrap();
        })
        .unwrap_err();
        assert!(err.to_string().contains("history holds 1 moves"));

        let err = tampered(|v| v["phase"] = "Ended".into()).unwrap_err();
        assert!(err.to_string().contains("phase and status disagree"));

        let err = tampered(|v| {
            v["pending"] = serde_json::json!({ "coord": { "row": 0, "col": 0 }, "color": "Black" });
        })
        .unwrap_err();
        assert!(err.to_string().contains("pending placement"));

        let err = tampered(|v| {
            v["pending"] = serde_json::json!({ "coord": { "row": 1, "col": 1 }, "color": "White" });
        })
        .unwrap_err();
        assert!(err.to_string().contains("pending placement"));
    }
}
