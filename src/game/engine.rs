//! Turn state machine.
//!
//! A turn runs placement -> confirm -> rotate -> resolve:
//!
//! 1. `preview` / `set_pending` earmark an empty playable cell for the
//!    current player (phase Placing).
//! 2. `confirm_center_activation` commits the pending piece. If it wins
//!    (when `win_on_place` is set) or fills the board, the match ends here
//!    and the caller must skip rotation. Otherwise phase becomes Rotating.
//! 3. While Rotating no placement operation is accepted. The caller may run
//!    an animation, then calls `apply_rotation`.
//! 4. `apply_rotation` turns both rings and resolves: a win (the mover takes
//!    a simultaneous double win), a draw, or the turn passes to the opponent
//!    and phase returns to Placing.
//!
//! User-level rejections are return values. Calling the rotation steps
//! outside Rotating is a caller bug and panics.

use tracing::{debug, instrument, trace};

use crate::board::Board;
use crate::core::{Color, ConfigError, Coord, EngineConfig, PositionError};
use crate::rules::{is_draw, rotate_board, Status, WinDetector};

use super::state::{GameState, MoveRecord, Pending, Phase};

/// Result of [`Engine::confirm_center_activation`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Not Placing, match over, or nothing pending. State untouched.
    Rejected,
    /// The placement ended the match; do not rotate.
    Resolved(Status),
    /// Phase is now Rotating; call [`Engine::apply_rotation`] next.
    Rotate,
}

/// Rules engine for one configuration. Holds no match state.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    detector: WinDetector,
}

impl Default for Engine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            detector: WinDetector::new(&config),
            config,
        }
    }
}

impl Engine {
    /// Validate `config` and precompute the segment set.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            detector: WinDetector::new(&config),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn detector(&self) -> &WinDetector {
        &self.detector
    }

    // === Match lifecycle ===

    /// A fresh match with `starting` to move.
    #[must_use]
    pub fn new_match(&self, starting: Color) -> GameState {
        GameState::new(starting)
    }

    /// Discard `state` and start over with `starting` to move.
    pub fn reset_match(&self, state: &mut GameState, starting: Color) {
        debug!(starting = %starting, "match reset");
        *state = GameState::new(starting);
    }

    /// A Placing state for an arbitrary board with `to_move` to play.
    ///
    /// Move count is the number of pieces on the board; history is empty.
    pub fn position(&self, board: Board, to_move: Color) -> Result<GameState, PositionError> {
        if board.is_full() || self.detector.check_win(&board, to_move).is_some() {
            return Err(PositionError::AlreadyDecided);
        }

        let mut state = GameState::new(to_move);
        state.move_count = board.stones() as u32;
        state.board = board;
        Ok(state)
    }

    // === Queries ===

    /// True if `color` owns a complete segment.
    #[must_use]
    pub fn has_winner(&self, state: &GameState, color: Color) -> bool {
        self.detector.has_winner(&state.board, color)
    }

    /// Winner over both colors, the current player taking a tie.
    #[must_use]
    pub fn check_win(&self, state: &GameState) -> Option<Color> {
        self.detector.check_win(&state.board, state.current_player)
    }

    #[must_use]
    pub fn is_draw(&self, state: &GameState) -> bool {
        is_draw(state.status, &state.board)
    }

    // === Placement ===

    /// Whether the current player may earmark `coord`. Never mutates.
    #[must_use]
    pub fn preview(&self, state: &GameState, coord: Coord) -> bool {
        state.phase == Phase::Placing
            && state.status == Status::InProgress
            && state.board.is_open(coord)
    }

    /// Earmark `coord` for the current player, replacing any earlier pending
    /// placement. Re-validates with [`Engine::preview`]; returns false and
    /// leaves the state untouched when ineligible.
    pub fn set_pending(&self, state: &mut GameState, coord: Coord) -> bool {
        if !self.preview(state, coord) {
            trace!(%coord, phase = ?state.phase, "pending placement rejected");
            return false;
        }
        state.pending = Some(Pending {
            coord,
            color: state.current_player,
        });
        true
    }

    /// Drop the pending placement. False if there was none or not Placing.
    pub fn clear_pending(&self, state: &mut GameState) -> bool {
        if state.phase != Phase::Placing {
            return false;
        }
        state.pending.take().is_some()
    }

    /// Commit the pending placement and decide whether the rings rotate.
    #[instrument(level = "debug", skip_all, fields(player = %state.current_player, moves = state.move_count))]
    pub fn confirm_center_activation(&self, state: &mut GameState) -> ConfirmOutcome {
        if state.phase != Phase::Placing || state.status != Status::InProgress {
            trace!(phase = ?state.phase, "confirm rejected");
            return ConfirmOutcome::Rejected;
        }
        let Some(Pending { coord, color }) = state.pending.take() else {
            trace!("confirm rejected: nothing pending");
            return ConfirmOutcome::Rejected;
        };

        state.board.set(coord, color.into());
        state.move_count += 1;
        state.history.push_back(MoveRecord {
            number: state.move_count,
            color,
            coord,
        });
        debug!(%coord, %color, "placement confirmed");

        if self.config.win_on_place && self.detector.has_winner(&state.board, color) {
            let status = Status::win_for(color);
            debug!(?status, "won on placement");
            state.end(status);
            return ConfirmOutcome::Resolved(status);
        }

        if self.is_draw(state) {
            debug!("board full after placement");
            state.end(Status::Draw);
            return ConfirmOutcome::Resolved(Status::Draw);
        }

        state.phase = Phase::Rotating;
        ConfirmOutcome::Rotate
    }

    // === Rotation ===

    /// Rotate both rings, then resolve the turn.
    ///
    /// # Panics
    ///
    /// If the phase is not Rotating.
    pub fn apply_rotation(&self, state: &mut GameState) {
        assert_eq!(
            state.phase,
            Phase::Rotating,
            "apply_rotation called outside the Rotating phase"
        );
        rotate_board(&mut state.board);
        debug!("rings rotated");
        self.resolve_post_rotation(state);
    }

    /// Full win check after rotation, then draw check, else hand the turn
    /// to the opponent.
    ///
    /// # Panics
    ///
    /// If the phase is not Rotating.
    pub fn resolve_post_rotation(&self, state: &mut GameState) {
        assert_eq!(
            state.phase,
            Phase::Rotating,
            "resolve_post_rotation called outside the Rotating phase"
        );

        if let Some(winner) = self.check_win(state) {
            let status = Status::win_for(winner);
            debug!(?status, "won after rotation");
            state.end(status);
            return;
        }

        if self.is_draw(state) {
            debug!("board full after rotation");
            state.end(Status::Draw);
            return;
        }

        state.current_player = state.current_player.opponent();
        state.phase = Phase::Placing;
        debug!(next = %state.current_player, "turn passed");
    }
}
