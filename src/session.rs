//! Match orchestration for a presentation layer.
//!
//! A `Session` owns one match plus everything around it that is not a rule:
//! the mode (two humans, or a human against the computer), the coin toss for
//! the starting color, routing of cell selections (the center confirms, any
//! other cell earmarks), and driving the computer's turns through the same
//! pend/confirm/rotate path a human uses.
//!
//! Timing is left to the caller: after a confirmation that returns
//! [`ConfirmOutcome::Rotate`] the session sits in the Rotating phase until
//! [`Session::finish_rotation`] is called, so an animation can run first.
//!
//! ```
//! use orbit_five::core::{Color, Coord};
//! use orbit_five::game::{ConfirmOutcome, Engine, Phase};
//! use orbit_five::session::{MatchMode, Selection, Session};
//!
//! let mut session = Session::new(Engine::default(), MatchMode::PlayerVsPlayer, 42);
//! session.start_with(Color::White);
//!
//! assert_eq!(session.select_cell(Coord::new(0, 3)), Selection::Pending);
//! assert_eq!(
//!     session.select_cell(Coord::CENTER),
//!     Selection::Confirmed(ConfirmOutcome::Rotate)
//! );
//! assert!(session.finish_rotation());
//! assert_eq!(session.state().current_player(), Color::Black);
//! assert_eq!(session.state().phase(), Phase::Placing);
//! ```

use tracing::{debug, info};

use crate::ai::{GreedyPolicy, MovePolicy};
use crate::core::{Color, Coord, GameRng};
use crate::game::{ConfirmOutcome, Engine, GameState, Phase};
use crate::rules::Status;

/// Who sits at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    PlayerVsPlayer,
    PlayerVsComputer { computer: Color },
}

/// What a cell selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Not accepted: wrong phase, match over, computer's turn, or an
    /// ineligible cell.
    Ignored,
    /// The cell is now the pending placement.
    Pending,
    /// The center was selected with a placement pending.
    Confirmed(ConfirmOutcome),
}

/// A computer turn up to its confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerMove {
    pub coord: Coord,
    pub outcome: ConfirmOutcome,
}

/// One match and its surroundings.
pub struct Session<P: MovePolicy = GreedyPolicy> {
    engine: Engine,
    policy: P,
    mode: MatchMode,
    state: GameState,
    coin: GameRng,
    computer_rng: GameRng,
}

impl Session<GreedyPolicy> {
    /// A session using the built-in computer player.
    pub fn new(engine: Engine, mode: MatchMode, seed: u64) -> Self {
        Self::with_policy(engine, GreedyPolicy, mode, seed)
    }
}

impl<P: MovePolicy> Session<P> {
    /// A session with a custom computer player.
    ///
    /// The match is created with White to move; call [`Session::start`] or
    /// [`Session::start_with`] before play.
    pub fn with_policy(engine: Engine, policy: P, mode: MatchMode, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self {
            state: engine.new_match(Color::White),
            engine,
            policy,
            mode,
            coin: rng.for_context("coin"),
            computer_rng: rng.for_context("computer"),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Read model for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Lifecycle ===

    /// New match, starting color decided by a coin toss. Returns the starter.
    pub fn start(&mut self) -> Color {
        let starting = self.coin.coin_toss();
        self.start_with(starting);
        starting
    }

    /// New match with an explicitly assigned starting color.
    pub fn start_with(&mut self, starting: Color) {
        info!(mode = ?self.mode, %starting, "match started");
        self.engine.reset_match(&mut self.state, starting);
    }

    /// Switch mode and start a fresh coin-tossed match.
    pub fn restart(&mut self, mode: MatchMode) -> Color {
        self.mode = mode;
        self.start()
    }

    // === Turns ===

    /// The computer is to place now.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            MatchMode::PlayerVsComputer { computer } => {
                self.state.status() == Status::InProgress
                    && self.state.phase() == Phase::Placing
                    && self.state.current_player() == computer
            }
            MatchMode::PlayerVsPlayer => false,
        }
    }

    /// Route a human selection: the center confirms, other cells earmark.
    pub fn select_cell(&mut self, coord: Coord) -> Selection {
        if self.is_computer_turn() {
            return Selection::Ignored;
        }
        if coord.is_center() {
            let outcome = self.engine.confirm_center_activation(&mut self.state);
            return match outcome {
                ConfirmOutcome::Rejected => Selection::Ignored,
                outcome => Selection::Confirmed(outcome),
            };
        }
        if self.engine.set_pending(&mut self.state, coord) {
            Selection::Pending
        } else {
            Selection::Ignored
        }
    }

    /// Apply the pending rotation. False if nothing is rotating.
    pub fn finish_rotation(&mut self) -> bool {
        if self.state.phase() != Phase::Rotating {
            return false;
        }
        self.engine.apply_rotation(&mut self.state);
        true
    }

    /// Let the computer pick, earmark and confirm a cell.
    ///
    /// `None` when it is not the computer's turn or it already has a
    /// placement pending. A [`ConfirmOutcome::Rotate`] result still needs
    /// [`Session::finish_rotation`].
    pub fn play_computer_turn(&mut self) -> Option<ComputerMove> {
        if !self.is_computer_turn() || self.state.pending().is_some() {
            return None;
        }
        let color = self.state.current_player();
        let coord = self
            .policy
            .choose(&self.engine, &self.state, color, &mut self.computer_rng)?;

        if !self.engine.set_pending(&mut self.state, coord) {
            debug!(%coord, "computer chose an ineligible cell");
            return None;
        }
        let outcome = self.engine.confirm_center_activation(&mut self.state);
        debug!(%coord, ?outcome, "computer moved");
        Some(ComputerMove { coord, outcome })
    }
}

/// Play `state` to the end with `policy` moving for both colors.
///
/// Each turn adds a piece, so this finishes within 24 placements. Returns
/// the final status (still InProgress only if the policy gave up).
pub fn play_out<P: MovePolicy>(
    engine: &Engine,
    policy: &P,
    state: &mut GameState,
    rng: &mut GameRng,
) -> Status {
    while !state.is_over() {
        let color = state.current_player();
        let Some(coord) = policy.choose(engine, state, color, rng) else {
            break;
        };
        if !engine.set_pending(state, coord) {
            break;
        }
        match engine.confirm_center_activation(state) {
            ConfirmOutcome::Rotate => engine.apply_rotation(state),
            ConfirmOutcome::Resolved(_) => {}
            ConfirmOutcome::Rejected => break,
        }
    }
    state.status()
}
